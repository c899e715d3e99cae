//! Calculation logic for the payroll engine.
//!
//! This module contains the rule functions for the monthly payslip (hourly
//! rate, daytime overtime, night premium and night overtime, training bonus,
//! weekly rest on variable pay), the progressive INSS and IRRF bracket
//! tables, and the vacation, thirteenth-salary and summary computations
//! built on top of them.

mod brackets;
mod hourly_rate;
mod monthly;
mod night_shift;
mod overtime;
mod summary;
mod thirteenth;
mod training_bonus;
mod vacation;
mod weekly_rest;

pub use brackets::{
    BracketCharge, BracketOutcome, BracketTable, BracketTier, INSS_CLAUSE, IRRF_CLAUSE,
    PayrollTaxes, TaxBracketResult, apply_bracket_table, assess_payroll_taxes,
    contribution_table, withholding_table,
};
pub use hourly_rate::{HOURLY_RATE_CLAUSE, HourlyRateResult, calculate_hourly_rate};
pub use monthly::compute_monthly;
pub use night_shift::{
    NIGHT_SHIFT_CLAUSE, NightOvertimeResult, NightShiftResult, calculate_night_overtime,
    calculate_night_shift,
};
pub use overtime::{OVERTIME_CLAUSE, OvertimeResult, calculate_overtime};
pub use summary::{NEGATIVE_NET_PAY, compute_summary};
pub use thirteenth::{THIRTEENTH_CLAUSE, compute_thirteenth};
pub use training_bonus::{TRAINING_BONUS_RATE, TrainingBonusResult, calculate_training_bonus};
pub use vacation::{
    COMMERCIAL_MONTH_DAYS, FGTS_CLAUSE, FGTS_RATE, VACATION_CLAUSE, compute_vacation,
};
pub use weekly_rest::{DSR_CLAUSE, DsrComponents, WeeklyRestResult, calculate_weekly_rest};
