//! Full recomputation pass.
//!
//! The monthly payslip runs first, since its variable pay feeds the vacation
//! when no explicit average is entered. Negative net amounts are flagged as
//! warnings rather than errors.

use rust_decimal::Decimal;

use super::monthly::compute_monthly;
use super::thirteenth::compute_thirteenth;
use super::vacation::compute_vacation;
use crate::models::{AuditWarning, PayrollSummary, SummaryInput};

/// Warning code for a net amount below zero.
pub const NEGATIVE_NET_PAY: &str = "NEGATIVE_NET_PAY";

/// Computes monthly, vacation and thirteenth-salary results for one input.
pub fn compute_summary(input: &SummaryInput) -> PayrollSummary {
    let monthly = compute_monthly(&input.payroll);
    let vacation = compute_vacation(&input.vacation_input(monthly.variable_pay));
    let thirteenth = compute_thirteenth(&input.thirteenth_input());

    let mut warnings = Vec::new();
    let nets = [
        ("monthly net salary", monthly.net_salary),
        ("vacation net", vacation.net_vacation),
        ("post-vacation net salary", vacation.post_vacation.net),
    ];
    for (what, amount) in nets {
        if amount < Decimal::ZERO {
            warnings.push(AuditWarning {
                code: NEGATIVE_NET_PAY.to_string(),
                message: format!(
                    "The {} is negative ({}): deductions exceed earnings",
                    what,
                    amount.round_dp(2)
                ),
                severity: "warning".to_string(),
            });
        }
    }

    PayrollSummary {
        monthly,
        vacation,
        thirteenth,
        warnings,
    }
}
