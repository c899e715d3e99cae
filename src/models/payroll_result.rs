//! Monthly payroll result record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditStep;

/// The outcome of running a tax base through one bracket table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// The base the table was evaluated on.
    pub base: Decimal,
    /// The tax amount (never rounded).
    pub amount: Decimal,
    /// The label of the bracket that applied (e.g. "Faixa 2: 9%").
    pub bracket: String,
}

impl TaxAssessment {
    /// An assessment of zero on a zero base, used for untaxed amounts.
    pub fn zero(bracket: impl Into<String>) -> Self {
        Self {
            base: Decimal::ZERO,
            amount: Decimal::ZERO,
            bracket: bracket.into(),
        }
    }
}

/// The complete result of a monthly payroll calculation.
///
/// Produced fresh by [`crate::calculation::compute_monthly`]; consumers
/// (report, export, vacation) receive it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Base salary divided by the workload divisor.
    pub hourly_rate: Decimal,
    /// Hourly rate including the overtime premium.
    pub overtime_rate: Decimal,
    /// Daytime overtime pay.
    pub overtime_value: Decimal,
    /// Night-shift premium on normal night hours.
    pub night_shift_value: Decimal,
    /// Hourly rate including the night premium.
    pub night_hour_rate: Decimal,
    /// Night hourly rate including the overtime premium.
    pub night_overtime_rate: Decimal,
    /// Night overtime pay.
    pub night_overtime_value: Decimal,
    /// Training bonus.
    pub bonus_value: Decimal,
    /// Variable pay the DSR is computed on.
    pub dsr_base: Decimal,
    /// Weekly-rest compensation.
    pub dsr_value: Decimal,
    /// All earnings other than the base salary.
    pub variable_pay: Decimal,
    /// Total earnings.
    pub gross_salary: Decimal,
    /// INSS contribution on the gross salary.
    pub contribution: TaxAssessment,
    /// IRRF withholding on the gross salary less the contribution.
    pub withholding: TaxAssessment,
    /// Health-insurance deduction.
    pub health_insurance: Decimal,
    /// Sum of the ad-hoc deductions.
    pub other_deductions: Decimal,
    /// Taxes plus every other deduction.
    pub total_deductions: Decimal,
    /// Gross salary less total deductions. May be negative.
    pub net_salary: Decimal,
    /// Rule-by-rule audit trail.
    pub audit_steps: Vec<AuditStep>,
}

impl PayrollResult {
    /// Returns true when deductions exceed earnings.
    pub fn has_negative_net(&self) -> bool {
        self.net_salary < Decimal::ZERO
    }
}
