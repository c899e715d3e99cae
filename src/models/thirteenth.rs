//! Thirteenth-salary input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payroll_input::check_range;
use super::{AuditStep, TaxAssessment};
use crate::error::{EngineError, EngineResult};

/// Input to the thirteenth-salary calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthInput {
    /// Contractual monthly salary.
    pub base_salary: Decimal,
    /// Months worked in the year (0 to 12).
    pub months_worked: Decimal,
}

impl ThirteenthInput {
    /// Validates the record at the boundary.
    pub fn validate(&self) -> EngineResult<()> {
        check_range("base_salary", self.base_salary)?;
        if self.months_worked < Decimal::ZERO || self.months_worked > Decimal::from(12) {
            return Err(EngineError::InvalidInput {
                field: "months_worked".to_string(),
                message: "must be between 0 and 12".to_string(),
            });
        }
        Ok(())
    }
}

/// The result of a thirteenth-salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthResult {
    /// Months the bonus was prorated over.
    pub months_worked: Decimal,
    /// One-twelfth of the base salary per month worked.
    pub gross_annual_bonus: Decimal,
    /// Half the bonus, paid without deductions.
    pub first_installment: Decimal,
    /// INSS on the full bonus.
    pub contribution: TaxAssessment,
    /// IRRF on the full bonus less the contribution.
    pub withholding: TaxAssessment,
    /// Half the bonus less both taxes.
    pub second_installment: Decimal,
    /// Both installments together.
    pub total_net: Decimal,
    /// Rule-by-rule audit trail.
    pub audit_steps: Vec<AuditStep>,
}
