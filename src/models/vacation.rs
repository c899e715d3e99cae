//! Vacation pay input and result records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payroll_input::check_range;
use super::{AuditStep, TaxAssessment};
use crate::error::{EngineError, EngineResult};

/// Input to the vacation calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationInput {
    /// Contractual monthly salary.
    pub base_salary: Decimal,
    /// Vacation days taken (1 to 30).
    pub vacation_days: Decimal,
    /// Monthly average of variable pay to carry into the vacation.
    pub variable_average: Decimal,
}

impl VacationInput {
    /// Validates the record at the boundary.
    pub fn validate(&self) -> EngineResult<()> {
        check_range("base_salary", self.base_salary)?;
        check_range("variable_average", self.variable_average)?;
        if self.vacation_days < Decimal::ONE || self.vacation_days > Decimal::from(30) {
            return Err(EngineError::InvalidInput {
                field: "vacation_days".to_string(),
                message: "must be between 1 and 30".to_string(),
            });
        }
        Ok(())
    }
}

/// Salary for the days of the month worked outside the vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostVacationSalary {
    /// Days of the 30-day month not on vacation.
    pub days_worked: Decimal,
    /// Daily rate times days worked.
    pub gross: Decimal,
    /// INSS on the residual salary.
    pub contribution: TaxAssessment,
    /// IRRF on the residual salary.
    pub withholding: TaxAssessment,
    /// Residual salary after both taxes.
    pub net: Decimal,
}

/// The result of a vacation calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationResult {
    /// Base salary divided by 30.
    pub daily_rate: Decimal,
    /// Vacation days the result was computed for.
    pub vacation_days: Decimal,
    /// Daily rate times vacation days.
    pub vacation_pay: Decimal,
    /// The constitutional one-third addition.
    pub one_third_bonus: Decimal,
    /// Variable-pay average prorated over the vacation days.
    pub variable_pay: Decimal,
    /// Vacation pay plus bonus plus variable pay.
    pub gross_vacation: Decimal,
    /// Employer FGTS deposit (informational, not deducted).
    pub fgts_deposit: Decimal,
    /// INSS on the gross vacation.
    pub contribution: TaxAssessment,
    /// IRRF on the gross vacation less the contribution.
    pub withholding: TaxAssessment,
    /// Gross vacation after both taxes.
    pub net_vacation: Decimal,
    /// The salary for the rest of the month.
    pub post_vacation: PostVacationSalary,
    /// Rule-by-rule audit trail.
    pub audit_steps: Vec<AuditStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vacation_days_range() {
        let mut input = VacationInput {
            base_salary: Decimal::from(3000),
            vacation_days: Decimal::from(30),
            variable_average: Decimal::ZERO,
        };
        assert!(input.validate().is_ok());

        input.vacation_days = Decimal::ONE;
        assert!(input.validate().is_ok());

        input.vacation_days = Decimal::ZERO;
        assert!(input.validate().is_err());

        input.vacation_days = Decimal::from(31);
        match input.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "vacation_days"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_average() {
        let input = VacationInput {
            base_salary: Decimal::from(3000),
            vacation_days: Decimal::from(10),
            variable_average: Decimal::from(-1),
        };
        assert!(input.validate().is_err());
    }
}
