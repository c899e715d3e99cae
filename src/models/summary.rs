//! Input and output of one full recomputation pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    AuditWarning, PayrollInput, PayrollResult, ThirteenthInput, ThirteenthResult, VacationInput,
    VacationResult,
};
use crate::error::EngineResult;

/// Everything a form submits for one recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryInput {
    /// The monthly payroll fields.
    pub payroll: PayrollInput,
    /// Vacation days to price.
    pub vacation_days: Decimal,
    /// Months worked for the thirteenth salary.
    pub months_worked: Decimal,
    /// Explicit variable-pay average for the vacation. When absent the
    /// monthly result's variable pay is used.
    #[serde(default)]
    pub variable_average: Option<Decimal>,
}

impl SummaryInput {
    /// Validates every part of the record.
    pub fn validate(&self) -> EngineResult<()> {
        self.payroll.validate()?;
        self.vacation_input(Decimal::ZERO).validate()?;
        self.thirteenth_input().validate()
    }

    /// Builds the vacation input, falling back to `monthly_variable_pay`
    /// when no explicit average was entered.
    pub fn vacation_input(&self, monthly_variable_pay: Decimal) -> VacationInput {
        VacationInput {
            base_salary: self.payroll.base_salary,
            vacation_days: self.vacation_days,
            variable_average: self.variable_average.unwrap_or(monthly_variable_pay),
        }
    }

    /// Builds the thirteenth-salary input.
    pub fn thirteenth_input(&self) -> ThirteenthInput {
        ThirteenthInput {
            base_salary: self.payroll.base_salary,
            months_worked: self.months_worked,
        }
    }
}

/// Monthly, vacation and thirteenth-salary results for one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Monthly payslip.
    pub monthly: PayrollResult,
    /// Vacation pay.
    pub vacation: VacationResult,
    /// Thirteenth-salary installments.
    pub thirteenth: ThirteenthResult,
    /// Implausible results worth showing to the user.
    pub warnings: Vec<AuditWarning>,
}
