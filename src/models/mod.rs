//! Core data models for the payroll engine.
//!
//! This module contains the input and result records for the monthly,
//! vacation and thirteenth-salary calculations, plus the audit records
//! attached to every result.

mod audit;
mod payroll_input;
mod payroll_result;
mod summary;
mod thirteenth;
mod vacation;

pub use audit::{AuditStep, AuditWarning};
pub use payroll_input::{
    Deduction, DsrBasePolicy, MAX_INPUT_VALUE, MAX_MONTHLY_DAYS, MAX_MONTHLY_HOURS, MAX_PERCENTAGE,
    PayrollInput,
};
pub use payroll_result::{PayrollResult, TaxAssessment};
pub use summary::{PayrollSummary, SummaryInput};
pub use thirteenth::{ThirteenthInput, ThirteenthResult};
pub use vacation::{PostVacationSalary, VacationInput, VacationResult};
