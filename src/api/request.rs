//! Request types for the payroll API.
//!
//! This module defines the JSON request structure for the `/calculate` and
//! `/export` endpoints. Form submissions in raw Brazilian notation use
//! [`crate::snapshot::FormSnapshot`] instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollDefaults;
use crate::models::{Deduction, DsrBasePolicy, PayrollInput, SummaryInput};

/// Request body for the `/calculate` and `/export` endpoints.
///
/// Amounts may be given as JSON numbers or decimal strings. Optional fields
/// fall back to the configured defaults; every other missing amount is zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly reference hours.
    #[serde(default)]
    pub workload_divisor: Option<Decimal>,
    /// Monthly salary.
    #[serde(default)]
    pub base_salary: Decimal,
    /// Daytime overtime hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Overtime premium in percent.
    #[serde(default)]
    pub overtime_percentage: Option<Decimal>,
    /// Normal night hours.
    #[serde(default)]
    pub night_shift_hours: Decimal,
    /// Night overtime hours.
    #[serde(default)]
    pub night_overtime_hours: Decimal,
    /// Night premium in percent.
    #[serde(default)]
    pub night_shift_percentage: Option<Decimal>,
    /// Training value.
    #[serde(default)]
    pub training_value: Decimal,
    /// Training duration in hours.
    #[serde(default)]
    pub training_duration: Decimal,
    /// Training hours delivered.
    #[serde(default)]
    pub training_hours_given: Decimal,
    /// Health-insurance deduction.
    #[serde(default)]
    pub health_insurance: Decimal,
    /// Ad-hoc deductions, in display order.
    #[serde(default)]
    pub deductions: Vec<Deduction>,
    /// Working days in the period.
    #[serde(default)]
    pub working_days: Decimal,
    /// Paid Sundays and holidays in the period.
    #[serde(default)]
    pub sundays_and_holidays: Decimal,
    /// Whether the training bonus joins the DSR base.
    #[serde(default)]
    pub dsr_policy: Option<DsrBasePolicy>,
    /// Vacation days to price.
    #[serde(default)]
    pub vacation_days: Option<Decimal>,
    /// Months worked for the thirteenth salary.
    #[serde(default)]
    pub months_worked: Option<Decimal>,
    /// Explicit variable-pay average for the vacation.
    #[serde(default)]
    pub variable_average: Option<Decimal>,
}

impl CalculationRequest {
    /// Resolves the request into engine input, filling omitted fields from
    /// `defaults`.
    pub fn into_summary_input(self, defaults: &PayrollDefaults) -> SummaryInput {
        SummaryInput {
            payroll: PayrollInput {
                workload_divisor: self.workload_divisor.unwrap_or(defaults.workload_divisor),
                base_salary: self.base_salary,
                overtime_hours: self.overtime_hours,
                overtime_percentage: self
                    .overtime_percentage
                    .unwrap_or(defaults.overtime_percentage),
                night_shift_hours: self.night_shift_hours,
                night_overtime_hours: self.night_overtime_hours,
                night_shift_percentage: self
                    .night_shift_percentage
                    .unwrap_or(defaults.night_shift_percentage),
                training_value: self.training_value,
                training_duration: self.training_duration,
                training_hours_given: self.training_hours_given,
                health_insurance: self.health_insurance,
                deductions: self.deductions,
                working_days: self.working_days,
                sundays_and_holidays: self.sundays_and_holidays,
                dsr_policy: self.dsr_policy.unwrap_or(defaults.dsr_policy),
            },
            vacation_days: self.vacation_days.unwrap_or(defaults.vacation_days),
            months_worked: self.months_worked.unwrap_or(defaults.months_worked),
            variable_average: self.variable_average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{ "base_salary": 3000, "overtime_hours": "10" }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.base_salary, dec("3000"));
        assert_eq!(request.overtime_hours, dec("10"));
        assert_eq!(request.workload_divisor, None);
        assert!(request.deductions.is_empty());
    }

    #[test]
    fn test_defaults_fill_omitted_fields() {
        let request = CalculationRequest {
            base_salary: dec("3000"),
            ..Default::default()
        };
        let input = request.into_summary_input(ConfigLoader::builtin().defaults());

        assert_eq!(input.payroll.workload_divisor, dec("220"));
        assert_eq!(input.payroll.overtime_percentage, dec("75"));
        assert_eq!(input.payroll.night_shift_percentage, dec("20"));
        assert_eq!(input.payroll.dsr_policy, DsrBasePolicy::IncludeBonus);
        assert_eq!(input.vacation_days, dec("30"));
        assert_eq!(input.months_worked, dec("12"));
        assert_eq!(input.variable_average, None);
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let json = r#"{
            "workload_divisor": 180,
            "overtime_percentage": 50,
            "dsr_policy": "exclude_bonus",
            "vacation_days": 15,
            "deductions": [{ "description": "Vale", "value": "45.50" }]
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let input = request.into_summary_input(ConfigLoader::builtin().defaults());

        assert_eq!(input.payroll.workload_divisor, dec("180"));
        assert_eq!(input.payroll.overtime_percentage, dec("50"));
        assert_eq!(input.payroll.dsr_policy, DsrBasePolicy::ExcludeBonus);
        assert_eq!(input.vacation_days, dec("15"));
        assert_eq!(input.payroll.deductions[0].value, dec("45.50"));
    }
}
