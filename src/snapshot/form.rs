//! Raw form contents as typed by the user.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollDefaults;
use crate::format::parse_input;
use crate::models::{Deduction, DsrBasePolicy, PayrollInput, SummaryInput};

/// One ad-hoc deduction row as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRow {
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Amount in Brazilian notation (e.g. "1.234,56").
    #[serde(default)]
    pub value: String,
}

/// Every form field as raw text, in Brazilian numeric notation.
///
/// Missing fields deserialize as empty text, which the normalizer reads as
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSnapshot {
    /// Selected workload divisor.
    pub workload: String,
    /// Monthly salary.
    pub base_salary: String,
    /// Daytime overtime hours.
    pub overtime_hours: String,
    /// Overtime premium in percent.
    pub overtime_percentage: String,
    /// Normal night hours.
    pub night_shift_hours: String,
    /// Night overtime hours.
    pub night_overtime_hours: String,
    /// Night premium in percent.
    pub night_shift_percentage: String,
    /// Training value.
    pub training_value: String,
    /// Training duration in hours.
    pub training_duration: String,
    /// Training hours delivered.
    pub training_hours_given: String,
    /// Health-insurance deduction.
    pub health_insurance: String,
    /// Working days in the period.
    pub working_days: String,
    /// Paid Sundays and holidays.
    pub sundays_and_holidays: String,
    /// Vacation days.
    pub vacation_days: String,
    /// Months worked in the year.
    pub months_worked: String,
    /// Empty means "use the monthly variable pay".
    pub variable_average: String,
    /// Ad-hoc deduction rows.
    pub deductions: Vec<DeductionRow>,
    /// Whether the bonus joins the DSR base.
    pub dsr_policy: DsrBasePolicy,
}

fn text(value: Decimal) -> String {
    value.normalize().to_string().replace('.', ",")
}

fn parse_or_default(raw: &str, default: Decimal) -> Decimal {
    if raw.trim().is_empty() {
        default
    } else {
        parse_input(raw)
    }
}

impl FormSnapshot {
    /// The form after "clear fields": every text empty except the workload
    /// and the default premiums, vacation days and months worked.
    pub fn cleared(defaults: &PayrollDefaults) -> Self {
        Self {
            workload: text(defaults.workload_divisor),
            overtime_percentage: text(defaults.overtime_percentage),
            night_shift_percentage: text(defaults.night_shift_percentage),
            vacation_days: text(defaults.vacation_days),
            months_worked: text(defaults.months_worked),
            dsr_policy: defaults.dsr_policy,
            ..Default::default()
        }
    }

    /// Converts the raw text into engine input through the normalizer.
    ///
    /// Blank vacation days and months worked take the configured defaults;
    /// every other blank or malformed field reads as zero.
    pub fn to_summary_input(&self, defaults: &PayrollDefaults) -> SummaryInput {
        let payroll = PayrollInput {
            workload_divisor: parse_input(&self.workload),
            base_salary: parse_input(&self.base_salary),
            overtime_hours: parse_input(&self.overtime_hours),
            overtime_percentage: parse_input(&self.overtime_percentage),
            night_shift_hours: parse_input(&self.night_shift_hours),
            night_overtime_hours: parse_input(&self.night_overtime_hours),
            night_shift_percentage: parse_input(&self.night_shift_percentage),
            training_value: parse_input(&self.training_value),
            training_duration: parse_input(&self.training_duration),
            training_hours_given: parse_input(&self.training_hours_given),
            health_insurance: parse_input(&self.health_insurance),
            deductions: self
                .deductions
                .iter()
                .map(|row| Deduction {
                    description: row.description.clone(),
                    value: parse_input(&row.value),
                })
                .collect(),
            working_days: parse_input(&self.working_days),
            sundays_and_holidays: parse_input(&self.sundays_and_holidays),
            dsr_policy: self.dsr_policy,
        };

        let variable_average = if self.variable_average.trim().is_empty() {
            None
        } else {
            Some(parse_input(&self.variable_average))
        };

        SummaryInput {
            payroll,
            vacation_days: parse_or_default(&self.vacation_days, defaults.vacation_days),
            months_worked: parse_or_default(&self.months_worked, defaults.months_worked),
            variable_average,
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
    fn test_cleared_uses_defaults() {
        let snapshot = FormSnapshot::cleared(ConfigLoader::builtin().defaults());

        assert_eq!(snapshot.workload, "220");
        assert_eq!(snapshot.overtime_percentage, "75");
        assert_eq!(snapshot.night_shift_percentage, "20");
        assert_eq!(snapshot.vacation_days, "30");
        assert_eq!(snapshot.months_worked, "12");
        assert_eq!(snapshot.base_salary, "");
        assert!(snapshot.deductions.is_empty());
    }

    #[test]
    fn test_to_summary_input_parses_brazilian_text() {
        let snapshot = FormSnapshot {
            base_salary: "3.000,00".to_string(),
            overtime_hours: "7,5".to_string(),
            health_insurance: "abc".to_string(),
            deductions: vec![DeductionRow {
                description: "Vale Transporte".to_string(),
                value: "180,00".to_string(),
            }],
            ..FormSnapshot::cleared(ConfigLoader::builtin().defaults())
        };
        let input = snapshot.to_summary_input(ConfigLoader::builtin().defaults());

        assert_eq!(input.payroll.workload_divisor, dec("220"));
        assert_eq!(input.payroll.base_salary, dec("3000"));
        assert_eq!(input.payroll.overtime_hours, dec("7.5"));
        assert_eq!(input.payroll.overtime_percentage, dec("75"));
        assert_eq!(input.payroll.health_insurance, Decimal::ZERO);
        assert_eq!(input.payroll.deductions[0].value, dec("180"));
        assert_eq!(input.vacation_days, dec("30"));
        assert_eq!(input.variable_average, None);
    }

    #[test]
    fn test_variable_average_text_is_explicit() {
        let snapshot = FormSnapshot {
            variable_average: "0".to_string(),
            ..Default::default()
        };
        let input = snapshot.to_summary_input(ConfigLoader::builtin().defaults());
        assert_eq!(input.variable_average, Some(Decimal::ZERO));
    }

    #[test]
    fn test_blank_vacation_and_months_take_defaults() {
        let snapshot = FormSnapshot {
            base_salary: "3.000,00".to_string(),
            vacation_days: " ".to_string(),
            months_worked: String::new(),
            ..Default::default()
        };
        let input = snapshot.to_summary_input(ConfigLoader::builtin().defaults());

        assert_eq!(input.vacation_days, dec("30"));
        assert_eq!(input.months_worked, dec("12"));
    }

    #[test]
    fn test_malformed_vacation_days_read_as_zero() {
        let snapshot = FormSnapshot {
            vacation_days: "trinta".to_string(),
            ..Default::default()
        };
        let input = snapshot.to_summary_input(ConfigLoader::builtin().defaults());

        assert_eq!(input.vacation_days, Decimal::ZERO);
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let snapshot: FormSnapshot =
            serde_json::from_str(r#"{"base_salary": "2.500,00"}"#).unwrap();

        assert_eq!(snapshot.base_salary, "2.500,00");
        assert_eq!(snapshot.workload, "");
        let input = snapshot.to_summary_input(ConfigLoader::builtin().defaults());
        assert_eq!(input.payroll.workload_divisor, Decimal::ZERO);
    }
}
