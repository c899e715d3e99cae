//! Configuration types for the payroll calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DsrBasePolicy;

/// Metadata about the calculator build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorMetadata {
    /// Human-readable name.
    pub name: String,
    /// Jurisdiction the tax tables apply to (e.g. "BR").
    pub jurisdiction: String,
    /// Fiscal year of the INSS and IRRF tables.
    pub fiscal_year: u16,
    /// Version of this configuration.
    pub version: String,
}

/// A selectable monthly workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadOption {
    /// Monthly reference hours used as the hourly-rate divisor.
    pub divisor: Decimal,
    /// Display label shown in the form and report.
    pub label: String,
}

/// Form defaults applied when a field is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDefaults {
    /// Workload options, in display order.
    pub workload_options: Vec<WorkloadOption>,
    /// Divisor selected when none is given.
    pub workload_divisor: Decimal,
    /// Daytime overtime premium in percent.
    pub overtime_percentage: Decimal,
    /// Night premium in percent.
    pub night_shift_percentage: Decimal,
    /// Vacation days priced by default.
    pub vacation_days: Decimal,
    /// Months worked for the thirteenth salary.
    pub months_worked: Decimal,
    /// Whether the training bonus joins the DSR base.
    #[serde(default)]
    pub dsr_policy: DsrBasePolicy,
    /// Key the form snapshot is stored under.
    pub storage_key: String,
}

impl PayrollDefaults {
    /// Returns the display label for a divisor, or `"<divisor> horas"` when
    /// the divisor is not one of the configured options.
    pub fn workload_label(&self, divisor: Decimal) -> String {
        self.workload_options
            .iter()
            .find(|option| option.divisor == divisor)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| format!("{} horas", divisor.normalize()))
    }
}

/// The complete calculator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Calculator metadata.
    pub metadata: CalculatorMetadata,
    /// Form defaults.
    pub defaults: PayrollDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> PayrollDefaults {
        PayrollDefaults {
            workload_options: vec![
                WorkloadOption {
                    divisor: Decimal::from(220),
                    label: "220 horas (44h semanais)".to_string(),
                },
                WorkloadOption {
                    divisor: Decimal::from(180),
                    label: "180 horas (36h semanais)".to_string(),
                },
            ],
            workload_divisor: Decimal::from(220),
            overtime_percentage: Decimal::from(75),
            night_shift_percentage: Decimal::from(20),
            vacation_days: Decimal::from(30),
            months_worked: Decimal::from(12),
            dsr_policy: DsrBasePolicy::IncludeBonus,
            storage_key: "folha-calculadora".to_string(),
        }
    }

    #[test]
    fn test_workload_label_for_known_divisor() {
        assert_eq!(
            defaults().workload_label(Decimal::from(180)),
            "180 horas (36h semanais)"
        );
    }

    #[test]
    fn test_workload_label_for_unknown_divisor() {
        assert_eq!(defaults().workload_label(Decimal::from(150)), "150 horas");
    }

    #[test]
    fn test_defaults_deserialize_from_yaml() {
        let yaml = r#"
workload_options:
  - divisor: 220
    label: "220 horas"
workload_divisor: 220
overtime_percentage: 75
night_shift_percentage: 20
vacation_days: 30
months_worked: 12
storage_key: "folha"
"#;
        let parsed: PayrollDefaults = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.workload_options.len(), 1);
        assert_eq!(parsed.overtime_percentage, Decimal::from(75));
        assert_eq!(parsed.dsr_policy, DsrBasePolicy::IncludeBonus);
    }
}
