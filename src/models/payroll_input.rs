//! Monthly payroll input record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest value accepted for any numeric input at the boundary.
pub const MAX_INPUT_VALUE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest premium percentage accepted at the boundary.
pub const MAX_PERCENTAGE: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Largest hour count accepted at the boundary (31 days of 24 hours).
pub const MAX_MONTHLY_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// Largest day count accepted at the boundary.
pub const MAX_MONTHLY_DAYS: Decimal = Decimal::from_parts(31, 0, 0, false, 0);

/// Whether the training bonus participates in the weekly-rest (DSR) base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DsrBasePolicy {
    /// Overtime, night premiums and the training bonus form the DSR base.
    #[default]
    IncludeBonus,
    /// Only overtime and night premiums form the DSR base.
    ExcludeBonus,
}

/// An ad-hoc deduction entered by the user (e.g. meal voucher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,
    /// The amount deducted.
    pub value: Decimal,
}

/// Everything needed to compute a monthly payslip.
///
/// `Default` yields an all-zero record; form defaults such as the 220-hour
/// divisor come from [`crate::config::PayrollDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly reference hours (220, 200, 180 or 240).
    pub workload_divisor: Decimal,
    /// Contractual monthly salary.
    pub base_salary: Decimal,
    /// Daytime overtime hours worked.
    pub overtime_hours: Decimal,
    /// Overtime premium in percent (75 means +75%).
    pub overtime_percentage: Decimal,
    /// Normal hours worked at night.
    pub night_shift_hours: Decimal,
    /// Overtime hours worked at night.
    pub night_overtime_hours: Decimal,
    /// Night-shift premium in percent.
    pub night_shift_percentage: Decimal,
    /// Value of the training course used for the bonus.
    pub training_value: Decimal,
    /// Duration of the training course in hours.
    pub training_duration: Decimal,
    /// Training hours given by the employee.
    pub training_hours_given: Decimal,
    /// Health-insurance deduction.
    pub health_insurance: Decimal,
    /// Ad-hoc deductions in entry order.
    #[serde(default)]
    pub deductions: Vec<Deduction>,
    /// Working days in the period.
    pub working_days: Decimal,
    /// Paid Sundays and holidays in the period.
    pub sundays_and_holidays: Decimal,
    /// DSR base policy.
    #[serde(default)]
    pub dsr_policy: DsrBasePolicy,
}

impl PayrollInput {
    /// Sum of all ad-hoc deductions.
    pub fn other_deductions_total(&self) -> Decimal {
        self.deductions.iter().map(|d| d.value).sum()
    }

    /// Validates the record at the boundary.
    ///
    /// Amounts are capped at [`MAX_INPUT_VALUE`], percentages at
    /// [`MAX_PERCENTAGE`], hours at [`MAX_MONTHLY_HOURS`] and days at
    /// [`MAX_MONTHLY_DAYS`]. Fields used as divisors must be 0 or at least 1.
    /// Within these limits no rule overflows `Decimal`; the HTTP API rejects
    /// anything outside them before computing.
    pub fn validate(&self) -> EngineResult<()> {
        let amounts = [
            ("base_salary", self.base_salary),
            ("training_value", self.training_value),
            ("health_insurance", self.health_insurance),
        ];
        for (field, value) in amounts {
            check_range(field, value)?;
        }
        for deduction in &self.deductions {
            check_range("deductions.value", deduction.value)?;
        }

        let bounded = [
            ("overtime_percentage", self.overtime_percentage, MAX_PERCENTAGE),
            ("night_shift_percentage", self.night_shift_percentage, MAX_PERCENTAGE),
            ("workload_divisor", self.workload_divisor, MAX_MONTHLY_HOURS),
            ("overtime_hours", self.overtime_hours, MAX_MONTHLY_HOURS),
            ("night_shift_hours", self.night_shift_hours, MAX_MONTHLY_HOURS),
            ("night_overtime_hours", self.night_overtime_hours, MAX_MONTHLY_HOURS),
            ("training_duration", self.training_duration, MAX_MONTHLY_HOURS),
            ("training_hours_given", self.training_hours_given, MAX_MONTHLY_HOURS),
            ("working_days", self.working_days, MAX_MONTHLY_DAYS),
            ("sundays_and_holidays", self.sundays_and_holidays, MAX_MONTHLY_DAYS),
        ];
        for (field, value, max) in bounded {
            check_bounded(field, value, max)?;
        }

        let divisors = [
            ("workload_divisor", self.workload_divisor),
            ("training_duration", self.training_duration),
            ("working_days", self.working_days),
        ];
        for (field, value) in divisors {
            if value > Decimal::ZERO && value < Decimal::ONE {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "must be 0 or at least 1".to_string(),
                });
            }
        }

        if self.base_salary > Decimal::ZERO && self.workload_divisor.is_zero() {
            return Err(EngineError::InvalidInput {
                field: "workload_divisor".to_string(),
                message: "must be greater than zero when a base salary is given".to_string(),
            });
        }

        Ok(())
    }
}

/// Rejects negative values and values above [`MAX_INPUT_VALUE`].
pub(crate) fn check_range(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if value > MAX_INPUT_VALUE {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {}", MAX_INPUT_VALUE),
        });
    }
    Ok(())
}

/// Rejects negative values and values above `max`.
fn check_bounded(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if value > max {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {}", max),
        });
    }
    Ok(())
}
