//! Daytime overtime calculation.
//!
//! Overtime hours are paid at the hourly rate plus the overtime premium
//! (CLT art. 59 §1º, at least 50%; 75% is the common default).

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Legal reference for the overtime premium.
pub const OVERTIME_CLAUSE: &str = "CLT art. 59 §1º";

/// The result of the overtime calculation.
#[derive(Debug, Clone)]
pub struct OvertimeResult {
    /// Hourly rate including the premium.
    pub rate: Decimal,
    /// Overtime hours times the overtime rate.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns `1 + percentage / 100`.
pub(crate) fn premium_multiplier(percentage: Decimal) -> Decimal {
    Decimal::ONE + percentage / Decimal::ONE_HUNDRED
}

/// Calculates daytime overtime pay.
///
/// # Arguments
///
/// * `overtime_hours` - Overtime hours worked during the day
/// * `hourly_rate` - The normal hourly rate
/// * `overtime_percentage` - The premium in percent (75 means +75%)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use folha_engine::calculation::calculate_overtime;
/// use rust_decimal::Decimal;
///
/// let result = calculate_overtime(Decimal::from(10), Decimal::from(10), Decimal::from(50), 1);
/// assert_eq!(result.rate, Decimal::from(15));
/// assert_eq!(result.value, Decimal::from(150));
/// ```
pub fn calculate_overtime(
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    overtime_percentage: Decimal,
    step_number: u32,
) -> OvertimeResult {
    let multiplier = premium_multiplier(overtime_percentage);
    let rate = hourly_rate * multiplier;
    let value = overtime_hours * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "daytime_overtime".to_string(),
        rule_name: "Daytime Overtime".to_string(),
        clause_ref: OVERTIME_CLAUSE.to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "overtime_percentage": overtime_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_rate": rate.normalize().to_string(),
            "overtime_value": value.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x ({} x {}) = {}",
            overtime_hours.normalize(),
            hourly_rate.normalize(),
            multiplier.normalize(),
            value.normalize()
        ),
    };

    OvertimeResult {
        rate,
        value,
        audit_step,
    }
}
