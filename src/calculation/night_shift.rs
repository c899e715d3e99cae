//! Night shift premium and night overtime.
//!
//! Hours worked between 22:00 and 05:00 earn the night premium (CLT art. 73,
//! at least 20%). Normal night hours are paid the premium only, since the
//! hours themselves are already inside the monthly salary. Overtime worked at
//! night stacks both premiums: the overtime premium applies on top of the
//! night hourly rate.

use rust_decimal::Decimal;

use super::overtime::premium_multiplier;
use crate::models::AuditStep;

/// Legal reference for the night premium.
pub const NIGHT_SHIFT_CLAUSE: &str = "CLT art. 73";

/// The result of the night premium on normal night hours.
#[derive(Debug, Clone)]
pub struct NightShiftResult {
    /// Premium owed for the night hours.
    pub value: Decimal,
    /// Hourly rate including the night premium.
    pub night_hour_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the night overtime calculation.
#[derive(Debug, Clone)]
pub struct NightOvertimeResult {
    /// Night hourly rate including the overtime premium.
    pub rate: Decimal,
    /// Night overtime hours times the night overtime rate.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the night premium owed on normal night hours.
///
/// `value = hours x hourly_rate x percentage / 100`
pub fn calculate_night_shift(
    night_shift_hours: Decimal,
    hourly_rate: Decimal,
    night_shift_percentage: Decimal,
    step_number: u32,
) -> NightShiftResult {
    let premium = night_shift_percentage / Decimal::ONE_HUNDRED;
    let value = night_shift_hours * hourly_rate * premium;
    let night_hour_rate = hourly_rate * premium_multiplier(night_shift_percentage);

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_shift_premium".to_string(),
        rule_name: "Night Shift Premium".to_string(),
        clause_ref: NIGHT_SHIFT_CLAUSE.to_string(),
        input: serde_json::json!({
            "night_shift_hours": night_shift_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "night_shift_percentage": night_shift_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "night_shift_value": value.normalize().to_string(),
            "night_hour_rate": night_hour_rate.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x {} x {} = {}",
            night_shift_hours.normalize(),
            hourly_rate.normalize(),
            premium.normalize(),
            value.normalize()
        ),
    };

    NightShiftResult {
        value,
        night_hour_rate,
        audit_step,
    }
}

/// Calculates overtime worked during night hours.
///
/// The overtime premium is applied to the night hourly rate, so both
/// premiums compound.
pub fn calculate_night_overtime(
    night_overtime_hours: Decimal,
    night_hour_rate: Decimal,
    overtime_percentage: Decimal,
    step_number: u32,
) -> NightOvertimeResult {
    let multiplier = premium_multiplier(overtime_percentage);
    let rate = night_hour_rate * multiplier;
    let value = night_overtime_hours * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_overtime".to_string(),
        rule_name: "Night Overtime".to_string(),
        clause_ref: format!("{NIGHT_SHIFT_CLAUSE}; CLT art. 59 §1º"),
        input: serde_json::json!({
            "night_overtime_hours": night_overtime_hours.normalize().to_string(),
            "night_hour_rate": night_hour_rate.normalize().to_string(),
            "overtime_percentage": overtime_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "night_overtime_rate": rate.normalize().to_string(),
            "night_overtime_value": value.normalize().to_string()
        }),
        reasoning: format!(
            "{}h x ({} x {}) = {}",
            night_overtime_hours.normalize(),
            night_hour_rate.normalize(),
            multiplier.normalize(),
            value.normalize()
        ),
    };

    NightOvertimeResult {
        rate,
        value,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_night_shift_pays_premium_only() {
        let result = calculate_night_shift(dec("10"), dec("10"), dec("20"), 3);

        assert_eq!(result.value, dec("20"));
        assert_eq!(result.night_hour_rate, dec("12"));
        assert_eq!(result.audit_step.clause_ref, "CLT art. 73");
        assert_eq!(result.audit_step.reasoning, "10h x 10 x 0.2 = 20");
    }

    #[test]
    fn test_night_hour_rate_without_hours() {
        let result = calculate_night_shift(Decimal::ZERO, dec("15"), dec("20"), 3);
        assert_eq!(result.value, Decimal::ZERO);
        assert_eq!(result.night_hour_rate, dec("18"));
    }

    #[test]
    fn test_night_overtime_compounds_premiums() {
        // 10 x 1.2 = 12 night rate, x 1.75 = 21
        let result = calculate_night_overtime(dec("4"), dec("12"), dec("75"), 4);

        assert_eq!(result.rate, dec("21"));
        assert_eq!(result.value, dec("84"));
        assert_eq!(result.audit_step.rule_id, "night_overtime");
    }

    #[test]
    fn test_zero_percent_premium() {
        let result = calculate_night_shift(dec("8"), dec("10"), Decimal::ZERO, 1);
        assert_eq!(result.value, Decimal::ZERO);
        assert_eq!(result.night_hour_rate, dec("10"));
    }
}
