//! Paid weekly rest (DSR) on variable pay.
//!
//! Variable earnings reflect on the paid Sundays and holidays of the period
//! (Lei 605/1949 art. 7º): the variable pay per working day is repeated for
//! every rest day.

use rust_decimal::Decimal;

use crate::models::{AuditStep, DsrBasePolicy};

/// Legal reference for the weekly rest reflection.
pub const DSR_CLAUSE: &str = "Lei 605/1949 art. 7º";

/// Variable earnings that may take part in the DSR base.
#[derive(Debug, Clone, Copy, Default)]
pub struct DsrComponents {
    /// Daytime overtime pay.
    pub overtime_value: Decimal,
    /// Night premium on normal night hours.
    pub night_shift_value: Decimal,
    /// Night overtime pay.
    pub night_overtime_value: Decimal,
    /// Training bonus.
    pub bonus_value: Decimal,
}

impl DsrComponents {
    /// Sums the components the policy admits into the base.
    pub fn base(&self, policy: DsrBasePolicy) -> Decimal {
        let hourly = self.overtime_value + self.night_shift_value + self.night_overtime_value;
        match policy {
            DsrBasePolicy::IncludeBonus => hourly + self.bonus_value,
            DsrBasePolicy::ExcludeBonus => hourly,
        }
    }
}

/// The result of the DSR calculation.
#[derive(Debug, Clone)]
pub struct WeeklyRestResult {
    /// The variable pay the DSR was computed on.
    pub base: Decimal,
    /// DSR owed.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the DSR reflection of variable pay.
///
/// Returns zero when there are no working days in the period.
pub fn calculate_weekly_rest(
    components: DsrComponents,
    policy: DsrBasePolicy,
    working_days: Decimal,
    sundays_and_holidays: Decimal,
    step_number: u32,
) -> WeeklyRestResult {
    let base = components.base(policy);

    let (value, reasoning) = if working_days > Decimal::ZERO {
        let value = base / working_days * sundays_and_holidays;
        let reasoning = format!(
            "({} / {}) x {} = {}",
            base.normalize(),
            working_days.normalize(),
            sundays_and_holidays.normalize(),
            value.normalize()
        );
        (value, reasoning)
    } else {
        (
            Decimal::ZERO,
            "No working days in period - DSR is 0".to_string(),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_rest".to_string(),
        rule_name: "Weekly Rest on Variable Pay".to_string(),
        clause_ref: DSR_CLAUSE.to_string(),
        input: serde_json::json!({
            "overtime_value": components.overtime_value.normalize().to_string(),
            "night_shift_value": components.night_shift_value.normalize().to_string(),
            "night_overtime_value": components.night_overtime_value.normalize().to_string(),
            "bonus_value": components.bonus_value.normalize().to_string(),
            "policy": policy,
            "working_days": working_days.normalize().to_string(),
            "sundays_and_holidays": sundays_and_holidays.normalize().to_string()
        }),
        output: serde_json::json!({
            "dsr_base": base.normalize().to_string(),
            "dsr_value": value.normalize().to_string()
        }),
        reasoning,
    };

    WeeklyRestResult {
        base,
        value,
        audit_step,
    }
}
