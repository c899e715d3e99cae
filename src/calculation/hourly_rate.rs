//! Hourly rate derivation.
//!
//! The hourly wage is the monthly salary divided by the monthly reference
//! hours of the contract (CLT art. 64).

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Legal reference for the hourly-rate divisor.
pub const HOURLY_RATE_CLAUSE: &str = "CLT art. 64";

/// The result of deriving the hourly rate, including the audit step.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// The hourly rate.
    pub rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the hourly rate from the base salary and workload divisor.
///
/// Returns zero when either the salary or the divisor is not positive.
///
/// # Examples
///
/// ```
/// use folha_engine::calculation::calculate_hourly_rate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hourly_rate(Decimal::from(2200), Decimal::from(220), 1);
/// assert_eq!(result.rate, Decimal::from(10));
/// ```
pub fn calculate_hourly_rate(
    base_salary: Decimal,
    workload_divisor: Decimal,
    step_number: u32,
) -> HourlyRateResult {
    let applies = base_salary > Decimal::ZERO && workload_divisor > Decimal::ZERO;
    let rate = if applies {
        base_salary / workload_divisor
    } else {
        Decimal::ZERO
    };

    let reasoning = if applies {
        format!(
            "{} / {} = {}",
            base_salary.normalize(),
            workload_divisor.normalize(),
            rate.normalize()
        )
    } else {
        "No base salary or divisor - hourly rate is 0".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        clause_ref: HOURLY_RATE_CLAUSE.to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "workload_divisor": workload_divisor.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": rate.normalize().to_string()
        }),
        reasoning,
    };

    HourlyRateResult { rate, audit_step }
}
