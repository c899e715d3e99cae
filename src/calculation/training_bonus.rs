//! Training bonus.
//!
//! Instructors receive 10% of the per-hour value of a training for every
//! hour they delivered. All three inputs must be positive for the bonus to
//! apply.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Share of the per-hour training value paid to the instructor.
pub const TRAINING_BONUS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// The result of the training bonus calculation.
#[derive(Debug, Clone)]
pub struct TrainingBonusResult {
    /// The bonus owed.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the training bonus.
///
/// `bonus = (training_value / training_duration) x 10% x hours_given`
///
/// # Examples
///
/// ```
/// use folha_engine::calculation::calculate_training_bonus;
/// use rust_decimal::Decimal;
///
/// let result =
///     calculate_training_bonus(Decimal::from(1000), Decimal::from(10), Decimal::from(5), 1);
/// assert_eq!(result.value, Decimal::from(50));
/// ```
pub fn calculate_training_bonus(
    training_value: Decimal,
    training_duration: Decimal,
    training_hours_given: Decimal,
    step_number: u32,
) -> TrainingBonusResult {
    let applies = training_value > Decimal::ZERO
        && training_duration > Decimal::ZERO
        && training_hours_given > Decimal::ZERO;

    let (value, reasoning) = if applies {
        let per_hour = training_value / training_duration;
        let value = per_hour * TRAINING_BONUS_RATE * training_hours_given;
        let reasoning = format!(
            "({} / {}) x {} x {}h = {}",
            training_value.normalize(),
            training_duration.normalize(),
            TRAINING_BONUS_RATE.normalize(),
            training_hours_given.normalize(),
            value.normalize()
        );
        (value, reasoning)
    } else {
        (
            Decimal::ZERO,
            "Training value, duration and hours given must all be positive - no bonus"
                .to_string(),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "training_bonus".to_string(),
        rule_name: "Training Bonus".to_string(),
        clause_ref: "Internal training policy".to_string(),
        input: serde_json::json!({
            "training_value": training_value.normalize().to_string(),
            "training_duration": training_duration.normalize().to_string(),
            "training_hours_given": training_hours_given.normalize().to_string()
        }),
        output: serde_json::json!({
            "bonus_value": value.normalize().to_string()
        }),
        reasoning,
    };

    TrainingBonusResult { value, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_is_ten_percent() {
        assert_eq!(TRAINING_BONUS_RATE, dec("0.10"));
    }

    #[test]
    fn test_bonus_formula() {
        let result = calculate_training_bonus(dec("800"), dec("16"), dec("8"), 5);

        // 800 / 16 = 50 per hour, 10% = 5, x 8h = 40
        assert_eq!(result.value, dec("40"));
        assert_eq!(result.audit_step.step_number, 5);
        assert!(result.audit_step.reasoning.ends_with("= 40"));
    }

    #[test]
    fn test_each_missing_input_disables_bonus() {
        let cases = [
            (Decimal::ZERO, dec("16"), dec("8")),
            (dec("800"), Decimal::ZERO, dec("8")),
            (dec("800"), dec("16"), Decimal::ZERO),
        ];

        for (value, duration, given) in cases {
            let result = calculate_training_bonus(value, duration, given, 1);
            assert_eq!(result.value, Decimal::ZERO);
            assert!(result.audit_step.reasoning.contains("no bonus"));
        }
    }
}
