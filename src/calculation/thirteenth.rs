//! Thirteenth salary (gratificação natalina).
//!
//! One-twelfth of the salary per month worked (Lei 4.090/1962), paid in two
//! installments (Lei 4.749/1965 art. 2º). The first half is advanced without
//! deductions; both taxes are computed on the full bonus and withheld from
//! the second half.

use rust_decimal::Decimal;
use tracing::debug;

use super::brackets::assess_payroll_taxes;
use crate::models::{AuditStep, ThirteenthInput, ThirteenthResult};

/// Legal reference for the thirteenth salary and its installments.
pub const THIRTEENTH_CLAUSE: &str = "Lei 4.090/1962; Lei 4.749/1965 art. 2º";

/// Computes both installments of the thirteenth salary.
///
/// # Examples
///
/// ```
/// use folha_engine::calculation::compute_thirteenth;
/// use folha_engine::models::ThirteenthInput;
/// use rust_decimal::Decimal;
///
/// let result = compute_thirteenth(&ThirteenthInput {
///     base_salary: Decimal::from(2400),
///     months_worked: Decimal::from(6),
/// });
/// assert_eq!(result.gross_annual_bonus, Decimal::from(1200));
/// assert_eq!(result.first_installment, Decimal::from(600));
/// ```
pub fn compute_thirteenth(input: &ThirteenthInput) -> ThirteenthResult {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let step_number: u32 = 1;

    let twelve = Decimal::from(12);
    let two = Decimal::TWO;

    let gross_annual_bonus = input.base_salary / twelve * input.months_worked;
    let half = gross_annual_bonus / two;
    let first_installment = half;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "thirteenth_salary".to_string(),
        rule_name: "Thirteenth Salary".to_string(),
        clause_ref: THIRTEENTH_CLAUSE.to_string(),
        input: serde_json::json!({
            "base_salary": input.base_salary.normalize().to_string(),
            "months_worked": input.months_worked.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_annual_bonus": gross_annual_bonus.normalize().to_string(),
            "first_installment": first_installment.normalize().to_string()
        }),
        reasoning: format!(
            "({} / 12) x {} = {}; first installment {} paid without deductions",
            input.base_salary.normalize(),
            input.months_worked.normalize(),
            gross_annual_bonus.normalize(),
            first_installment.normalize()
        ),
    });

    let taxes = assess_payroll_taxes(gross_annual_bonus, step_number + 1);
    let second_installment = half - taxes.total();
    let total_net = first_installment + second_installment;
    audit_steps.extend(taxes.audit_steps);

    debug!(
        gross_annual_bonus = %gross_annual_bonus,
        total_net = %total_net,
        "Thirteenth salary computed"
    );

    ThirteenthResult {
        months_worked: input.months_worked,
        gross_annual_bonus,
        first_installment,
        contribution: taxes.contribution,
        withholding: taxes.withholding,
        second_installment,
        total_net,
        audit_steps,
    }
}
