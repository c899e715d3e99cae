//! Vacation pay.
//!
//! Vacation days are paid at the daily rate (salary / 30) plus the
//! constitutional one-third addition (CF art. 7º XVII) and the prorated
//! variable-pay average. The rest of the 30-day month is paid as a
//! residual salary and taxed independently of the vacation.

use rust_decimal::Decimal;
use tracing::debug;

use super::brackets::assess_payroll_taxes;
use crate::models::{AuditStep, PostVacationSalary, VacationInput, VacationResult};

/// Legal reference for vacation pay and its one-third addition.
pub const VACATION_CLAUSE: &str = "CLT art. 142; CF art. 7º XVII";

/// Legal reference for the employer FGTS deposit.
pub const FGTS_CLAUSE: &str = "Lei 8.036/1990 art. 15";

/// Employer FGTS deposit rate.
pub const FGTS_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Days in the commercial month used for daily rates.
pub const COMMERCIAL_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Computes vacation pay and the residual salary for the rest of the month.
///
/// `vacation_days` is expected in 1..=30; see [`VacationInput::validate`].
pub fn compute_vacation(input: &VacationInput) -> VacationResult {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let daily_rate = input.base_salary / COMMERCIAL_MONTH_DAYS;
    let vacation_pay = daily_rate * input.vacation_days;
    let one_third_bonus = vacation_pay / Decimal::from(3);
    let variable_pay = input.variable_average / COMMERCIAL_MONTH_DAYS * input.vacation_days;
    let gross_vacation = vacation_pay + one_third_bonus + variable_pay;

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Vacation Pay".to_string(),
        clause_ref: VACATION_CLAUSE.to_string(),
        input: serde_json::json!({
            "base_salary": input.base_salary.normalize().to_string(),
            "vacation_days": input.vacation_days.normalize().to_string(),
            "variable_average": input.variable_average.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "vacation_pay": vacation_pay.normalize().to_string(),
            "one_third_bonus": one_third_bonus.normalize().to_string(),
            "variable_pay": variable_pay.normalize().to_string(),
            "gross_vacation": gross_vacation.normalize().to_string()
        }),
        reasoning: format!(
            "{} + 1/3 {} + variable {} = {}",
            vacation_pay.normalize(),
            one_third_bonus.normalize(),
            variable_pay.normalize(),
            gross_vacation.normalize()
        ),
    });
    step_number += 1;

    let fgts_deposit = gross_vacation * FGTS_RATE;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "fgts_deposit".to_string(),
        rule_name: "FGTS Deposit".to_string(),
        clause_ref: FGTS_CLAUSE.to_string(),
        input: serde_json::json!({
            "gross_vacation": gross_vacation.normalize().to_string()
        }),
        output: serde_json::json!({
            "fgts_deposit": fgts_deposit.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {} (employer deposit, not deducted)",
            gross_vacation.normalize(),
            FGTS_RATE.normalize(),
            fgts_deposit.normalize()
        ),
    });
    step_number += 1;

    let vacation_taxes = assess_payroll_taxes(gross_vacation, step_number);
    step_number += vacation_taxes.audit_steps.len() as u32;
    let net_vacation = gross_vacation - vacation_taxes.total();
    audit_steps.extend(vacation_taxes.audit_steps);

    let days_worked = COMMERCIAL_MONTH_DAYS - input.vacation_days;
    let post_gross = daily_rate * days_worked;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "post_vacation_salary".to_string(),
        rule_name: "Post-Vacation Salary".to_string(),
        clause_ref: VACATION_CLAUSE.to_string(),
        input: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "days_worked": days_worked.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross": post_gross.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} days = {}",
            daily_rate.normalize(),
            days_worked.normalize(),
            post_gross.normalize()
        ),
    });
    step_number += 1;

    let post_taxes = assess_payroll_taxes(post_gross, step_number);
    let post_net = post_gross - post_taxes.total();
    audit_steps.extend(post_taxes.audit_steps);

    debug!(
        gross_vacation = %gross_vacation,
        net_vacation = %net_vacation,
        post_net = %post_net,
        "Vacation computed"
    );

    VacationResult {
        daily_rate,
        vacation_days: input.vacation_days,
        vacation_pay,
        one_third_bonus,
        variable_pay,
        gross_vacation,
        fgts_deposit,
        contribution: vacation_taxes.contribution,
        withholding: vacation_taxes.withholding,
        net_vacation,
        post_vacation: PostVacationSalary {
            days_worked,
            gross: post_gross,
            contribution: post_taxes.contribution,
            withholding: post_taxes.withholding,
            net: post_net,
        },
        audit_steps,
    }
}
