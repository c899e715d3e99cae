//! Monthly payslip computation.
//!
//! Runs every earning rule in order, then both payroll taxes on the gross
//! salary, then the remaining deductions. The function never fails: zero
//! divisors and missing inputs short-circuit to zero amounts.

use rust_decimal::Decimal;
use tracing::debug;

use super::brackets::assess_payroll_taxes;
use super::hourly_rate::calculate_hourly_rate;
use super::night_shift::{calculate_night_overtime, calculate_night_shift};
use super::overtime::calculate_overtime;
use super::training_bonus::calculate_training_bonus;
use super::weekly_rest::{DsrComponents, calculate_weekly_rest};
use crate::models::{AuditStep, PayrollInput, PayrollResult};

/// Computes the monthly payslip for one input record.
///
/// Any record accepted by [`PayrollInput::validate`] computes without
/// overflowing `Decimal`.
///
/// # Examples
///
/// ```
/// use folha_engine::calculation::compute_monthly;
/// use folha_engine::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput {
///     workload_divisor: Decimal::from(220),
///     base_salary: Decimal::from(1518),
///     ..Default::default()
/// };
/// let result = compute_monthly(&input);
/// assert_eq!(result.gross_salary, Decimal::from(1518));
/// assert_eq!(result.contribution.amount, Decimal::new(11385, 2));
/// ```
pub fn compute_monthly(input: &PayrollInput) -> PayrollResult {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let hourly = calculate_hourly_rate(input.base_salary, input.workload_divisor, step_number);
    let hourly_rate = hourly.rate;
    audit_steps.push(hourly.audit_step);
    step_number += 1;

    let overtime = calculate_overtime(
        input.overtime_hours,
        hourly_rate,
        input.overtime_percentage,
        step_number,
    );
    audit_steps.push(overtime.audit_step);
    step_number += 1;

    let night = calculate_night_shift(
        input.night_shift_hours,
        hourly_rate,
        input.night_shift_percentage,
        step_number,
    );
    audit_steps.push(night.audit_step);
    step_number += 1;

    let night_overtime = calculate_night_overtime(
        input.night_overtime_hours,
        night.night_hour_rate,
        input.overtime_percentage,
        step_number,
    );
    audit_steps.push(night_overtime.audit_step);
    step_number += 1;

    let bonus = calculate_training_bonus(
        input.training_value,
        input.training_duration,
        input.training_hours_given,
        step_number,
    );
    audit_steps.push(bonus.audit_step);
    step_number += 1;

    let components = DsrComponents {
        overtime_value: overtime.value,
        night_shift_value: night.value,
        night_overtime_value: night_overtime.value,
        bonus_value: bonus.value,
    };
    let dsr = calculate_weekly_rest(
        components,
        input.dsr_policy,
        input.working_days,
        input.sundays_and_holidays,
        step_number,
    );
    audit_steps.push(dsr.audit_step);
    step_number += 1;

    let variable_pay =
        overtime.value + night.value + night_overtime.value + bonus.value + dsr.value;
    let gross_salary = input.base_salary + variable_pay;

    let taxes = assess_payroll_taxes(gross_salary, step_number);
    let tax_total = taxes.total();
    audit_steps.extend(taxes.audit_steps);

    let other_deductions = input.other_deductions_total();
    let total_deductions = tax_total + input.health_insurance + other_deductions;
    let net_salary = gross_salary - total_deductions;

    debug!(
        gross_salary = %gross_salary,
        total_deductions = %total_deductions,
        net_salary = %net_salary,
        steps = audit_steps.len(),
        "Monthly payroll computed"
    );

    PayrollResult {
        hourly_rate,
        overtime_rate: overtime.rate,
        overtime_value: overtime.value,
        night_shift_value: night.value,
        night_hour_rate: night.night_hour_rate,
        night_overtime_rate: night_overtime.rate,
        night_overtime_value: night_overtime.value,
        bonus_value: bonus.value,
        dsr_base: dsr.base,
        dsr_value: dsr.value,
        variable_pay,
        gross_salary,
        contribution: taxes.contribution,
        withholding: taxes.withholding,
        health_insurance: input.health_insurance,
        other_deductions,
        total_deductions,
        net_salary,
        audit_steps,
    }
}
