//! Printable payslip report.
//!
//! The report lists only the earnings and deductions that are actually
//! present, followed by the totals, reference rates, tax brackets and the
//! net salary. [`PayrollReport::render_text`] produces a plain-text version
//! and [`export_csv`] a spreadsheet-friendly one.

mod csv_export;

pub use csv_export::export_csv;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_currency;
use crate::models::{PayrollInput, PayrollResult};

/// Label used for ad-hoc deductions without a description.
pub const DEFAULT_DEDUCTION_LABEL: &str = "Outro Desconto";

/// One labelled amount in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Display label.
    pub label: String,
    /// Amount, always positive.
    pub value: Decimal,
}

/// Reference information shown next to the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInfo {
    /// Workload label (e.g. "220 horas (44h semanais)").
    pub workload: String,
    /// Daytime overtime hours, `"---"` when none.
    pub overtime_hours: String,
    /// Night overtime hours, `"---"` when none.
    pub night_overtime_hours: String,
    /// Normal hourly rate.
    pub hourly_rate: Decimal,
    /// Daytime overtime hourly rate.
    pub overtime_rate: Decimal,
    /// Night overtime hourly rate.
    pub night_overtime_rate: Decimal,
}

/// A payslip summary ready to print or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Earnings with a positive value, in payslip order.
    pub earnings: Vec<ReportLine>,
    /// Deductions with a positive value, in payslip order.
    pub deductions: Vec<ReportLine>,
    /// Total earnings.
    pub gross_salary: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Reference rates and hours.
    pub info: ReportInfo,
    /// INSS bracket label.
    pub contribution_bracket: String,
    /// IRRF bracket label.
    pub withholding_bracket: String,
    /// Net salary.
    pub net_salary: Decimal,
}

fn hours_label(hours: Decimal) -> String {
    if hours > Decimal::ZERO {
        format!("{}h", hours.normalize())
    } else {
        "---".to_string()
    }
}

fn push_line(lines: &mut Vec<ReportLine>, label: &str, value: Decimal) {
    if value > Decimal::ZERO {
        lines.push(ReportLine {
            label: label.to_string(),
            value,
        });
    }
}

/// Builds the report for a monthly result.
///
/// `input` supplies the hours and the ad-hoc deduction descriptions that the
/// result does not carry.
pub fn build_report(
    input: &PayrollInput,
    result: &PayrollResult,
    workload_label: &str,
) -> PayrollReport {
    let mut earnings = Vec::new();
    push_line(&mut earnings, "Salário Base", input.base_salary);
    push_line(&mut earnings, "Horas Extras Diurnas", result.overtime_value);
    push_line(&mut earnings, "Adicional Noturno", result.night_shift_value);
    push_line(&mut earnings, "Horas Extras Noturnas", result.night_overtime_value);
    push_line(&mut earnings, "Bonificação", result.bonus_value);
    push_line(&mut earnings, "DSR s/ Verbas Variáveis", result.dsr_value);

    let mut deductions = Vec::new();
    push_line(&mut deductions, "INSS", result.contribution.amount);
    push_line(&mut deductions, "IRRF", result.withholding.amount);
    push_line(&mut deductions, "Convênio Médico", result.health_insurance);
    for deduction in &input.deductions {
        let label = if deduction.description.trim().is_empty() {
            DEFAULT_DEDUCTION_LABEL
        } else {
            deduction.description.as_str()
        };
        push_line(&mut deductions, label, deduction.value);
    }

    PayrollReport {
        earnings,
        deductions,
        gross_salary: result.gross_salary,
        total_deductions: result.total_deductions,
        info: ReportInfo {
            workload: workload_label.to_string(),
            overtime_hours: hours_label(input.overtime_hours),
            night_overtime_hours: hours_label(input.night_overtime_hours),
            hourly_rate: result.hourly_rate,
            overtime_rate: result.overtime_rate,
            night_overtime_rate: result.night_overtime_rate,
        },
        contribution_bracket: result.contribution.bracket.clone(),
        withholding_bracket: result.withholding.bracket.clone(),
        net_salary: result.net_salary,
    }
}

impl PayrollReport {
    /// Renders the report as plain text with BRL amounts.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "  {:<34}{:>18}", label, value)
}

impl fmt::Display for PayrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RELATÓRIO DE FOLHA DE PAGAMENTO")?;
        writeln!(f)?;

        writeln!(f, "VENCIMENTOS")?;
        for line in &self.earnings {
            row(f, &line.label, &format_currency(line.value))?;
        }

        writeln!(f)?;
        writeln!(f, "DESCONTOS")?;
        for line in &self.deductions {
            row(f, &line.label, &format_currency(line.value))?;
        }

        writeln!(f)?;
        writeln!(f, "BASES")?;
        row(f, "Salário Bruto", &format_currency(self.gross_salary))?;
        row(f, "Total de Descontos", &format_currency(self.total_deductions))?;

        writeln!(f)?;
        writeln!(f, "INFORMAÇÕES")?;
        row(f, "Carga Horária", &self.info.workload)?;
        row(f, "Horas Extras Diurnas", &self.info.overtime_hours)?;
        row(f, "Horas Extras Noturnas", &self.info.night_overtime_hours)?;
        row(f, "Valor da Hora", &format_currency(self.info.hourly_rate))?;
        row(f, "Valor Hora Extra Diurna", &format_currency(self.info.overtime_rate))?;
        row(
            f,
            "Valor Hora Extra Noturna",
            &format_currency(self.info.night_overtime_rate),
        )?;

        writeln!(f)?;
        writeln!(f, "ENQUADRAMENTO")?;
        row(f, "INSS", &self.contribution_bracket)?;
        row(f, "IRRF", &self.withholding_bracket)?;

        writeln!(f)?;
        row(f, "SALÁRIO LÍQUIDO", &format_currency(self.net_salary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_monthly;
    use crate::models::Deduction;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_input() -> PayrollInput {
        PayrollInput {
            workload_divisor: dec("220"),
            base_salary: dec("3000"),
            overtime_hours: dec("10"),
            overtime_percentage: dec("75"),
            night_shift_percentage: dec("20"),
            health_insurance: dec("150"),
            deductions: vec![
                Deduction {
                    description: "Vale Refeição".to_string(),
                    value: dec("80"),
                },
                Deduction {
                    description: String::new(),
                    value: dec("20"),
                },
                Deduction {
                    description: "Zerado".to_string(),
                    value: Decimal::ZERO,
                },
            ],
            ..Default::default()
        }
    }

    fn sample_report() -> PayrollReport {
        let input = sample_input();
        let result = compute_monthly(&input);
        build_report(&input, &result, "220 horas (44h semanais)")
    }

    #[test]
    fn test_only_positive_earnings_are_listed() {
        let report = sample_report();

        let labels: Vec<&str> = report.earnings.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Salário Base", "Horas Extras Diurnas"]);
    }

    #[test]
    fn test_deductions_order_and_default_label() {
        let report = sample_report();

        let labels: Vec<&str> = report.deductions.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["INSS", "IRRF", "Convênio Médico", "Vale Refeição", "Outro Desconto"]
        );
    }

    #[test]
    fn test_info_hours_labels() {
        let report = sample_report();

        assert_eq!(report.info.overtime_hours, "10h");
        assert_eq!(report.info.night_overtime_hours, "---");
        assert_eq!(report.info.workload, "220 horas (44h semanais)");
    }

    #[test]
    fn test_totals_match_result() {
        let input = sample_input();
        let result = compute_monthly(&input);
        let report = build_report(&input, &result, "220");

        assert_eq!(report.gross_salary, result.gross_salary);
        assert_eq!(report.total_deductions, result.total_deductions);
        assert_eq!(report.net_salary, result.net_salary);
        assert_eq!(report.contribution_bracket, result.contribution.bracket);
    }

    #[test]
    fn test_render_text_contains_sections_and_amounts() {
        let text = sample_report().render_text();

        assert!(text.starts_with("RELATÓRIO DE FOLHA DE PAGAMENTO"));
        assert!(text.contains("VENCIMENTOS"));
        assert!(text.contains("R$ 3.000,00"));
        assert!(text.contains("Outro Desconto"));
        assert!(text.contains("Valor da Hora"));
        assert!(text.contains("R$ 13,64"));
        assert!(text.contains("SALÁRIO LÍQUIDO"));
    }

    #[test]
    fn test_display_lays_out_aligned_rows() {
        let report = sample_report();
        let text = format!("{}", report);

        assert_eq!(text, report.render_text());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "RELATÓRIO DE FOLHA DE PAGAMENTO");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "VENCIMENTOS");
        assert_eq!(lines[3], format!("  {:<34}{:>18}", "Salário Base", "R$ 3.000,00"));
        assert!(text.ends_with(&format!(
            "\n  {:<34}{:>18}\n",
            "SALÁRIO LÍQUIDO",
            format_currency(report.net_salary)
        )));
    }

    #[test]
    fn test_empty_input_renders_without_lines() {
        let input = PayrollInput::default();
        let result = compute_monthly(&input);
        let report = build_report(&input, &result, "220 horas");

        assert!(report.earnings.is_empty());
        assert!(report.deductions.is_empty());
        assert!(report.render_text().contains("R$ 0,00"));
    }
}
