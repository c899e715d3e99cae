//! CSV export of a payslip report.

use crate::error::{EngineError, EngineResult};
use crate::format::format_currency;

use super::PayrollReport;

const HEADER: [&str; 3] = ["Categoria", "Descrição", "Valor"];

/// Writes the earnings and deductions of a report as CSV.
///
/// Earnings are tagged `Vencimento` and deductions `Desconto`; deduction
/// amounts carry a leading `-`.
pub fn export_csv(report: &PayrollReport) -> EngineResult<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for line in &report.earnings {
        let value = format_currency(line.value);
        writer.write_record(["Vencimento", line.label.as_str(), value.as_str()])?;
    }
    for line in &report.deductions {
        let value = format!("-{}", format_currency(line.value));
        writer.write_record(["Desconto", line.label.as_str(), value.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}
