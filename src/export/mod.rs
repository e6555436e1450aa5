//! History export
//!
//! Serializes a history snapshot into the two interchange forms the field
//! app shares: tab-delimited text for the clipboard and a base64-encoded
//! xlsx workbook for the file-share sheet.

pub mod excel;
pub mod text;

use crate::types::{Sample, PLACEHOLDER};

pub use excel::to_workbook;
pub use text::to_delimited;

/// MIME type of the workbook export.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header labels in the fixed column order, matching `Sample::column_values`.
pub const COLUMN_HEADERS: [&str; 10] = [
    "Amostra",
    "Data de Entrega",
    "Compartimento",
    "Chassi",
    "Cliente",
    "Horímetro",
    "Tipo de Óleo",
    "Status",
    "Data de Coleta",
    "Responsável pela Coleta",
];

/// An encoded workbook ready for the file-share collaborator.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub content_base64: String,
}

/// Make a cell safe for delimited output.
///
/// Tabs, carriage returns and line feeds become single spaces, then the
/// cell is trimmed. A cell that ends up empty falls back to the placeholder
/// so column counts stay stable.
pub fn sanitize_cell(cell: &str) -> String {
    let cleaned: String = cell
        .chars()
        .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sanitized cell values for one row, in column order.
pub(crate) fn sanitized_values(sample: &Sample) -> [String; 10] {
    sample.column_values().map(sanitize_cell)
}
