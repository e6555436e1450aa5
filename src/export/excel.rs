//! Excel workbook serialization

use super::{sanitized_values, ExportFile, COLUMN_HEADERS, XLSX_MIME};
use crate::error::{Error, Result};
use crate::types::Sample;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};

/// Encode rows into a single-sheet xlsx workbook, base64 for transport.
///
/// The sheet mirrors the delimited export: same columns, same order, same
/// cell sanitization. `file_prefix` seeds the suggested file name, which is
/// stamped with the current date.
pub fn to_workbook(rows: &[Sample], file_prefix: &str) -> Result<ExportFile> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("Amostras")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, sample) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, value) in sanitized_values(sample).iter().enumerate() {
            sheet
                .write_string(row, col as u16, value.as_str())
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    // Approximate widths: code/date columns narrow, names wide.
    for (col, width) in [(0, 14), (1, 16), (4, 28), (6, 18), (9, 28)] {
        sheet
            .set_column_width(col, width)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(e.to_string()))?;

    let stamp = Local::now().date_naive().format("%d-%m-%Y");
    Ok(ExportFile {
        file_name: format!("{file_prefix}_{stamp}.xlsx"),
        mime_type: XLSX_MIME.to_string(),
        content_base64: STANDARD.encode(buffer),
    })
}
