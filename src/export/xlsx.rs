//! XLSX export.
//!
//! Writes the flattened rows to a single-sheet workbook. Cell content mirrors
//! the CSV export exactly; only the container differs.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};

use crate::aggregate::{ExportRow, ROW_HEADERS};

/// Writes `rows` to `output` as an XLSX workbook.
///
/// Returns the number of data rows written (excluding the header row).
pub fn export_xlsx(rows: &[ExportRow], output: &Path) -> Result<usize> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Data")
        .context("Failed to name worksheet")?;

    let header_format = Format::new().set_bold();
    for (col, header) in ROW_HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .context("Failed to write header row")?;
    }

    for (index, row) in rows.iter().enumerate() {
        let excel_row = (index + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            worksheet
                .write_string(excel_row, col as u16, *cell)
                .with_context(|| format!("Failed to write row {}", excel_row))?;
        }
    }

    workbook
        .save(output)
        .with_context(|| format!("Failed to save workbook {}", output.display()))?;
    Ok(rows.len())
}
