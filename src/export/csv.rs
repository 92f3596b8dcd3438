//! CSV export.
//!
//! Writes the flattened rows as delimited text, one record per result with a
//! header record first.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::aggregate::ExportRow;

/// Writes `rows` to `output` as CSV.
///
/// Returns the number of data records written (excluding the header).
pub fn export_csv(rows: &[ExportRow], output: &Path) -> Result<usize> {
    let mut writer = Writer::from_path(output)
        .with_context(|| format!("Failed to create CSV file {}", output.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV file")?;
    Ok(rows.len())
}
