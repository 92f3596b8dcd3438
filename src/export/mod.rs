//! Report export.
//!
//! Serializes the flattened result rows into files. Two formats are
//! supported: CSV (delimited text) and XLSX (structured spreadsheet). Both
//! carry the same columns; file names are derived from the current date.

mod csv;
mod types;
mod xlsx;

pub use csv::export_csv;
pub use types::ExportFormat;
pub use xlsx::export_xlsx;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use log::info;

use crate::aggregate::ExportRow;
use crate::config::EXPORT_BASENAME;

/// File name for a report written today, e.g. `IP_Report_2026-08-07.csv`.
pub fn report_filename(format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        EXPORT_BASENAME,
        Local::now().format("%Y-%m-%d"),
        format.extension()
    )
}

/// Writes `rows` in the requested format into `output_dir`.
///
/// Returns the path of the written file. Exporting reads the rows only; it
/// can be repeated against the same result set without side effects on it.
pub fn export_rows(
    rows: &[ExportRow],
    format: ExportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = output_dir.join(report_filename(format));
    let written = match format {
        ExportFormat::Csv => export_csv(rows, &path)?,
        ExportFormat::Xlsx => export_xlsx(rows, &path)?,
    };
    info!("exported {} rows to {}", written, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filename_carries_date_and_extension() {
        let name = report_filename(ExportFormat::Csv);
        assert!(name.starts_with("IP_Report_"));
        assert!(name.ends_with(".csv"));
        // IP_Report_YYYY-MM-DD.csv
        assert_eq!(name.len(), "IP_Report_".len() + 10 + ".csv".len());
    }
}
