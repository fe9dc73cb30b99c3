// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use model::{SUMMARY_HEADERS, summary_to_row};

use crate::errors::AppResult;
use crate::models::summary::SummaryRow;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the summary to `path` in the requested format.
pub fn write_summary(
    rows: &[SummaryRow],
    path: &Path,
    format: &ExportFormat,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path),
        ExportFormat::Csv => json_csv::export_csv(rows, path),
        ExportFormat::Json => json_csv::export_json(rows, path),
    }
}

/// Default output path: `<input-base>_attendance_summary.<ext>` next to the
/// input file.
pub fn default_output_path(input: &Path, format: &ExportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("events");

    let file = format!("{}_attendance_summary.{}", stem, format.as_str());

    match input.parent() {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}
