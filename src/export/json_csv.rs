// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SUMMARY_HEADERS, SummaryExport};
use crate::export::notify_export_success;
use crate::models::summary::SummaryRow;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let flat: Vec<SummaryExport> = rows.iter().map(SummaryExport::from).collect();

    let json_data = serde_json::to_string_pretty(&flat)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header included via serde).
pub(crate) fn export_csv(rows: &[SummaryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    if rows.is_empty() {
        // serde only emits the header alongside the first record
        wtr.write_record(SUMMARY_HEADERS)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for r in rows {
        wtr.serialize(SummaryExport::from(r))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
