//! Table loader: turns an uploaded event log file into raw records.
//!
//! Extension dispatch mirrors the upstream tool: a `.csv` suffix
//! (case-insensitive) gets the CSV reader, anything else is attempted as a
//! spreadsheet. Unsupported formats fail inside the spreadsheet reader, the
//! engine never sees them.

mod csv;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::record::RawRecord;
use std::path::Path;

/// Fixed input column identifiers. These are policy, not user input.
pub const TIMESTAMP_COL: &str = "event.published";
pub const ACTOR_COL: &str = "actor.display_name";

pub fn load_records(path: &Path) -> AppResult<Vec<RawRecord>> {
    if !path.is_file() {
        return Err(AppError::MissingFile(path.display().to_string()));
    }

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        csv::read_csv(path)
    } else {
        xlsx::read_xlsx(path)
    }
}

/// Locate both required columns in a header row. Exact match only.
pub(crate) fn find_columns(headers: &[String]) -> AppResult<(usize, usize)> {
    let ts = headers
        .iter()
        .position(|h| h == TIMESTAMP_COL)
        .ok_or_else(|| AppError::MissingColumn(TIMESTAMP_COL.to_string()))?;
    let actor = headers
        .iter()
        .position(|h| h == ACTOR_COL)
        .ok_or_else(|| AppError::MissingColumn(ACTOR_COL.to_string()))?;
    Ok((ts, actor))
}
