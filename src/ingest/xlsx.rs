use crate::errors::{AppError, AppResult};
use crate::ingest::find_columns;
use crate::models::record::RawRecord;
use crate::utils::excel::serial_to_datetime;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Read raw event records from the first sheet of a spreadsheet file.
///
/// Date cells are normalized to ISO text and numeric cells to their decimal
/// text, so the summarizer sees one uniform raw timestamp field regardless
/// of how the exporting tool typed the column.
pub(crate) fn read_xlsx(path: &Path) -> AppResult<Vec<RawRecord>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Spreadsheet("workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|c| cell_text(c)).collect(),
        None => Vec::new(),
    };
    let (ts_idx, actor_idx) = find_columns(&headers)?;

    let mut records = Vec::new();
    for row in rows {
        let ts = row.get(ts_idx).map(cell_text).unwrap_or_default();
        let actor = row.get(actor_idx).map(cell_text).unwrap_or_default();

        // Trailing padding rows with no content at all are skipped
        if ts.is_empty() && actor.is_empty() {
            continue;
        }

        records.push(RawRecord::new(ts, actor));
    }

    Ok(records)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::DateTime(dt) => match serial_to_datetime(dt.as_f64()) {
            Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
