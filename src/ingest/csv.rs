use crate::errors::AppResult;
use crate::ingest::find_columns;
use crate::models::record::RawRecord;
use csv::Reader;
use std::path::Path;

/// Read raw event records from a CSV file with a header row.
pub(crate) fn read_csv(path: &Path) -> AppResult<Vec<RawRecord>> {
    let mut rdr = Reader::from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let (ts_idx, actor_idx) = find_columns(&headers)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(RawRecord::new(
            row.get(ts_idx).unwrap_or("").trim(),
            row.get(actor_idx).unwrap_or("").trim(),
        ));
    }

    Ok(records)
}
