mod common;
use common::temp_path;

use attendsum::errors::AppError;
use attendsum::ingest::{ACTOR_COL, TIMESTAMP_COL, load_records};
use std::fs;
use std::path::Path;

#[test]
fn test_load_csv_happy_path() {
    let path = temp_path("ingest_happy", "csv");
    fs::write(
        &path,
        "actor.display_name,event.published,ignored\n\
         Alice , 2024-01-02 09:45:00 ,x\n\
         Bob,2024-01-02 10:15:00,y\n",
    )
    .unwrap();

    let records = load_records(Path::new(&path)).expect("load");
    assert_eq!(records.len(), 2);
    // column order in the file is irrelevant, values come back trimmed
    assert_eq!(records[0].actor, "Alice");
    assert_eq!(records[0].timestamp, "2024-01-02 09:45:00");
    assert_eq!(records[1].actor, "Bob");
}

#[test]
fn test_load_csv_missing_timestamp_column() {
    let path = temp_path("ingest_no_ts", "csv");
    fs::write(&path, "actor.display_name,when\nAlice,2024-01-02\n").unwrap();

    let err = load_records(Path::new(&path)).unwrap_err();
    match err {
        AppError::MissingColumn(col) => assert_eq!(col, TIMESTAMP_COL),
        other => panic!("expected MissingColumn, got {other}"),
    }
}

#[test]
fn test_load_csv_missing_actor_column() {
    let path = temp_path("ingest_no_actor", "csv");
    fs::write(&path, "event.published,who\n2024-01-02 09:00:00,Alice\n").unwrap();

    let err = load_records(Path::new(&path)).unwrap_err();
    match err {
        AppError::MissingColumn(col) => assert_eq!(col, ACTOR_COL),
        other => panic!("expected MissingColumn, got {other}"),
    }
}

#[test]
fn test_load_csv_headers_only() {
    let path = temp_path("ingest_empty", "csv");
    fs::write(&path, "event.published,actor.display_name\n").unwrap();

    let records = load_records(Path::new(&path)).expect("load");
    assert!(records.is_empty());
}

#[test]
fn test_csv_extension_is_case_insensitive() {
    let path = temp_path("ingest_upper", "CSV");
    fs::write(
        &path,
        "event.published,actor.display_name\n2024-01-02 09:00:00,Alice\n",
    )
    .unwrap();

    let records = load_records(Path::new(&path)).expect("load");
    assert_eq!(records.len(), 1);
}

#[test]
fn test_non_csv_goes_through_spreadsheet_reader() {
    // not a spreadsheet at all: must fail in the loader, not in the engine
    let path = temp_path("ingest_garbage", "txt");
    fs::write(&path, "this is not a workbook").unwrap();

    let err = load_records(Path::new(&path)).unwrap_err();
    assert!(matches!(err, AppError::Spreadsheet(_)));
}

#[test]
fn test_missing_file() {
    let err = load_records(Path::new("/nonexistent/events.csv")).unwrap_err();
    assert!(matches!(err, AppError::MissingFile(_)));
}

#[test]
fn test_load_xlsx_round_trip() {
    use attendsum::core::summarizer::{SummaryPolicy, summarize};
    use attendsum::utils::excel::{date_to_serial, time_to_serial};
    use chrono::{NaiveDate, NaiveTime};
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

    let path = temp_path("ingest_xlsx_rt", "xlsx");

    // Build a workbook mixing the three cell typings an exporter may use:
    // a real datetime cell, a raw float serial, and plain text.
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();

    ws.write(0, 0, "event.published").unwrap();
    ws.write(0, 1, "actor.display_name").unwrap();

    let dt_fmt = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let clock_in = ExcelDateTime::parse_from_str("2024-01-02T09:45:00").unwrap();
    ws.write_datetime_with_format(1, 0, &clock_in, &dt_fmt).unwrap();
    ws.write(1, 1, "Alice").unwrap();

    let clock_out = date_to_serial(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        + time_to_serial(NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    ws.write(2, 0, clock_out).unwrap();
    ws.write(2, 1, "Alice").unwrap();

    ws.write(3, 0, "2024-01-02 10:15:00").unwrap();
    ws.write(3, 1, "Bob").unwrap();

    workbook.save(&path).unwrap();

    let records = load_records(Path::new(&path)).expect("load xlsx");
    assert_eq!(records.len(), 3);

    // all three typings normalize to parseable timestamps
    let rows = summarize(&records, &SummaryPolicy::default()).expect("summarize");
    assert_eq!(rows.len(), 2);

    let alice = &rows[0];
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.in_time_str(), "09:45:00");
    assert_eq!(alice.out_time_str(), "18:30:00");
    assert_eq!(alice.total_hours, 8.75);

    let bob = &rows[1];
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.in_time_str(), "10:15:00");
}

#[test]
fn test_load_xlsx_missing_column() {
    use rust_xlsxwriter::Workbook;

    let path = temp_path("ingest_xlsx_no_actor", "xlsx");

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.write(0, 0, "event.published").unwrap();
    ws.write(0, 1, "who").unwrap();
    ws.write(1, 0, "2024-01-02 09:00:00").unwrap();
    ws.write(1, 1, "Alice").unwrap();
    workbook.save(&path).unwrap();

    let err = load_records(Path::new(&path)).unwrap_err();
    match err {
        AppError::MissingColumn(col) => assert_eq!(col, ACTOR_COL),
        other => panic!("expected MissingColumn, got {other}"),
    }
}
