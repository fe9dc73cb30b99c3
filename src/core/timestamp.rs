//! Timestamp parsing for raw event rows.
//!
//! Input files come from different exporters, so the timestamp column may
//! carry any of several common encodings. Each candidate format is tried in
//! order; the first hit wins.

use crate::utils::excel::serial_to_datetime;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DT_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parse a raw timestamp cell into a naive date-time.
///
/// Values carrying a UTC offset (RFC 3339, trailing `Z`) keep their
/// components exactly as written: no timezone conversion is performed,
/// the offset is simply dropped.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in DT_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    // Bare date: midnight
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    // Excel serial (XLSX date cells exported as raw numbers)
    if let Ok(serial) = s.parse::<f64>() {
        return serial_to_datetime(serial);
    }

    None
}
