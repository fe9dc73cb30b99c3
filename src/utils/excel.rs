//! Excel serial date conversions, shared by the XLSX writer and the
//! timestamp parser (XLSX date cells sometimes arrive as raw serials).

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Excel's day zero (the 1900 date system, with its leap-year quirk
/// already folded in).
fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Serial → date-time. Whole part is days since the epoch, fractional part
/// is the time of day. Rejects non-finite values and anything outside
/// 1900-01-01..=9999-12-31.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(1.0..=2_958_465.0).contains(&serial) {
        return None;
    }

    let days = serial.floor() as i64;
    let secs = ((serial - serial.floor()) * 86400.0).round() as i64;

    excel_epoch().checked_add_signed(Duration::days(days) + Duration::seconds(secs))
}

/// Date → serial (midnight).
pub fn date_to_serial(d: NaiveDate) -> f64 {
    let dt = d.and_hms_opt(0, 0, 0).unwrap();
    (dt - excel_epoch()).num_days() as f64
}

/// Time of day → fractional serial.
pub fn time_to_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
