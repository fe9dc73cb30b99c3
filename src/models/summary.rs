use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One output row of the attendance summary: a single person on a single
/// calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub date: NaiveDate,
    pub in_time: NaiveTime,
    pub out_time: NaiveTime,
    pub total_hours: f64,
    pub late_entry: bool,
    pub early_exit: bool,
}

impl SummaryRow {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn in_time_str(&self) -> String {
        self.in_time.format("%H:%M:%S").to_string()
    }

    pub fn out_time_str(&self) -> String {
        self.out_time.format("%H:%M:%S").to_string()
    }

    pub fn late_entry_label(&self) -> &'static str {
        yes_no(self.late_entry)
    }

    pub fn early_exit_label(&self) -> &'static str {
        yes_no(self.early_exit)
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
