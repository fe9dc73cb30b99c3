// src/export/model.rs

use crate::models::summary::SummaryRow;
use serde::Serialize;

/// Output header row. Field order is part of the contract.
pub const SUMMARY_HEADERS: [&str; 7] = [
    "Name",
    "Date",
    "In",
    "Out",
    "Total_Hours",
    "Late_Entry",
    "Early_Exit",
];

/// Flat record for CSV/JSON serialization, everything already formatted
/// for display.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "In")]
    pub in_time: String,
    #[serde(rename = "Out")]
    pub out_time: String,
    #[serde(rename = "Total_Hours")]
    pub total_hours: f64,
    #[serde(rename = "Late_Entry")]
    pub late_entry: String,
    #[serde(rename = "Early_Exit")]
    pub early_exit: String,
}

impl From<&SummaryRow> for SummaryExport {
    fn from(r: &SummaryRow) -> Self {
        Self {
            name: r.name.clone(),
            date: r.date_str(),
            in_time: r.in_time_str(),
            out_time: r.out_time_str(),
            total_hours: r.total_hours,
            late_entry: r.late_entry_label().to_string(),
            early_exit: r.early_exit_label().to_string(),
        }
    }
}

/// Convert one summary row into display cells (used by the text table).
pub fn summary_to_row(r: &SummaryRow) -> Vec<String> {
    vec![
        r.name.clone(),
        r.date_str(),
        r.in_time_str(),
        r.out_time_str(),
        format!("{:.2}", r.total_hours),
        r.late_entry_label().to_string(),
        r.early_exit_label().to_string(),
    ]
}
