//! The summarization engine: raw event rows in, per-person daily summary out.
//!
//! Pure function of its input, no I/O. Five sequential stages: parse every
//! timestamp, derive date/time parts, group by (actor, date), derive the
//! metrics, then project and sort.

use crate::core::timestamp::parse_timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::record::RawRecord;
use crate::models::summary::SummaryRow;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

/// Fixed attendance policy. The CLI always runs with the defaults; the
/// struct exists so the engine can be exercised against other thresholds.
#[derive(Debug, Clone)]
pub struct SummaryPolicy {
    /// First event strictly later than this counts as a late entry.
    pub late_entry: NaiveTime,
    /// Last event strictly earlier than this counts as an early exit.
    pub expected_exit: NaiveTime,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            late_entry: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            expected_exit: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        }
    }
}

/// Accumulator for one (actor, calendar date) bucket. Min/max run over the
/// full timestamps, so out-of-order input rows cannot skew the extremes.
#[derive(Debug)]
struct DailyBucket {
    first_ts: NaiveDateTime,
    last_ts: NaiveDateTime,
}

impl DailyBucket {
    fn fold(&mut self, ts: NaiveDateTime) {
        if ts < self.first_ts {
            self.first_ts = ts;
        }
        if ts > self.last_ts {
            self.last_ts = ts;
        }
    }
}

/// Summarize raw events into one row per person per calendar date.
///
/// All-or-nothing: a single unparseable timestamp fails the whole call with
/// no partial output. Empty input yields an empty summary.
pub fn summarize(records: &[RawRecord], policy: &SummaryPolicy) -> AppResult<Vec<SummaryRow>> {
    // Stage 1+2: parse every timestamp up front; first bad value aborts
    let mut parsed: Vec<(String, NaiveDateTime)> = Vec::with_capacity(records.len());
    for r in records {
        let ts = parse_timestamp(&r.timestamp)
            .ok_or_else(|| AppError::ParseTimestamp(r.timestamp.clone()))?;
        parsed.push((r.actor.clone(), ts));
    }

    // Stage 3: fold each row into its (actor, date) bucket
    let mut buckets: HashMap<(String, NaiveDate), DailyBucket> = HashMap::new();
    for (actor, ts) in parsed {
        buckets
            .entry((actor, ts.date()))
            .and_modify(|b| b.fold(ts))
            .or_insert(DailyBucket {
                first_ts: ts,
                last_ts: ts,
            });
    }

    // Stage 4+5: derive metrics, project, sort by (name, date)
    let mut rows: Vec<SummaryRow> = buckets
        .into_iter()
        .map(|((name, date), b)| {
            let in_time = b.first_ts.time();
            let out_time = b.last_ts.time();
            SummaryRow {
                name,
                date,
                in_time,
                out_time,
                total_hours: round2(
                    (b.last_ts - b.first_ts).num_milliseconds() as f64 / 3_600_000.0,
                ),
                late_entry: in_time > policy.late_entry,
                early_exit: out_time < policy.expected_exit,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.date.cmp(&b.date)));

    Ok(rows)
}

/// Round half away from zero to 2 decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
