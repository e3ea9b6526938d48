//! Time utilities: permissive ISO-8601 timestamp parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Naive layouts accepted in the source CSV files, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601-like timestamp. Returns None on anything that does not
/// parse; callers treat that as a missing value, never as a hard failure.
///
/// Inputs carrying a UTC offset are normalized to UTC before the offset is
/// dropped. A bare date reads as midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// ISO-8601 rendering used for console output and export.
pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Seconds since the Unix epoch, interpreting the naive value as UTC.
pub fn epoch_seconds(t: &NaiveDateTime) -> i64 {
    t.and_utc().timestamp()
}
