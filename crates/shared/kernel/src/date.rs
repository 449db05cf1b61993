//! Date-only helpers for `YYYY-MM-DD` strings exchanged with the backend.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
///
/// Impossible dates (`2024-02-30`) are rejected.
#[must_use]
pub fn parse_iso_date_only(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Accepts a date-only string, an RFC 3339 timestamp or a naive `YYYY-MM-DDTHH:MM:SS`.
#[must_use]
pub fn is_date_string(text: &str) -> bool {
    parse_iso_date_only(text).is_some()
        || DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").is_ok()
}

/// Sort key that orders date-only strings chronologically.
///
/// Date-only values map to `yyyymmdd`; timestamps fall back to epoch milliseconds;
/// anything unparsable sorts first as `0`.
#[must_use]
pub fn date_only_sort_key(text: &str) -> i64 {
    if let Some(date) = parse_iso_date_only(text) {
        return i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    }
    DateTime::parse_from_rfc3339(text).map_or(0, |ts| ts.timestamp_millis())
}
