//! Timestamp predicates

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Check that a string parses with the given `chrono` format string
///
/// Formats with an offset are parsed as zoned timestamps; formats without one
/// may describe a full date-time, a date or a time of day.
pub fn is_time(s: &str, format: &str) -> bool {
    DateTime::parse_from_str(s, format).is_ok()
        || NaiveDateTime::parse_from_str(s, format).is_ok()
        || NaiveDate::parse_from_str(s, format).is_ok()
        || NaiveTime::parse_from_str(s, format).is_ok()
}

/// Check that a string is an RFC 3339 timestamp
pub fn is_rfc3339_time(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
}

/// Check that a string is an RFC 3339 timestamp without the offset
pub fn is_rfc3339_without_zone_time(s: &str) -> bool {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}
