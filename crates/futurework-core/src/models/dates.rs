//! Date parsing for sorting and display.
//!
//! Content dates come in two shapes: display dates (`YYYY-MM-DD`) and
//! detection timestamps (RFC 3339). Both reduce to Unix seconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a content date into Unix seconds (UTC).
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and `YYYY-MM-DD`
/// (midnight UTC). Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

/// Long-form display date, e.g. "Friday, 6 February 2026"
pub fn format_long_date(value: &str) -> String {
    match parse_timestamp(value).and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)) {
        Some(dt) => dt.format("%A, %-d %B %Y").to_string(),
        None => value.to_string(),
    }
}

/// Long-form date and 24h time, e.g. "Friday, 6 February 2026 at 08:15"
pub fn format_long_date_time(value: &str) -> String {
    match parse_timestamp(value).and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)) {
        Some(dt) => dt.format("%A, %-d %B %Y at %H:%M").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse_timestamp("1970-01-02"), Some(86_400));
        assert_eq!(parse_timestamp("1970-01-01T00:01:00Z"), Some(60));
        assert_eq!(parse_timestamp("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_timestamp("1970-01-01T00:00:30"), Some(30));
        assert_eq!(parse_timestamp("  1970-01-02 "), Some(86_400));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_ordering_matches_calendar() {
        let a = parse_timestamp("2026-02-05").unwrap();
        let b = parse_timestamp("2026-02-06T00:42:15Z").unwrap();
        let c = parse_timestamp("2026-02-06T08:15:30Z").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2026-02-06"), "Friday, 6 February 2026");
        assert_eq!(
            format_long_date_time("2026-02-06T08:15:30Z"),
            "Friday, 6 February 2026 at 08:15"
        );
        assert_eq!(format_long_date("soon"), "soon");
    }
}
