//! UTC date-time parsing and day-window helpers.
//!
//! Persisted start dates arrive as strings in whatever ISO-8601 shape the
//! client stored; everything here normalizes to `DateTime<Utc>` before any
//! comparison happens.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};

/// Parses a persisted date-time string into a UTC instant.
///
/// Accepts RFC 3339 (`2025-01-01T00:00:00.000Z`, any offset), a naive
/// date-time (`2025-01-01T00:00:00`, read as UTC), or a bare date
/// (`2025-01-01`, midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_utc_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Returns midnight UTC of the instant's calendar day.
#[must_use]
pub fn utc_day_start(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&instant.date_naive().and_time(NaiveTime::MIN))
}

/// Returns the inclusive `[00:00:00, 23:59:59]` window of the instant's
/// UTC calendar day.
#[must_use]
pub fn utc_day_window(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = utc_day_start(instant);
    (start, start + TimeDelta::seconds(86_399))
}

/// Formats a UTC instant in the basic ISO form `YYYYMMDDTHHMMSSZ`.
#[must_use]
pub fn format_ical_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_millis() {
        let parsed = parse_utc_datetime("2025-01-01T10:30:00.000Z").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_utc_datetime("2025-01-01T02:00:00+02:00").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_datetime_as_utc() {
        let parsed = parse_utc_datetime("2025-06-15T08:15:30").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 15, 8, 15, 30).unwrap());
    }

    #[test]
    fn parses_bare_date_as_utc_midnight() {
        let parsed = parse_utc_datetime("2025-02-10").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 2, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_utc_datetime("not a date").is_none());
        assert!(parse_utc_datetime("").is_none());
        assert!(parse_utc_datetime("2025-13-40").is_none());
    }

    #[test]
    fn day_window_is_inclusive_of_both_bounds() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 9, 14, 45, 12).unwrap();
        let (start, end) = utc_day_window(instant);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 59).unwrap());
    }

    #[test]
    fn formats_basic_iso_utc() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 13, 45, 30).unwrap();
        assert_eq!(format_ical_utc(instant), "20250115T134530Z");
    }
}
