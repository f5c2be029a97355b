//! `xs:dateTime` parsing and formatting.
//!
//! Timestamps in event logs are written in the XML Schema `xs:dateTime`
//! lexical form, e.g. `2005-10-24T11:57:31.000+01:00`. Real-world logs are
//! sloppy about it, so parsing is tolerant:
//!
//! - fractional seconds are optional,
//! - the offset may be `Z`, `+01:00` or `+0100`,
//! - a missing offset is read as UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};

const OFFSET_WITHOUT_COLON: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const WITHOUT_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an `xs:dateTime` string. Returns `None` if it cannot be read.
pub fn parse_xs_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_str(value, OFFSET_WITHOUT_COLON) {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(value, WITHOUT_OFFSET)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Format as `xs:dateTime` with millisecond precision and a numeric offset.
pub fn format_xs_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.to_rfc3339_opts(SecondsFormat::Millis, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_full_form() {
        let parsed = parse_xs_datetime("2005-10-24T11:57:31.000+01:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 3600);
        assert_eq!(parsed.hour(), 11);
    }

    #[test]
    fn parses_without_millis_and_with_z() {
        let parsed = parse_xs_datetime("2005-10-24T11:57:31Z").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert_eq!(parsed.second(), 31);
    }

    #[test]
    fn parses_offset_without_colon() {
        let parsed = parse_xs_datetime("2026-01-22T09:57:28+0000").unwrap();
        assert_eq!(parsed.minute(), 57);
    }

    #[test]
    fn missing_offset_is_utc() {
        let parsed = parse_xs_datetime("2005-10-24T11:57:31.250").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[test]
    fn garbage_is_none() {
        assert!(parse_xs_datetime("yesterday").is_none());
        assert!(parse_xs_datetime("").is_none());
        assert!(parse_xs_datetime("2005-13-45T99:00:00Z").is_none());
    }

    #[test]
    fn formats_with_millis_and_offset() {
        let parsed = parse_xs_datetime("2005-10-24T11:57:31+01:00").unwrap();
        assert_eq!(format_xs_datetime(&parsed), "2005-10-24T11:57:31.000+01:00");

        let utc = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_xs_datetime(&utc), "2020-01-02T03:04:05.000+00:00");
    }
}
