//! Publish date handling.
//!
//! Dates arrive as free-form ISO-8601 strings and are stored verbatim. They
//! are parsed only for ordering; anything unparseable never compares as
//! earlier than another date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Naive date-time layouts accepted in addition to RFC 3339.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a publish date into a UTC instant.
///
/// Accepts RFC 3339 with any offset, naive date-times and bare dates.
/// Values without an offset are taken as UTC.
pub fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// True only when both dates parse and `a` is strictly before `b`.
pub fn is_strictly_earlier(a: &str, b: &str) -> bool {
    match (parse_publish_date(a), parse_publish_date(b)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Date portion used for sitemap `lastmod`: everything before the first `T`.
pub fn date_portion(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_publish_date("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 45).unwrap());

        let dt = parse_publish_date("2024-06-15T14:30:45.250+02:00").unwrap();
        assert_eq!(
            dt.timestamp_millis(),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap().timestamp_millis() + 250
        );
    }

    #[test]
    fn test_parse_naive_and_date_only() {
        assert_eq!(
            parse_publish_date("2024-06-15T14:30:45").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 45).unwrap()
        );
        assert_eq!(
            parse_publish_date("2024-06-15T14:30").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 0).unwrap()
        );
        assert_eq!(
            parse_publish_date("2024-06-15").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_publish_date("").is_none());
        assert!(parse_publish_date("yesterday").is_none());
        assert!(parse_publish_date("2024-13-01").is_none());
    }

    #[test]
    fn test_strictly_earlier() {
        assert!(is_strictly_earlier("2024-01-01", "2024-06-01"));
        assert!(!is_strictly_earlier("2024-06-01", "2024-01-01"));
        assert!(!is_strictly_earlier("2024-06-01", "2024-06-01T00:00:00Z"));
        assert!(!is_strictly_earlier("garbage", "2024-06-01"));
        assert!(!is_strictly_earlier("2024-06-01", "garbage"));
    }

    #[test]
    fn test_date_portion() {
        assert_eq!(date_portion("2024-06-01T10:00:00Z"), "2024-06-01");
        assert_eq!(date_portion("2024-06-01"), "2024-06-01");
        assert_eq!(date_portion(""), "");
    }
}
