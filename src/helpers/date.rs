//! Date parsing and formatting helpers

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Parse a front-matter date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
        // Try parsing date only
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}

/// Format a date for display
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date_string("2024-01-15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 15));
    }

    #[test]
    fn test_parse_date_with_time() {
        let dt = parse_date_string("2024-01-15 10:30:00").unwrap();
        assert_eq!(format_date(&dt, "%Y-%m-%d %H:%M"), "2024-01-15 10:30");
    }

    #[test]
    fn test_parse_slashed_date() {
        let dt = parse_date_string("2021/06/15").unwrap();
        assert_eq!(format_date(&dt, "%Y-%m-%d"), "2021-06-15");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_date_string("next tuesday").is_none());
        assert!(parse_date_string("").is_none());
    }
}
