//! Display formatting for backend timestamps.

use chrono::{DateTime, Utc};

/// Formats a timestamp for admin lists.
/// Example: 2025-11-03T09:15:26Z -> "Nov 3, 2025 09:15"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

/// Formats the date part only.
/// Example: 2025-11-03T09:15:26Z -> "Nov 3, 2025"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_datetime() {
        let dt = parse("2024-03-15T14:02:26.123Z");
        assert_eq!(format_datetime(&dt), "Mar 15, 2024 14:02");
    }

    #[test]
    fn test_format_datetime_single_digit_day() {
        let dt = parse("2025-11-03T09:15:00Z");
        assert_eq!(format_datetime(&dt), "Nov 3, 2025 09:15");
    }

    #[test]
    fn test_format_date() {
        let dt = parse("2024-12-31T23:59:59Z");
        assert_eq!(format_date(&dt), "Dec 31, 2024");
    }
}
