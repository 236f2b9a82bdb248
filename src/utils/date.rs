//! Date formatting for post display and feeds.
//!
//! Post dates are calendar dates without a time zone. They are formatted as
//! the calendar date they name, never shifted through a local offset.

use chrono::{NaiveDate, NaiveTime};

/// Display format: numeric year, abbreviated month, two-digit day.
///
/// Pages are rendered ahead of time, so there is no reader locale to follow.
/// Month names are always en-US, independent of `[base] language`.
///
/// `2025-08-10` → `Aug 10, 2025`
const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Machine-readable format used in `<time datetime>` and sitemaps.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Format a post date for humans.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a post date as `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Format a post date as an RFC 2822 timestamp at midnight UTC.
pub fn rfc2822_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc2822()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(ymd(2025, 8, 10)), "Aug 10, 2025");
        assert_eq!(display_date(ymd(2025, 7, 22)), "Jul 22, 2025");
    }

    #[test]
    fn test_display_date_pads_day() {
        assert_eq!(display_date(ymd(2025, 7, 5)), "Jul 05, 2025");
    }

    #[test]
    fn test_display_date_all_months() {
        let months = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        for (index, name) in months.iter().enumerate() {
            let formatted = display_date(ymd(2024, index as u32 + 1, 15));
            assert!(formatted.starts_with(name), "{formatted} should start with {name}");
        }
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date(ymd(2025, 6, 28)), "2025-06-28");
    }

    #[test]
    fn test_rfc2822_date() {
        let formatted = rfc2822_date(ymd(2025, 8, 10));
        assert_eq!(formatted, "Sun, 10 Aug 2025 00:00:00 +0000");
    }
}
