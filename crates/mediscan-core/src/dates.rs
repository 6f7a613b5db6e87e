//! Expiry checks and calendar-date formatting for catalog records.
//!
//! Dates are compared at day granularity: parsing drops any time-of-day
//! component, so both sides of the comparison are effectively normalized to
//! midnight in the viewer's local zone.

use chrono::{Local, NaiveDate};

/// Parses the calendar-date prefix of an ISO date or RFC 3339 timestamp.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// True iff the date is strictly before `today`. A date equal to the
/// current day is not expired; absent or unparseable dates never are.
pub fn is_expired(raw: Option<&str>, today: NaiveDate) -> bool {
    match raw.and_then(parse_calendar_date) {
        Some(date) => date < today,
        None => false,
    }
}

/// [`is_expired`] against the viewer's local calendar day.
pub fn is_expired_now(raw: Option<&str>) -> bool {
    is_expired(raw, Local::now().date_naive())
}

/// Renders a long-form date ("December 31, 2024"), or the literal `"N/A"`
/// when the value is absent or unparseable.
pub fn format_long_date(raw: Option<&str>) -> String {
    match raw.and_then(parse_calendar_date) {
        // %-d drops the day's zero padding
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_is_not_expired() {
        let today = day(2025, 6, 15);
        assert!(!is_expired(Some("2025-06-15"), today));
    }

    #[test]
    fn test_yesterday_is_expired_regardless_of_time_of_day() {
        let today = day(2025, 6, 15);
        assert!(is_expired(Some("2025-06-14"), today));
        // A timestamp late on the previous day is still the previous day
        assert!(is_expired(Some("2025-06-14T23:59:59Z"), today));
    }

    #[test]
    fn test_future_date_is_not_expired() {
        let today = day(2025, 6, 15);
        assert!(!is_expired(Some("2026-01-01"), today));
    }

    #[test]
    fn test_absent_or_garbage_dates_never_expire() {
        let today = day(2025, 6, 15);
        assert!(!is_expired(None, today));
        assert!(!is_expired(Some(""), today));
        assert!(!is_expired(Some("soon"), today));
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(Some("2024-12-31")), "December 31, 2024");
        assert_eq!(format_long_date(Some("2025-03-05")), "March 5, 2025");
        assert_eq!(
            format_long_date(Some("2025-03-05T08:30:00Z")),
            "March 5, 2025"
        );
    }

    #[test]
    fn test_format_absent_date_is_na() {
        assert_eq!(format_long_date(None), "N/A");
        assert_eq!(format_long_date(Some("not a date")), "N/A");
    }
}
