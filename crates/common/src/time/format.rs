//! Human-readable date formatting
//!
//! Table views display dates as "May 15, 2023" rather than ISO form.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a date for display.
///
/// # Examples
///
/// ```
/// use trackboard_common::time::format_display_date;
///
/// let date = "2023-05-15".parse().unwrap();
/// assert_eq!(format_display_date(date), "May 15, 2023");
/// ```
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp for display, date part only.
pub fn format_display_datetime(timestamp: DateTime<Utc>) -> String {
    format_display_date(timestamp.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_days_are_unpadded() {
        let date: NaiveDate = "2024-01-05".parse().expect("valid date");
        assert_eq!(format_display_date(date), "Jan 5, 2024");
    }

    #[test]
    fn datetime_formats_date_part() {
        let ts: DateTime<Utc> = "2023-11-30T22:15:00Z".parse().expect("valid timestamp");
        assert_eq!(format_display_datetime(ts), "Nov 30, 2023");
    }
}
