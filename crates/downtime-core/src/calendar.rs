//! Calendar helpers over chrono: weekday-name resolution, date decoding,
//! whole-day bounds.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{ExclusionError, Result};

/// Resolve a weekday name to a `chrono::Weekday`.
///
/// Accepts full names and three-letter abbreviations, case-insensitive
/// ("monday", "Mon", "FRIDAY").
pub(crate) fn day_of_week(name: &str) -> Option<Weekday> {
    name.parse().ok()
}

/// Decode a `YYYY-MM-DD` date token.
pub(crate) fn parse_date(token: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .map_err(|_| ExclusionError::Date(token.to_owned()))
}

/// The whole-day bounds `[date 00:00:00, date+1day 00:00:00)`.
pub(crate) fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + Duration::days(1))
}
