//! Conversions between CNEOS date strings and `chrono` date-times.

use chrono::{NaiveDateTime, ParseResult};

/// Calendar-date format used by the CNEOS close-approach API (`2020-Jan-01 12:30`).
pub const CAD_DATETIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Format used for every date-time written to output files.
pub const OUTPUT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a CNEOS calendar date string such as `1900-Jan-01 00:11`.
///
/// # Errors
///
/// Returns the `chrono` parse error when the string does not match
/// [`CAD_DATETIME_FORMAT`].
pub fn cd_to_datetime(calendar_date: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(calendar_date.trim(), CAD_DATETIME_FORMAT)
}

/// Render a date-time as `YYYY-MM-DD HH:MM`.
pub fn datetime_to_str(time: &NaiveDateTime) -> String {
    time.format(OUTPUT_DATETIME_FORMAT).to_string()
}
