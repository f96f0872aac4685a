//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute so that bad
//! dates and bounds are rejected at parse time with a clear message.

use chrono::NaiveDate;

/// Date format accepted on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn validate_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("'{}' is not a valid date (expected YYYY-MM-DD)", s))
}

/// Parse a finite, non-negative number for a distance, velocity or
/// diameter bound.
pub fn validate_bound(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !value.is_finite() {
        return Err(format!("'{}' must be a finite number", s));
    }
    if value < 0.0 {
        return Err(format!("'{}' must not be negative", s));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_validate_date_valid() {
        assert_eq!(
            validate_date("2020-01-01"),
            Ok(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        );
    }

    #[rstest]
    #[case::wrong_order("01-01-2020")]
    #[case::month_name("2020-Jan-01")]
    #[case::impossible("2021-02-29")]
    #[case::empty("")]
    fn test_validate_date_invalid(#[case] input: &str) {
        assert!(validate_date(input).is_err());
    }

    #[rstest]
    #[case::zero("0", 0.0)]
    #[case::fraction("0.05", 0.05)]
    #[case::padded(" 12.5 ", 12.5)]
    fn test_validate_bound_valid(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(validate_bound(input), Ok(expected));
    }

    #[rstest]
    #[case::negative("-0.1", "negative")]
    #[case::text("far", "not a number")]
    #[case::infinite("inf", "finite")]
    #[case::nan("NaN", "finite")]
    fn test_validate_bound_invalid(#[case] input: &str, #[case] message: &str) {
        let err = validate_bound(input).unwrap_err();
        assert!(err.contains(message), "unexpected message: {}", err);
    }
}
