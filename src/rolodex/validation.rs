//! Field validation for rolodex.
//!
//! Valid phones:
//! - ASCII digits only
//! - 9 to 14 digits long
//!
//! Valid birthdays:
//! - `DD.MM.YYYY`, three dot-separated numeric segments
//! - Month between 1 and 12, year of exactly four digits
//! - Day within the length of that month (leap years give February 29 days)
//!
//! Valid emails look like `local@domain.tld`: letters, digits and `_.+-` before
//! the `@`, letters, digits and `-` in the first domain label, then at least one
//! dotted suffix.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const MIN_PHONE_DIGITS: usize = 9;
const MAX_PHONE_DIGITS: usize = 14;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("valid email regex")
});

/// Validates a phone number and returns it unchanged.
///
/// ```
/// use rolodex::validation::validate_phone;
///
/// assert!(validate_phone("380501234567").is_ok());
/// assert!(validate_phone("12345678").is_err());
/// assert!(validate_phone("+380501234567").is_err());
/// ```
pub fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    let all_digits = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit());
    if !all_digits || !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&raw.len()) {
        return Err(ValidationError::InvalidPhone(raw.to_string()));
    }
    Ok(raw.to_string())
}

/// Parses a `DD.MM.YYYY` birthday into a calendar date.
///
/// Checks run in a fixed order, so the first problem found is the one
/// reported: segment count, numeric segments, month range, year width, then
/// the day against the month length.
///
/// ```
/// use rolodex::validation::validate_birthday;
///
/// assert!(validate_birthday("29.02.2000").is_ok());
/// assert!(validate_birthday("29.02.1900").is_err());
/// assert!(validate_birthday("31.04.2020").is_err());
/// ```
pub fn validate_birthday(raw: &str) -> Result<NaiveDate, ValidationError> {
    let parts: Vec<&str> = raw.split('.').collect();
    let [day_str, month_str, year_str] = parts.as_slice() else {
        return Err(ValidationError::DateFormat);
    };
    if !is_numeric(day_str) || !is_numeric(month_str) || !is_numeric(year_str) {
        return Err(ValidationError::DateFormat);
    }

    let day = parse_segment(day_str)?;
    let month = parse_segment(month_str)?;
    let year = parse_segment(year_str)?;

    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange(month));
    }
    if year_str.len() != 4 || year == 0 {
        return Err(ValidationError::YearDigits);
    }

    let max = max_day(month, year);
    if !(1..=max).contains(&day) {
        return Err(ValidationError::DayOutOfRange { max });
    }

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(ValidationError::DateFormat)
}

/// Checks an email against the address pattern. Never fails.
pub fn validate_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

/// Number of days in `month` of `year`.
pub fn max_day(month: u32, year: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

fn parse_segment(segment: &str) -> Result<u32, ValidationError> {
    segment.parse().map_err(|_| ValidationError::DateFormat)
}

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Phone is not 9 to 14 ASCII digits
    #[error("The phone has to be {} to {} digits", MIN_PHONE_DIGITS, MAX_PHONE_DIGITS)]
    InvalidPhone(String),
    /// Birthday is not three numeric dot-separated segments
    #[error("Invalid date format. Use DD.MM.YYYY")]
    DateFormat,
    /// Birthday month is outside 1..=12
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange(u32),
    /// Birthday year is not four digits
    #[error("Year must have 4 digits")]
    YearDigits,
    /// Birthday day is outside the month
    #[error("Day must be between 1 and {max}")]
    DayOutOfRange { max: u32 },
    /// Email does not match the address pattern
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_phone_length_bounds() {
        assert!(validate_phone("123456789").is_ok());
        assert!(validate_phone("12345678901234").is_ok());
        assert!(validate_phone("12345678").is_err());
        assert!(validate_phone("123456789012345").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        assert!(validate_phone("050 123 4567").is_err());
        assert!(validate_phone("050-123-4567").is_err());
        assert!(validate_phone("０５０１２３４５６７").is_err());
    }

    proptest! {
        #[test]
        fn prop_accepts_valid_digit_strings(raw in "[0-9]{9,14}") {
            prop_assert_eq!(validate_phone(&raw), Ok(raw.clone()));
        }

        #[test]
        fn prop_rejects_wrong_length(raw in "[0-9]{0,8}|[0-9]{15,30}") {
            prop_assert!(validate_phone(&raw).is_err());
        }

        #[test]
        fn prop_rejects_any_non_digit(
            prefix in "[0-9]{4,6}",
            bad in "[^0-9]",
            suffix in "[0-9]{4,6}",
        ) {
            let raw = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(validate_phone(&raw).is_err());
        }
    }

    #[test]
    fn test_leap_year_birthdays() {
        assert_eq!(
            validate_birthday("29.02.2000"),
            Ok(NaiveDate::from_ymd_opt(2000, 2, 29).unwrap())
        );
        assert_eq!(
            validate_birthday("29.02.1900"),
            Err(ValidationError::DayOutOfRange { max: 28 })
        );
        assert!(validate_birthday("29.02.2024").is_ok());
        assert!(validate_birthday("29.02.2023").is_err());
    }

    #[test]
    fn test_thirty_day_months() {
        assert_eq!(
            validate_birthday("31.04.2020"),
            Err(ValidationError::DayOutOfRange { max: 30 })
        );
        assert!(validate_birthday("30.04.2020").is_ok());
        assert!(validate_birthday("31.12.2020").is_ok());
    }

    #[test]
    fn test_birthday_format_errors() {
        assert_eq!(validate_birthday("01-01-2000"), Err(ValidationError::DateFormat));
        assert_eq!(validate_birthday("01.01"), Err(ValidationError::DateFormat));
        assert_eq!(validate_birthday("01.01.2000.1"), Err(ValidationError::DateFormat));
        assert_eq!(validate_birthday("aa.01.2000"), Err(ValidationError::DateFormat));
        assert_eq!(validate_birthday("..2000"), Err(ValidationError::DateFormat));
    }

    #[test]
    fn test_birthday_range_errors() {
        assert_eq!(
            validate_birthday("01.13.2000"),
            Err(ValidationError::MonthOutOfRange(13))
        );
        assert_eq!(
            validate_birthday("01.00.2000"),
            Err(ValidationError::MonthOutOfRange(0))
        );
        assert_eq!(validate_birthday("01.01.99"), Err(ValidationError::YearDigits));
        assert_eq!(validate_birthday("01.01.20000"), Err(ValidationError::YearDigits));
        assert_eq!(validate_birthday("01.01.0000"), Err(ValidationError::YearDigits));
        assert_eq!(
            validate_birthday("00.01.2000"),
            Err(ValidationError::DayOutOfRange { max: 31 })
        );
    }

    #[test]
    fn test_month_checked_before_year() {
        assert_eq!(
            validate_birthday("01.13.99"),
            Err(ValidationError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn test_max_day() {
        assert_eq!(max_day(1, 2021), 31);
        assert_eq!(max_day(2, 2021), 28);
        assert_eq!(max_day(2, 2020), 29);
        assert_eq!(max_day(2, 2000), 29);
        assert_eq!(max_day(2, 2100), 28);
        assert_eq!(max_day(9, 2021), 30);
        assert_eq!(max_day(11, 2021), 30);
    }

    #[test]
    fn test_email_pattern() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last+tag@mail-host.co.uk"));
        assert!(validate_email("user_1@domain.io"));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("user@domain"));
        assert!(!validate_email("user@sub_domain.com"));
        assert!(!validate_email("us er@domain.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::InvalidPhone("1".into()).to_string(),
            "The phone has to be 9 to 14 digits"
        );
        assert_eq!(
            ValidationError::DayOutOfRange { max: 30 }.to_string(),
            "Day must be between 1 and 30"
        );
        assert_eq!(
            ValidationError::InvalidEmail("x".into()).to_string(),
            "Invalid email format: x"
        );
        assert_eq!(
            ValidationError::DateFormat.to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            ValidationError::MonthOutOfRange(13).to_string(),
            "Month must be between 1 and 12"
        );
        assert_eq!(ValidationError::YearDigits.to_string(), "Year must have 4 digits");
    }

    #[test]
    fn validation_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationError::YearDigits);
        assert_eq!(err.to_string(), "Year must have 4 digits");
        assert!(err.source().is_none());
    }
}
