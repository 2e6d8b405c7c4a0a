//! Canonical date helpers.
//!
//! Every date that crosses the query string travels as `yyyy-MM-dd` text.
//! These helpers convert between that text and [`jiff::civil::Date`] and do
//! the whole-day arithmetic the chain resolver needs. No time zones are
//! involved beyond asking the system zone what "today" is.

use std::sync::LazyLock;

use jiff::{civil::Date, Span, Zoned};
use regex::Regex;

use crate::error::{HizukeError, Result};

static CANONICAL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4,})-(\d{2})-(\d{2})$").expect("canonical date pattern is valid")
});

/// Returns true when `text` has the `yyyy-MM-dd` shape (four or more year
/// digits), regardless of whether the day exists.
pub fn is_date_shaped(text: &str) -> bool {
    CANONICAL_DATE.is_match(text)
}

/// Parses `yyyy-MM-dd` text into a civil date.
///
/// # Errors
///
/// Returns [`HizukeError::InvalidDate`] when the text is not date-shaped or
/// names a day that does not exist (`2024-02-30`, `2024-13-01`). Impossible
/// days are rejected rather than rolled over.
///
/// # Examples
///
/// ```rust
/// use hizuke_core::date::{format_canonical, parse_canonical};
///
/// let date = parse_canonical("2024-02-29").unwrap();
/// assert_eq!(format_canonical(date), "2024-02-29");
/// assert!(parse_canonical("2023-02-29").is_err());
/// ```
pub fn parse_canonical(text: &str) -> Result<Date> {
    let captures = CANONICAL_DATE
        .captures(text)
        .ok_or_else(|| HizukeError::invalid_date(text, "expected yyyy-MM-dd"))?;

    let year: i16 = captures[1]
        .parse()
        .map_err(|_| HizukeError::invalid_date(text, "year out of range"))?;
    // Two-digit captures always fit in i8.
    let month: i8 = captures[2]
        .parse()
        .map_err(|_| HizukeError::invalid_date(text, "month out of range"))?;
    let day: i8 = captures[3]
        .parse()
        .map_err(|_| HizukeError::invalid_date(text, "day out of range"))?;

    Date::new(year, month, day).map_err(|e| HizukeError::invalid_date(text, e))
}

/// Formats a date as `yyyy-MM-dd`, always ten characters for years 0..=9999.
pub fn format_canonical(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}

/// Formats a date as zero-padded `MM/dd`, the form used in rendered lines.
pub fn format_month_day(date: Date) -> String {
    date.strftime("%m/%d").to_string()
}

/// Adds `days` calendar days to `date`, rolling over months and years.
/// Negative values move backward.
///
/// # Errors
///
/// Returns [`HizukeError::DateOutOfRange`] when the result falls outside the
/// years -9999..=9999.
pub fn add_days(date: Date, days: i64) -> Result<Date> {
    let out_of_range = || HizukeError::DateOutOfRange {
        date: format_canonical(date),
        days,
    };
    let span = Span::new().try_days(days).map_err(|_| out_of_range())?;
    date.checked_add(span).map_err(|_| out_of_range())
}

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}
