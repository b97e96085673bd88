//! Calendar date type and the year/month arithmetic used by lease schedules.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Anniversary arithmetic (`add_years`) and day stepping
//! - `months_spanned`: the number of calendar months an inclusive range touches
//!
//! # Examples
//!
//! ```
//! use lease_core::types::time::{months_spanned, Date};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 12, 31).unwrap();
//!
//! assert_eq!(months_spanned(start, end).unwrap(), 36);
//! assert_eq!(start.add_years(1).unwrap(), Date::from_ymd(2025, 1, 1).unwrap());
//! ```

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use lease_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use lease_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use lease_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// assert!(Date::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the same calendar day `years` years later.
    ///
    /// February 29th maps to February 28th in non-leap target years.
    ///
    /// # Examples
    ///
    /// ```
    /// use lease_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
    /// assert_eq!(leap.add_years(4).unwrap(), Date::from_ymd(2028, 2, 29).unwrap());
    /// ```
    pub fn add_years(self, years: u32) -> Result<Self, DateError> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| DateError::Overflow(format!("{} years is too many months", years)))?;
        self.add_months(months)
    }

    /// Returns the date `months` calendar months later, clamped to month end.
    pub fn add_months(self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("adding {} months to {}", months, self)))
    }

    /// Returns the following calendar day.
    pub fn next_day(self) -> Result<Self, DateError> {
        self.0
            .succ_opt()
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("no day after {}", self)))
    }

    /// Returns the preceding calendar day.
    pub fn previous_day(self) -> Result<Self, DateError> {
        self.0
            .pred_opt()
            .map(Date)
            .ok_or_else(|| DateError::Overflow(format!("no day before {}", self)))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Counts the calendar months touched by the inclusive range `[start, end]`.
///
/// A trailing partial month counts as a whole month, so a range that ends the
/// day before an anniversary spans an exact number of months.
/// Returns 0 when `end < start`.
///
/// # Examples
///
/// ```
/// use lease_core::types::time::{months_spanned, Date};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
///
/// // Same day: one partial month
/// assert_eq!(months_spanned(start, start).unwrap(), 1);
/// // Half a year
/// let mid = Date::from_ymd(2024, 6, 30).unwrap();
/// assert_eq!(months_spanned(start, mid).unwrap(), 6);
/// // One day past the anniversary spills into a thirteenth month
/// let over = Date::from_ymd(2025, 1, 1).unwrap();
/// assert_eq!(months_spanned(start, over).unwrap(), 13);
/// ```
pub fn months_spanned(start: Date, end: Date) -> Result<u32, DateError> {
    if end < start {
        return Ok(0);
    }

    let exclusive = end.next_day()?;
    let raw = (exclusive.year() - start.year()) * 12 + exclusive.month() as i32
        - start.month() as i32;
    let mut months = raw.max(0) as u32;

    while months > 0 && start.add_months(months)? > exclusive {
        months -= 1;
    }
    if start.add_months(months)? < exclusive {
        months += 1;
    }

    Ok(months)
}
