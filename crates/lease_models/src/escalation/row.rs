//! A single lease-year row of a rent schedule.

use lease_core::types::{Date, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the lease a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// The original lease duration.
    Base,
    /// A year appended after the base term.
    OptionYear,
}

impl Term {
    /// Short label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            Term::Base => "base",
            Term::OptionYear => "option",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One period of a rent schedule at a fixed monthly rent.
///
/// Both `period_start` and `period_end` are inclusive.
///
/// # Examples
///
/// ```
/// use lease_models::escalation::{ScheduleRow, Term};
/// use lease_core::types::{Date, Money};
///
/// let row = ScheduleRow::new(
///     Term::Base,
///     1,
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 12, 31).unwrap(),
///     Money::from_cents(200_000),
/// );
///
/// assert!(row.contains(Date::from_ymd(2024, 12, 31).unwrap()));
/// assert_eq!(row.days(), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Base term or option year.
    pub term: Term,
    /// 1-based year number within `term`.
    pub year: u32,
    /// First day of the period.
    pub period_start: Date,
    /// Last day of the period.
    pub period_end: Date,
    /// Monthly rent in force for the whole period.
    pub monthly_rent: Money,
}

impl ScheduleRow {
    /// Creates a row.
    #[inline]
    pub fn new(term: Term, year: u32, period_start: Date, period_end: Date, monthly_rent: Money) -> Self {
        Self {
            term,
            year,
            period_start,
            period_end,
            monthly_rent,
        }
    }

    /// Returns whether `date` falls within the period (inclusive on both ends).
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.period_start && date <= self.period_end
    }

    /// Number of calendar days covered by the period.
    #[inline]
    pub fn days(&self) -> i64 {
        self.period_end - self.period_start + 1
    }
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year {}: {} to {} at {}/month",
            self.term, self.year, self.period_start, self.period_end, self.monthly_rent
        )
    }
}
