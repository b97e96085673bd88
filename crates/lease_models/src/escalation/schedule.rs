//! RentSchedule, ScheduleBuilder, and the schedule construction routine.

use lease_core::types::{Date, Money};
use serde::Serialize;
use tracing::debug;

use super::error::ScheduleError;
use super::row::{ScheduleRow, Term};
use super::rule::EscalationRule;
use super::terms::LeaseTerms;

/// The ordered rent timeline of a lease.
///
/// Base-term rows come first, followed by option-year rows. Rows are
/// contiguous: each starts the day after the previous one ends. A schedule
/// always holds at least one row.
///
/// # Examples
///
/// ```
/// use lease_models::escalation::{build_schedule, EscalationRule, LeaseTerms};
/// use lease_core::types::{Date, Money};
///
/// let terms = LeaseTerms::new(Date::from_ymd(2024, 1, 1).unwrap(), Money::from_cents(200_000))
///     .with_end_date(Date::from_ymd(2026, 12, 31).unwrap())
///     .with_annual_increase(EscalationRule::Percent(5.0));
///
/// let schedule = build_schedule(&terms).unwrap();
/// let rents: Vec<String> = schedule.iter().map(|r| r.monthly_rent.to_string()).collect();
/// assert_eq!(rents, ["2000.00", "2100.00", "2205.00"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RentSchedule {
    rows: Vec<ScheduleRow>,
}

impl RentSchedule {
    /// Returns all rows in order.
    #[inline]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Consumes the schedule, returning its rows.
    pub fn into_rows(self) -> Vec<ScheduleRow> {
        self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the schedule has no rows. Built schedules never do.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.rows.iter()
    }

    /// Rows belonging to the base term.
    pub fn base_rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|r| r.term == Term::Base)
    }

    /// Rows belonging to option years.
    pub fn option_rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|r| r.term == Term::OptionYear)
    }

    /// First day covered by the schedule.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.rows[0].period_start
    }

    /// Last day covered by the schedule.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.rows[self.rows.len() - 1].period_end
    }

    /// Monthly rent in the last row.
    #[inline]
    pub fn final_rent(&self) -> Money {
        self.rows[self.rows.len() - 1].monthly_rent
    }

    /// Returns the row covering `date`, if any.
    pub fn row_containing(&self, date: Date) -> Option<&ScheduleRow> {
        self.rows.iter().find(|r| r.contains(date))
    }

    /// Returns the monthly rent in force on `date`, if the schedule covers it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lease_models::escalation::{build_schedule, EscalationRule, LeaseTerms};
    /// use lease_core::types::{Date, Money};
    ///
    /// let terms = LeaseTerms::new(Date::from_ymd(2024, 1, 1).unwrap(), Money::from_cents(100_000))
    ///     .with_end_date(Date::from_ymd(2025, 12, 31).unwrap())
    ///     .with_annual_increase(EscalationRule::Flat(Money::from_cents(5_000)));
    /// let schedule = build_schedule(&terms).unwrap();
    ///
    /// assert_eq!(
    ///     schedule.rent_on(Date::from_ymd(2025, 3, 1).unwrap()),
    ///     Some(Money::from_cents(105_000))
    /// );
    /// assert_eq!(schedule.rent_on(Date::from_ymd(2026, 1, 1).unwrap()), None);
    /// ```
    pub fn rent_on(&self, date: Date) -> Option<Money> {
        self.row_containing(date).map(|r| r.monthly_rent)
    }
}

impl<'a> IntoIterator for &'a RentSchedule {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Builds the rent schedule for `terms`.
///
/// Base years number `max(1, ceil(months / 12))` over the inclusive base
/// term; the final base row is clamped to the end date. Option years follow
/// the day after the base term ends. Rent escalates before every row except
/// the very first: by the annual rule inside the base term, and by the option
/// rule for each option year, the first included.
///
/// # Errors
///
/// `InvalidInput` or `InvalidDateRange` when the terms fail validation;
/// `DateOverflow` or `RentOverflow` when arithmetic leaves the supported
/// range.
pub fn build_schedule(terms: &LeaseTerms) -> Result<RentSchedule, ScheduleError> {
    terms.validate()?;

    let base_years = terms.base_years()?;
    let option_years = terms.effective_option_years();
    debug!(
        start = %terms.start_date,
        base_years,
        option_years,
        "building rent schedule"
    );

    // Option years are unbounded input; reserve only what a real lease needs.
    let mut rows = Vec::with_capacity((base_years as usize + option_years as usize).min(64));
    let mut rent = terms.monthly_rent;
    let mut base_end = terms.start_date;

    for year in 1..=base_years {
        if year > 1 {
            rent = terms.annual_increase.apply(rent)?;
        }
        let period_start = terms.start_date.add_years(year - 1)?;
        let anniversary_eve = terms.start_date.add_years(year)?.previous_day()?;
        let period_end = match terms.end_date {
            Some(end) if end < anniversary_eve => end,
            _ => anniversary_eve,
        };
        rows.push(ScheduleRow::new(Term::Base, year, period_start, period_end, rent));
        base_end = period_end;
    }

    if option_years > 0 {
        let rule = terms.option_rule();
        let anchor = base_end.next_day()?;
        for year in 1..=option_years {
            rent = rule.apply(rent)?;
            let period_start = anchor.add_years(year - 1)?;
            let period_end = anchor.add_years(year)?.previous_day()?;
            rows.push(ScheduleRow::new(
                Term::OptionYear,
                year,
                period_start,
                period_end,
                rent,
            ));
        }
    }

    Ok(RentSchedule { rows })
}

/// Builder for constructing schedules field by field.
///
/// # Examples
///
/// ```
/// use lease_models::escalation::{EscalationRule, ScheduleBuilder};
/// use lease_core::types::{Date, Money};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 1, 1).unwrap())
///     .end(Date::from_ymd(2025, 12, 31).unwrap())
///     .monthly_rent(Money::from_cents(150_000))
///     .annual_increase(EscalationRule::Percent(3.0))
///     .option_years(1)
///     .option_increase(EscalationRule::Flat(Money::from_cents(10_000)))
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 3);
/// assert_eq!(schedule.final_rent(), Money::from_cents(164_500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    start_date: Option<Date>,
    end_date: Option<Date>,
    monthly_rent: Option<Money>,
    annual_increase: EscalationRule,
    option_years: i32,
    option_increase: Option<EscalationRule>,
}

impl ScheduleBuilder {
    /// Creates a builder with no escalation and no option years.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lease start date.
    pub fn start(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the last day of the base term.
    pub fn end(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the first-year monthly rent.
    pub fn monthly_rent(mut self, rent: Money) -> Self {
        self.monthly_rent = Some(rent);
        self
    }

    /// Sets the base-term escalation rule.
    pub fn annual_increase(mut self, rule: EscalationRule) -> Self {
        self.annual_increase = rule;
        self
    }

    /// Sets the number of option years.
    pub fn option_years(mut self, years: i32) -> Self {
        self.option_years = years;
        self
    }

    /// Sets the option-year escalation rule.
    pub fn option_increase(mut self, rule: EscalationRule) -> Self {
        self.option_increase = Some(rule);
        self
    }

    /// Assembles the lease terms without building a schedule.
    ///
    /// # Errors
    ///
    /// `MissingField` when the start date or monthly rent is unset.
    pub fn terms(self) -> Result<LeaseTerms, ScheduleError> {
        let start_date = self
            .start_date
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        let monthly_rent = self
            .monthly_rent
            .ok_or(ScheduleError::MissingField {
                field: "monthly_rent",
            })?;

        Ok(LeaseTerms {
            start_date,
            end_date: self.end_date,
            monthly_rent,
            annual_increase: self.annual_increase,
            option_years: self.option_years,
            option_increase: self.option_increase,
        })
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// `MissingField` for an unset start date or rent, plus every error of
    /// [`build_schedule`].
    pub fn build(self) -> Result<RentSchedule, ScheduleError> {
        build_schedule(&self.terms()?)
    }
}
