//! Lease terms that drive a rent schedule.

use lease_core::types::{months_spanned, Date, Money};
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::rule::EscalationRule;

/// The rent-relevant terms of a lease.
///
/// A lease without an end date runs for exactly one year. Option years are
/// appended after the base term; a negative count means none.
///
/// # Examples
///
/// ```
/// use lease_models::escalation::{EscalationRule, LeaseTerms};
/// use lease_core::types::{Date, Money};
///
/// let terms = LeaseTerms::new(Date::from_ymd(2024, 1, 1).unwrap(), Money::from_cents(200_000))
///     .with_end_date(Date::from_ymd(2026, 12, 31).unwrap())
///     .with_annual_increase(EscalationRule::Percent(5.0));
///
/// assert_eq!(terms.base_years().unwrap(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseTerms {
    /// First day of the lease.
    pub start_date: Date,
    /// Last day of the base term, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    /// Monthly rent in the first lease year.
    pub monthly_rent: Money,
    /// Escalation applied between base-term years.
    #[serde(default)]
    pub annual_increase: EscalationRule,
    /// Number of option years appended after the base term.
    #[serde(default)]
    pub option_years: i32,
    /// Escalation applied entering and between option years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_increase: Option<EscalationRule>,
}

impl LeaseTerms {
    /// Creates one-year terms with no escalation and no option years.
    pub fn new(start_date: Date, monthly_rent: Money) -> Self {
        Self {
            start_date,
            end_date: None,
            monthly_rent,
            annual_increase: EscalationRule::none(),
            option_years: 0,
            option_increase: None,
        }
    }

    /// Sets the last day of the base term.
    pub fn with_end_date(mut self, end_date: Date) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the base-term escalation rule.
    pub fn with_annual_increase(mut self, rule: EscalationRule) -> Self {
        self.annual_increase = rule;
        self
    }

    /// Appends option years escalating by `rule`.
    pub fn with_option_years(mut self, years: i32, rule: EscalationRule) -> Self {
        self.option_years = years;
        self.option_increase = Some(rule);
        self
    }

    /// Checks the terms before a schedule is built.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for negative rent or an invalid escalation rule
    /// - `InvalidDateRange` when the end date precedes the start date
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.monthly_rent.is_negative() {
            return Err(ScheduleError::invalid_input(format!(
                "monthly rent {} is negative",
                self.monthly_rent
            )));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ScheduleError::InvalidDateRange {
                    start: self.start_date,
                    end,
                });
            }
        }
        self.annual_increase.validate()?;
        if let Some(rule) = &self.option_increase {
            rule.validate()?;
        }
        Ok(())
    }

    /// Option years with negative counts treated as zero.
    #[inline]
    pub fn effective_option_years(&self) -> u32 {
        self.option_years.max(0) as u32
    }

    /// The rule used for option years, falling back to the annual rule.
    #[inline]
    pub fn option_rule(&self) -> EscalationRule {
        self.option_increase.unwrap_or(self.annual_increase)
    }

    /// Number of lease years in the base term (at least one).
    ///
    /// Computed as `ceil(months / 12)` over the months spanned by the
    /// inclusive base term.
    pub fn base_years(&self) -> Result<u32, ScheduleError> {
        let Some(end) = self.end_date else {
            return Ok(1);
        };
        let months = months_spanned(self.start_date, end)?;
        Ok(months.div_ceil(12).max(1))
    }
}
