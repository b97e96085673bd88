//! Rent escalation schedules.
//!
//! This module provides:
//! - [`LeaseTerms`]: Start/end dates, first-year rent, and escalation rules
//! - [`EscalationRule`]: Flat or percentage year-over-year increase
//! - [`build_schedule`]: The pure function turning terms into a [`RentSchedule`]
//! - [`ScheduleBuilder`]: Builder pattern for assembling terms field by field
//! - [`ScheduleRow`]: One lease year at a fixed monthly rent
//!
//! # Examples
//!
//! ```
//! use lease_models::escalation::{EscalationRule, ScheduleBuilder, Term};
//! use lease_core::types::{Date, Money};
//!
//! let schedule = ScheduleBuilder::new()
//!     .start(Date::from_ymd(2024, 1, 1).unwrap())
//!     .end(Date::from_ymd(2026, 12, 31).unwrap())
//!     .monthly_rent(Money::from_cents(200_000))
//!     .annual_increase(EscalationRule::Percent(5.0))
//!     .option_years(2)
//!     .option_increase(EscalationRule::Percent(3.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schedule.len(), 5);
//! assert_eq!(schedule.rows()[3].term, Term::OptionYear);
//! ```

mod error;
mod row;
mod rule;
mod schedule;
mod terms;

pub use error::ScheduleError;
pub use row::{ScheduleRow, Term};
pub use rule::EscalationRule;
pub use schedule::{build_schedule, RentSchedule, ScheduleBuilder};
pub use terms::LeaseTerms;
