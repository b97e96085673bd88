//! Schedule generation error types.

use lease_core::types::{Date, DateError, MoneyError};
use thiserror::Error;

/// Errors that can occur while building a rent schedule.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// Lease input that must be rejected before a schedule can be built.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// End date precedes start date.
    #[error("End date {end} is before start date {start}")]
    InvalidDateRange {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
    },

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },

    /// Rent escalation left the representable range.
    #[error("Rent overflow: {0}")]
    RentOverflow(#[from] MoneyError),
}

impl ScheduleError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        match err {
            DateError::Overflow(reason) => ScheduleError::DateOverflow { reason },
            other => ScheduleError::InvalidInput(other.to_string()),
        }
    }
}
