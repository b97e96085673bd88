//! Record migration error types.

use thiserror::Error;

use crate::escalation::ScheduleError;

/// Errors raised while migrating loose record shapes into canonical records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    /// A required field is absent or blank.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but unusable.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Field name as it appears in the source data.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// Lease terms were rejected.
    #[error("Invalid lease terms: {0}")]
    Terms(#[from] ScheduleError),

    /// Source data is not well-formed JSON of the expected shape.
    #[error("Malformed record data: {0}")]
    Malformed(String),
}

impl RecordError {
    /// Creates an `InvalidField` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Malformed(err.to_string())
    }
}
