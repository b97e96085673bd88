//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing, and arithmetic
//! - `MoneyError`: Errors from monetary conversion and arithmetic

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `Overflow`: Date arithmetic left the representable range
///
/// # Examples
/// ```
/// use lease_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Date arithmetic overflowed the supported calendar range.
    #[error("Date arithmetic overflow: {0}")]
    Overflow(String),
}

/// Money-related errors.
///
/// # Examples
/// ```
/// use lease_core::types::MoneyError;
///
/// let err = MoneyError::NonFinite(f64::NAN);
/// assert!(format!("{}", err).contains("not a finite amount"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    /// Amount is NaN or infinite.
    #[error("{0} is not a finite amount")]
    NonFinite(f64),

    /// Amount does not fit in the cent representation.
    #[error("Amount {0} is out of range")]
    OutOfRange(f64),

    /// Integer cent arithmetic overflowed.
    #[error("Money arithmetic overflow")]
    Overflow,

    /// Failed to parse an amount string.
    #[error("Money parse error: {0}")]
    ParseError(String),
}
