//! Core date, money, and error types.
//!
//! This module provides:
//! - `time`: Calendar `Date` with anniversary arithmetic and month counting
//! - `money`: Integer-cent `Money`
//! - `error`: Structured error types for date and money operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`months_spanned`] from `time`
//! - [`Money`] from `money`
//! - [`DateError`], [`MoneyError`] from `error`

pub mod error;
pub mod money;
pub mod time;

pub use error::{DateError, MoneyError};
pub use money::Money;
pub use time::{months_spanned, Date};
