//! # lease_core: Foundation types for leasebook
//!
//! ## Layer 1 (Foundation) Role
//!
//! lease_core is the bottom layer of the workspace, providing:
//! - Calendar dates with anniversary arithmetic (`types::time`)
//! - Monetary amounts in integer cents (`types::money`)
//! - Error types: `DateError`, `MoneyError` (`types::error`)
//!
//! It has no dependency on other leasebook crates. External dependencies are
//! kept to chrono (date arithmetic), thiserror, and optional serde.
//!
//! ## Usage Examples
//!
//! ```rust
//! use lease_core::types::{Date, Money};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let next_year = start.add_years(1).unwrap();
//! assert_eq!(next_year - start, 366);
//!
//! let rent: Money = "2,000.00".parse().unwrap();
//! assert_eq!(rent.cents(), 200_000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `Date` (ISO 8601) and `Money` (cents)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod types;
