//! Canonical lease records and migration from saved shapes.
//!
//! - [`Property`], [`Tenant`], [`LeaseRecord`], [`Payment`]: the
//!   only shapes the rest of the crate works with
//! - [`legacy`]: loose saved shapes and their one-time conversion

mod entities;
mod error;
pub mod legacy;
mod name;

pub use entities::{LeaseRecord, Payment, Property, Tenant};
pub use error::RecordError;
pub use legacy::{BookSnapshot, LegacyLease, LegacyPayment, LegacyProperty, LegacyRule, LegacyTenant};
pub use name::PersonName;
