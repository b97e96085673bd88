//! Persistence seam for lease records.
//!
//! Every collection (properties, tenants, leases, payments) is reached through
//! the same [`Repository`] interface, so storage can be swapped without
//! touching the schedule builder or the lookups in [`LeaseBook`].
//!
//! # Examples
//!
//! ```
//! use lease_models::records::{PersonName, Tenant};
//! use lease_models::repository::{InMemoryRepository, Repository};
//!
//! let mut tenants = InMemoryRepository::<Tenant>::new();
//! let id = tenants.add(Tenant::new(PersonName::new("Jane", "Doe")));
//!
//! assert_eq!(tenants.get(id).unwrap().name.display_name(), "Jane Doe");
//! assert_eq!(tenants.list().len(), 1);
//! ```

mod book;
mod error;
mod memory;

pub use book::{BookError, LeaseBook};
pub use error::RepositoryError;
pub use memory::InMemoryRepository;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored record, unique within its collection.
///
/// `RecordId::UNASSIGNED` (zero) marks a record that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Id of a record that has not been added to a repository.
    pub const UNASSIGNED: RecordId = RecordId(0);

    /// Largest saved id a repository will restore.
    pub const MAX: RecordId = RecordId(i64::MAX as u64);

    /// Creates an id from its raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        RecordId(raw)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns whether the id was assigned by a repository.
    #[inline]
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(RecordId)
    }
}

/// A storable entity with a repository-assigned id.
pub trait Record: Clone {
    /// Collection name used in errors and logs.
    const COLLECTION: &'static str;

    /// Returns the record's id.
    fn id(&self) -> RecordId;

    /// Replaces the record's id.
    fn set_id(&mut self, id: RecordId);
}

/// Storage for one collection of records.
///
/// `add` assigns fresh ids; `restore` keeps the id a record already carries
/// (used when loading previously saved data). Ids are never reused.
pub trait Repository<T: Record> {
    /// Returns the record with `id`.
    fn get(&self, id: RecordId) -> Result<T, RepositoryError>;

    /// Returns all records in ascending id order.
    fn list(&self) -> Vec<T>;

    /// Stores `record` under a newly assigned id and returns that id.
    fn add(&mut self, record: T) -> RecordId;

    /// Stores `record` under the id it already carries.
    ///
    /// Ids above [`RecordId::MAX`] are rejected.
    fn restore(&mut self, record: T) -> Result<(), RepositoryError>;

    /// Replaces the stored record that has the same id.
    fn update(&mut self, record: T) -> Result<(), RepositoryError>;

    /// Removes and returns the record with `id`.
    fn remove(&mut self, id: RecordId) -> Result<T, RepositoryError>;

    /// Returns the records matching `predicate` in ascending id order.
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.list().into_iter().filter(|r| predicate(r)).collect()
    }

    /// Returns whether a record with `id` exists.
    fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_ok()
    }

    /// Number of stored records.
    fn len(&self) -> usize {
        self.list().len()
    }

    /// Returns whether the repository is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_basics() {
        assert!(!RecordId::UNASSIGNED.is_assigned());
        assert_eq!(RecordId::default(), RecordId::UNASSIGNED);
        assert!(RecordId::new(7).is_assigned());
        assert_eq!(RecordId::new(7).get(), 7);
        assert!(RecordId::new(2) > RecordId::new(1));
        assert!(RecordId::MAX.is_assigned());
    }

    #[test]
    fn test_record_id_parse() {
        assert_eq!("12".parse::<RecordId>().unwrap(), RecordId::new(12));
        assert_eq!("#12".parse::<RecordId>().unwrap(), RecordId::new(12));
        assert!("twelve".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_record_id_serde() {
        assert_eq!(serde_json::to_string(&RecordId::new(3)).unwrap(), "3");
    }
}
