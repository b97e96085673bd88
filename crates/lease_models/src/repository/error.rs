//! Repository error types.

use super::RecordId;
use thiserror::Error;

/// Errors raised by repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record with the given id.
    #[error("No {collection} record with id {id}")]
    NotFound {
        /// Collection name.
        collection: &'static str,
        /// The missing id.
        id: RecordId,
    },

    /// A record with the given id already exists.
    #[error("A {collection} record with id {id} already exists")]
    Duplicate {
        /// Collection name.
        collection: &'static str,
        /// The clashing id.
        id: RecordId,
    },

    /// A saved id is beyond the largest id the repository hands out.
    #[error("{collection} id {id} is out of range")]
    IdOutOfRange {
        /// Collection name.
        collection: &'static str,
        /// The rejected id.
        id: RecordId,
    },

    /// The record has no id to restore or update under.
    #[error("{collection} record has no id")]
    Unassigned {
        /// Collection name.
        collection: &'static str,
    },
}
