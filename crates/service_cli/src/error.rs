//! CLI error types.

use lease_models::escalation::ScheduleError;
use lease_models::records::RecordError;
use lease_models::repository::BookError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: String,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Lease terms were rejected.
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// A saved record could not be migrated.
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// A lease book operation failed.
    #[error("Lease book error: {0}")]
    Book(#[from] BookError),

    /// Output could not be serialised.
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),

    /// Invalid combination of command-line arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("--lease conflicts with --start");
        assert!(err.to_string().contains("--lease conflicts"));

        let err = CliError::FileNotFound("book.json".to_string());
        assert_eq!(err.to_string(), "File not found: book.json");
    }

    #[test]
    fn test_from_schedule_error() {
        let err: CliError = ScheduleError::invalid_input("bad rent").into();
        assert!(matches!(err, CliError::Schedule(_)));
        assert!(err.to_string().contains("bad rent"));
    }
}
