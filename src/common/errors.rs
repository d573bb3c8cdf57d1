use std::path::PathBuf;

use thiserror::Error;

use crate::policy::types::{MAX_RETENTION_DAYS, MIN_RETENTION_DAYS};

/// Typed errors for the policy store and its persistence backend.
/// We use `anyhow` at the CLI top level, but the store reports
/// validation failures precisely so callers can react per kind.

#[derive(Debug, Error)]
pub enum PolicyError {
    /// No folder was selected for tracking
    #[error("no folder selected")]
    MissingSelection,

    /// Retention period outside the allowed window
    #[error(
        "retention must be between {min} and {max} days (got {days})",
        min = MIN_RETENTION_DAYS,
        max = MAX_RETENTION_DAYS
    )]
    OutOfRange { days: i64 },

    /// Operation referenced a folder id that is not tracked
    #[error("folder '{id}' is not tracked")]
    NotFound { id: String },

    /// Folder is already under auto-destroy tracking
    #[error("folder '{id}' is already tracked")]
    AlreadyTracked { id: String },

    /// The settings could not be written back to storage
    #[error("failed to persist auto-destroy settings")]
    PersistenceFailure {
        #[source]
        source: KvError,
    },
}

impl From<KvError> for PolicyError {
    fn from(source: KvError) -> Self {
        PolicyError::PersistenceFailure { source }
    }
}

/// Errors from the key-value persistence backend.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode value: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
}
