//! Domain Errors
//!
//! Failures raised while persisting records. Field validation problems are
//! not errors; they are reported through an error map.

use thiserror::Error;

use super::field::Field;

/// Common result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Record-level errors
#[derive(Error, Debug)]
pub enum RecordError {
    /// A stored record already uses this email or phone number
    #[error("a record with the same {field} already exists")]
    Duplicate {
        /// The first field found to clash
        field: Field,
    },

    /// The backing store refused the write
    #[error("failed to save records: {0}")]
    Storage(#[from] StorageError),

    /// The collection could not be encoded
    #[error("failed to serialize records: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by a key-value backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage is available (e.g. disabled by the browser)
    #[error("storage is unavailable")]
    Unavailable,

    /// The backend rejected the write (e.g. quota exceeded)
    #[error("write to '{key}' rejected: {message}")]
    WriteRejected {
        key: String,
        message: String,
    },
}
