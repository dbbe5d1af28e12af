//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value failed validation (phone, birthday or name)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is filed under the requested name
    #[error("No record found for name: {0}")]
    NoneRecordFound(String),
}

/// Errors that can occur while loading or saving an address book snapshot.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot is well-formed JSON but not something we can load
    #[error("Unsupported snapshot: {0}")]
    Snapshot(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
