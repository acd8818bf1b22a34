use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by arm stores.
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Stored bytes decoded but failed validation.
    #[error("corrupt record for '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    /// Record stored under one internship's key names another.
    #[error("record key mismatch: expected '{expected}', found '{actual}'")]
    KeyMismatch { expected: String, actual: String },

    #[error("storage path unavailable: {path}")]
    Unavailable { path: PathBuf },
}

/// Convenience result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
