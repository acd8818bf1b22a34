use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
/// Errors from arm estimation and updates.
pub enum BanditError {
    /// `A` could not be inverted.
    #[error("arm matrix is singular")]
    SingularMatrix,

    #[error("context dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("reward must be finite, got {value}")]
    InvalidReward { value: f64 },

    #[error("arm store error: {0}")]
    Storage(#[from] StorageError),

    /// The arm was saved; only the interaction log append failed.
    #[error("arm saved but interaction log append failed: {source}")]
    LogAppend {
        #[source]
        source: StorageError,
    },
}

/// Convenience result type for bandit operations.
pub type BanditResult<T> = Result<T, BanditError>;
