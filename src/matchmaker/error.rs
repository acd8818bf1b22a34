use thiserror::Error;

use crate::config::ConfigError;
use crate::embedding::EmbeddingError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
/// Errors surfaced by the orchestrator.
///
/// Bad domain data never produces one of these; scoring degrades instead.
pub enum MatchError {
    /// The candidate list names the same internship twice.
    #[error("duplicate internship id in candidate list: '{id}'")]
    DuplicateInternship { id: String },

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Convenience result type for orchestrator operations.
pub type MatchResult<T> = Result<T, MatchError>;
