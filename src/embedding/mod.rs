//! Embedding + model utilities.
//!
//! - [`sbert`] provides sentence embeddings.
//! - [`similarity`] turns them into the skill-similarity axis used by
//!   [`crate::matchmaker`].

/// BERT encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod encoder;
mod error;
/// Sentence embedder.
pub mod sbert;
/// Skill similarity service.
pub mod similarity;
/// Tokenizer loading helpers.
pub mod utils;

pub use encoder::TextEncoder;
pub use error::EmbeddingError;
pub use sbert::{SBERT_EMBEDDING_DIM, SBERT_MAX_SEQ_LEN, SbertConfig, SbertEmbedder};
pub use similarity::{SimilarityService, cosine_similarity};
