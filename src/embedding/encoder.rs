use std::sync::Arc;

use super::error::EmbeddingError;

/// Maps texts to fixed-width vectors.
///
/// Implementations must be deterministic for identical input and safe for concurrent
/// read-only use; the engine shares one encoder across all requests without locking.
pub trait TextEncoder: Send + Sync {
    /// Encodes each text into one vector of length [`dimension`](Self::dimension).
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Native output width.
    fn dimension(&self) -> usize;

    /// `true` when vectors come from a placeholder rather than a trained model.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<T: TextEncoder + ?Sized> TextEncoder for Arc<T> {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).encode(texts)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}
