use serde::{Deserialize, Serialize};

/// Result of [`Matchmaker::health_check`](super::Matchmaker::health_check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// `"healthy"` or `"degraded"`.
    pub status: String,
    /// `"model"` or `"stub"`.
    pub embedder: String,
    /// Similarity of a fixed probe pair.
    pub probe_similarity: f32,
    /// `"ready"` or `"unavailable"`.
    pub arm_store: String,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
