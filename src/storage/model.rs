//! Persisted record types.

use chrono::{DateTime, Utc};
use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};

use super::error::{StorageError, StorageResult};

/// One bandit arm as stored on disk.
///
/// `a` is the `dim × dim` design matrix in row-major order, `b` the reward-weighted
/// context sum. Stored as `rkyv` bytes.
#[derive(Archive, RkyvDeserialize, RkyvSerialize, Debug, PartialEq, Clone)]
pub struct ArmRecord {
    pub internship_id: String,
    pub dim: u32,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    /// Unix timestamp (seconds) of the last write.
    pub last_updated: i64,
}

impl ArmRecord {
    /// Checks that the record belongs to `internship_id` and that its buffers match `dim`.
    pub fn validate(&self, internship_id: &str) -> StorageResult<()> {
        if self.internship_id != internship_id {
            return Err(StorageError::KeyMismatch {
                expected: internship_id.to_string(),
                actual: self.internship_id.clone(),
            });
        }

        let dim = self.dim as usize;
        if dim == 0 {
            return Err(self.corrupt("zero dimension".to_string()));
        }
        if self.a.len() != dim * dim {
            return Err(self.corrupt(format!(
                "matrix has {} entries, expected {}",
                self.a.len(),
                dim * dim
            )));
        }
        if self.b.len() != dim {
            return Err(self.corrupt(format!(
                "vector has {} entries, expected {dim}",
                self.b.len()
            )));
        }
        if self.a.iter().chain(&self.b).any(|v| !v.is_finite()) {
            return Err(self.corrupt("non-finite parameter".to_string()));
        }

        Ok(())
    }

    fn corrupt(&self, reason: String) -> StorageError {
        StorageError::Corrupt {
            key: self.internship_id.clone(),
            reason,
        }
    }
}

/// One feedback event, appended to the interaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Auto-incrementing, starting at 1.
    pub id: u64,
    pub student_id: String,
    pub internship_id: String,
    pub context: Vec<f64>,
    pub reward: f64,
    pub timestamp: DateTime<Utc>,
}
