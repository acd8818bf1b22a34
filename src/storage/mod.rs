//! Persistence for bandit arms and the feedback log.
//!
//! [`ArmStore`] is the key-value boundary the bandit talks to. Two implementations ship:
//! [`FileArmStore`] (one `rkyv` file per arm plus a JSON-lines interaction log) and
//! [`InMemoryArmStore`] for tests and ephemeral runs.

pub mod error;
pub mod file;
pub mod memory;
mod model;

pub use error::{StorageError, StorageResult};
pub use file::FileArmStore;
pub use memory::InMemoryArmStore;
pub use model::{ArchivedArmRecord, ArmRecord, InteractionRecord};

use std::sync::Arc;

/// Upsert-by-key store for arm parameters plus an append-only interaction log.
///
/// Implementations must be safe to share across threads; callers serialize
/// read-modify-write cycles per arm themselves.
pub trait ArmStore: Send + Sync {
    /// Loads the arm for `internship_id`, or `None` if it was never written.
    fn load_arm(&self, internship_id: &str) -> StorageResult<Option<ArmRecord>>;

    /// Inserts or replaces the arm keyed by `record.internship_id`.
    fn save_arm(&self, record: &ArmRecord) -> StorageResult<()>;

    /// Appends one feedback event and returns it with its assigned id and timestamp.
    fn append_interaction(
        &self,
        student_id: &str,
        internship_id: &str,
        context: &[f64],
        reward: f64,
    ) -> StorageResult<InteractionRecord>;
}

impl<T: ArmStore + ?Sized> ArmStore for Arc<T> {
    fn load_arm(&self, internship_id: &str) -> StorageResult<Option<ArmRecord>> {
        (**self).load_arm(internship_id)
    }

    fn save_arm(&self, record: &ArmRecord) -> StorageResult<()> {
        (**self).save_arm(record)
    }

    fn append_interaction(
        &self,
        student_id: &str,
        internship_id: &str,
        context: &[f64],
        reward: f64,
    ) -> StorageResult<InteractionRecord> {
        (**self).append_interaction(student_id, internship_id, context, reward)
    }
}
