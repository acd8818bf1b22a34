//! In-process arm store.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;

use super::{ArmRecord, ArmStore, InteractionRecord, StorageResult};

#[derive(Debug, Default)]
/// [`ArmStore`] backed by in-memory maps; contents are lost on drop.
pub struct InMemoryArmStore {
    arms: RwLock<HashMap<String, ArmRecord>>,
    interactions: RwLock<Vec<InteractionRecord>>,
}

impl InMemoryArmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the interaction log in append order.
    pub fn interactions(&self) -> Vec<InteractionRecord> {
        self.interactions.read().clone()
    }

    pub fn arm_count(&self) -> usize {
        self.arms.read().len()
    }
}

impl ArmStore for InMemoryArmStore {
    fn load_arm(&self, internship_id: &str) -> StorageResult<Option<ArmRecord>> {
        let record = self.arms.read().get(internship_id).cloned();
        if let Some(record) = &record {
            record.validate(internship_id)?;
        }
        Ok(record)
    }

    fn save_arm(&self, record: &ArmRecord) -> StorageResult<()> {
        self.arms
            .write()
            .insert(record.internship_id.clone(), record.clone());
        Ok(())
    }

    fn append_interaction(
        &self,
        student_id: &str,
        internship_id: &str,
        context: &[f64],
        reward: f64,
    ) -> StorageResult<InteractionRecord> {
        let mut log = self.interactions.write();
        let record = InteractionRecord {
            id: log.len() as u64 + 1,
            student_id: student_id.to_string(),
            internship_id: internship_id.to_string(),
            context: context.to_vec(),
            reward,
            timestamp: Utc::now(),
        };
        log.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ArmRecord {
        ArmRecord {
            internship_id: id.to_string(),
            dim: 1,
            a: vec![2.0],
            b: vec![1.0],
            last_updated: 0,
        }
    }

    #[test]
    fn test_missing_arm_is_none() {
        let store = InMemoryArmStore::new();
        assert_eq!(store.load_arm("nope").expect("load"), None);
    }

    #[test]
    fn test_save_is_upsert() {
        let store = InMemoryArmStore::new();
        store.save_arm(&record("i-1")).expect("save");

        let mut updated = record("i-1");
        updated.b = vec![3.0];
        store.save_arm(&updated).expect("save");

        assert_eq!(store.arm_count(), 1);
        assert_eq!(store.load_arm("i-1").expect("load"), Some(updated));
    }

    #[test]
    fn test_interaction_ids_increment() {
        let store = InMemoryArmStore::new();
        let first = store
            .append_interaction("s-1", "i-1", &[1.0], 1.0)
            .expect("append");
        let second = store
            .append_interaction("s-2", "i-1", &[0.0], 0.0)
            .expect("append");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.interactions().len(), 2);
        assert_eq!(store.interactions()[1].student_id, "s-2");
    }
}
