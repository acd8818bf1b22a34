//! File-backed arm store (one file per arm, JSON-lines interaction log).

#[cfg(test)]
mod tests;

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rkyv::rancor::Error as RkyvError;
use rkyv::util::AlignedVec;
use tracing::{debug, info};

use super::{ArmRecord, ArmStore, InteractionRecord, StorageError, StorageResult};
use crate::hashing::arm_storage_key;

const ARMS_DIR: &str = "arms";

const INTERACTIONS_FILE: &str = "interactions.jsonl";

const RKYV_EXTENSION: &str = "rkyv";

const TEMP_EXTENSION: &str = "rkyv.tmp";

#[derive(Debug)]
/// Stores [`ArmRecord`]s under `<root>/arms/` and appends feedback to
/// `<root>/interactions.jsonl`.
///
/// Arm writes go to a temp file that is fsynced and renamed over the target, so a
/// reader sees either the previous or the new record.
pub struct FileArmStore {
    root: PathBuf,
    /// Last assigned interaction id; guards appends to the log.
    log: Mutex<u64>,
}

impl FileArmStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        let arms_dir = root.join(ARMS_DIR);

        fs::create_dir_all(&arms_dir)
            .map_err(|_| StorageError::Unavailable { path: arms_dir })?;

        let last_id = count_lines(&root.join(INTERACTIONS_FILE))?;

        info!(
            path = %root.display(),
            interactions = last_id,
            "Arm store opened"
        );

        Ok(Self {
            root,
            log: Mutex::new(last_id),
        })
    }

    /// Returns the root storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn interactions_path(&self) -> PathBuf {
        self.root.join(INTERACTIONS_FILE)
    }

    fn arm_path(&self, internship_id: &str) -> PathBuf {
        self.root.join(ARMS_DIR).join(format!(
            "{}.{}",
            arm_storage_key(internship_id),
            RKYV_EXTENSION
        ))
    }

    fn temp_arm_path(&self, internship_id: &str) -> PathBuf {
        self.root.join(ARMS_DIR).join(format!(
            "{}.{}",
            arm_storage_key(internship_id),
            TEMP_EXTENSION
        ))
    }

    /// Number of arm files currently on disk.
    pub fn arm_count(&self) -> StorageResult<usize> {
        let mut count = 0;
        for entry in fs::read_dir(self.root.join(ARMS_DIR))? {
            let path = entry?.path();
            if let Some(ext) = path.extension()
                && ext == RKYV_EXTENSION
            {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Reads the whole interaction log.
    pub fn interactions(&self) -> StorageResult<Vec<InteractionRecord>> {
        let path = self.interactions_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }
}

impl ArmStore for FileArmStore {
    fn load_arm(&self, internship_id: &str) -> StorageResult<Option<ArmRecord>> {
        let path = self.arm_path(internship_id);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let mut aligned = AlignedVec::<16>::with_capacity(bytes.len());
        aligned.extend_from_slice(&bytes);

        let record = rkyv::from_bytes::<ArmRecord, RkyvError>(&aligned).map_err(|e| {
            StorageError::Corrupt {
                key: internship_id.to_string(),
                reason: e.to_string(),
            }
        })?;
        record.validate(internship_id)?;

        Ok(Some(record))
    }

    fn save_arm(&self, record: &ArmRecord) -> StorageResult<()> {
        let bytes = rkyv::to_bytes::<RkyvError>(record)
            .map_err(|e| StorageError::Serialization(format!("{:?}", e)))?;

        let temp_path = self.temp_arm_path(&record.internship_id);
        let final_path = self.arm_path(&record.internship_id);

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &final_path)?;

        debug!(
            internship_id = %record.internship_id,
            bytes = bytes.len(),
            "Arm persisted"
        );
        Ok(())
    }

    fn append_interaction(
        &self,
        student_id: &str,
        internship_id: &str,
        context: &[f64],
        reward: f64,
    ) -> StorageResult<InteractionRecord> {
        let mut last_id = self.log.lock();

        let record = InteractionRecord {
            id: *last_id + 1,
            student_id: student_id.to_string(),
            internship_id: internship_id.to_string(),
            context: context.to_vec(),
            reward,
            timestamp: chrono::Utc::now(),
        };

        let mut line = serde_json::to_string(&record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.interactions_path())?;
        file.write_all(line.as_bytes())?;
        file.sync_data()?;

        *last_id = record.id;
        Ok(record)
    }
}

fn count_lines(path: &Path) -> StorageResult<u64> {
    if !path.exists() {
        return Ok(0);
    }

    let reader = BufReader::new(File::open(path)?);
    let mut count = 0;
    for line in reader.lines() {
        if !line?.trim().is_empty() {
            count += 1;
        }
    }
    Ok(count)
}
