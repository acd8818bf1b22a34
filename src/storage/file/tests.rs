use super::*;
use tempfile::TempDir;

fn create_test_store() -> (FileArmStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileArmStore::open(dir.path()).expect("Failed to open store");
    (store, dir)
}

fn create_test_record(id: &str, dim: u32) -> ArmRecord {
    let d = dim as usize;
    let mut a = vec![0.0; d * d];
    for i in 0..d {
        a[i * d + i] = 1.0 + i as f64;
    }
    ArmRecord {
        internship_id: id.to_string(),
        dim,
        a,
        b: (0..d).map(|i| i as f64 * 0.5).collect(),
        last_updated: 1_702_500_000,
    }
}

#[test]
fn test_open_creates_layout() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path().join("nested").join("store");

    let store = FileArmStore::open(&root).expect("Failed to open store");

    assert!(root.join(ARMS_DIR).is_dir());
    assert_eq!(store.root(), root.as_path());
    assert_eq!(store.arm_count().expect("count"), 0);
}

#[test]
fn test_open_unavailable_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = dir.path().join("file");
    fs::write(&blocker, b"not a directory").expect("write");

    let result = FileArmStore::open(&blocker);
    assert!(matches!(result, Err(StorageError::Unavailable { .. })));
}

#[test]
fn test_save_and_load() {
    let (store, _dir) = create_test_store();
    let record = create_test_record("intern-1", 5);

    store.save_arm(&record).expect("Failed to save");
    let loaded = store.load_arm("intern-1").expect("Failed to load");

    assert_eq!(loaded, Some(record));
    assert_eq!(store.arm_count().expect("count"), 1);
}

#[test]
fn test_load_missing_is_none() {
    let (store, _dir) = create_test_store();
    assert_eq!(store.load_arm("never-written").expect("load"), None);
}

#[test]
fn test_save_overwrites_and_leaves_no_temp_file() {
    let (store, dir) = create_test_store();

    store
        .save_arm(&create_test_record("intern-1", 3))
        .expect("save");
    let mut updated = create_test_record("intern-1", 3);
    updated.b = vec![9.0, 9.0, 9.0];
    store.save_arm(&updated).expect("save");

    assert_eq!(store.load_arm("intern-1").expect("load"), Some(updated));

    let temp_files = fs::read_dir(dir.path().join(ARMS_DIR))
        .expect("read_dir")
        .filter_map(Result::ok)
        .filter(|e| e.path().to_string_lossy().ends_with(TEMP_EXTENSION))
        .count();
    assert_eq!(temp_files, 0);
    assert_eq!(store.arm_count().expect("count"), 1);
}

#[test]
fn test_ids_with_path_characters_are_safe() {
    let (store, dir) = create_test_store();
    let record = create_test_record("../../etc/passwd", 2);

    store.save_arm(&record).expect("save");

    assert_eq!(store.load_arm("../../etc/passwd").expect("load"), Some(record));
    assert!(!dir.path().join("etc").exists());
}

#[test]
fn test_corrupt_file_is_error() {
    let (store, _dir) = create_test_store();
    fs::write(store.arm_path("intern-1"), b"garbage bytes").expect("write");

    let result = store.load_arm("intern-1");
    assert!(matches!(result, Err(StorageError::Corrupt { .. })));
}

#[test]
fn test_misplaced_record_is_key_mismatch() {
    let (store, _dir) = create_test_store();
    store
        .save_arm(&create_test_record("intern-1", 2))
        .expect("save");
    fs::copy(store.arm_path("intern-1"), store.arm_path("intern-2")).expect("copy");

    let result = store.load_arm("intern-2");
    assert!(matches!(result, Err(StorageError::KeyMismatch { .. })));
}

#[test]
fn test_interactions_append_as_json_lines() {
    let (store, _dir) = create_test_store();

    let first = store
        .append_interaction("s-1", "intern-1", &[1.0, 2.0], 1.0)
        .expect("append");
    let second = store
        .append_interaction("s-2", "intern-1", &[0.0, 0.0], 0.0)
        .expect("append");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let raw = fs::read_to_string(store.interactions_path()).expect("read log");
    assert_eq!(raw.lines().count(), 2);

    let parsed: serde_json::Value =
        serde_json::from_str(raw.lines().next().expect("first line")).expect("json");
    assert_eq!(parsed["student_id"], "s-1");
    assert_eq!(parsed["context"], serde_json::json!([1.0, 2.0]));
    assert!(parsed["timestamp"].as_str().expect("timestamp").ends_with('Z'));

    assert_eq!(store.interactions().expect("read"), vec![first, second]);
}

#[test]
fn test_interaction_ids_continue_after_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let store = FileArmStore::open(dir.path()).expect("open");
        store
            .append_interaction("s-1", "intern-1", &[1.0], 1.0)
            .expect("append");
        store
            .append_interaction("s-1", "intern-2", &[1.0], 0.0)
            .expect("append");
    }

    let reopened = FileArmStore::open(dir.path()).expect("reopen");
    let next = reopened
        .append_interaction("s-2", "intern-1", &[0.5], 1.0)
        .expect("append");

    assert_eq!(next.id, 3);
    assert_eq!(reopened.interactions().expect("read").len(), 3);
}

#[test]
fn test_arms_survive_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let record = create_test_record("intern-7", 4);

    FileArmStore::open(dir.path())
        .expect("open")
        .save_arm(&record)
        .expect("save");

    let reopened = FileArmStore::open(dir.path()).expect("reopen");
    assert_eq!(reopened.load_arm("intern-7").expect("load"), Some(record));
}
