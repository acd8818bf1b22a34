//! Integration tests for arm keys and stored record encoding.

mod common;

use std::collections::HashSet;

use matchmaker::{ArmRecord, ArmState, ArmStore, FileArmStore, arm_storage_key, hash_to_u64};
use rkyv::rancor::Error;
use rkyv::{from_bytes, to_bytes};
use tempfile::TempDir;

#[test]
fn test_arm_key_determinism() {
    let key1 = arm_storage_key("internship-001");
    let key2 = arm_storage_key("internship-001");

    assert_eq!(key1, key2);
    assert_eq!(key1.len(), 64);
    assert!(key1.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_arm_key_uniqueness() {
    let ids = ["intern-001", "intern-002", "INTERN-001", "intern-001 ", ""];

    let keys: HashSet<_> = ids.iter().map(|id| arm_storage_key(id)).collect();
    assert_eq!(keys.len(), ids.len());
}

#[test]
fn test_arm_key_is_domain_separated() {
    let raw = blake3::hash(b"intern-001").to_hex().to_string();
    assert_ne!(arm_storage_key("intern-001"), raw);
}

#[test]
fn test_hash_to_u64_matches_blake3_prefix() {
    let hash = blake3::hash(b"python");
    let bytes: [u8; 8] = hash.as_bytes()[0..8].try_into().expect("8 bytes");

    assert_eq!(hash_to_u64(b"python"), u64::from_le_bytes(bytes));
}

#[test]
fn test_arm_file_named_by_key() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileArmStore::open(dir.path()).expect("open");

    store
        .save_arm(&ArmState::identity(4).to_record("intern-9"))
        .expect("save");

    let expected = dir
        .path()
        .join("arms")
        .join(format!("{}.rkyv", arm_storage_key("intern-9")));
    assert!(expected.is_file());
}

#[test]
fn test_arm_file_bytes_decode_as_record() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileArmStore::open(dir.path()).expect("open");
    let record = ArmState::identity(3).to_record("intern-3");

    store.save_arm(&record).expect("save");

    let path = dir
        .path()
        .join("arms")
        .join(format!("{}.rkyv", arm_storage_key("intern-3")));
    let on_disk = std::fs::read(&path).expect("read arm file");
    let expected = to_bytes::<Error>(&record).expect("serialize");
    assert_eq!(on_disk.as_slice(), expected.as_slice());

    let decoded: ArmRecord = from_bytes::<ArmRecord, Error>(&expected).expect("deserialize");
    assert_eq!(decoded, record);
}
