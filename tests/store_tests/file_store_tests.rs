//! Tests for FileStore
//!
//! These tests verify:
//! - Last-write-wins resolution
//! - Unknown keys resolve to the empty string
//! - Get before any Set fails with an IO error
//! - A single malformed line aborts every read
//! - Stores at different paths are independent

use std::fs;

use linekv::config::Config;
use linekv::error::KvError;
use linekv::store::{Datastore, FileStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, FileStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("database.txt"));
    (temp_dir, store)
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_set_get() {
    let (_temp, store) = setup_temp_store();

    store.set("me", "10").unwrap();
    assert_eq!(store.get("me").unwrap(), "10");
}

#[test]
fn test_last_write_wins() {
    let (_temp, store) = setup_temp_store();

    for value in ["10", "20", "30", "40"] {
        store.set("me", value).unwrap();
    }
    store.set("other", "x").unwrap();

    assert_eq!(store.get("me").unwrap(), "40");
    assert_eq!(store.get("other").unwrap(), "x");
}

#[test]
fn test_overwrite_appends_instead_of_rewriting() {
    let (_temp, store) = setup_temp_store();

    store.set("me", "10").unwrap();
    store.set("me", "20").unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "me:10\nme:20\n");
}

#[test]
fn test_unknown_key_returns_empty() {
    let (_temp, store) = setup_temp_store();

    store.set("me", "10").unwrap();
    assert_eq!(store.get("absent").unwrap(), "");
}

#[test]
fn test_get_before_any_set_fails() {
    let (_temp, store) = setup_temp_store();

    let err = store.get("me").unwrap_err();
    assert!(matches!(err, KvError::Io(_)));
    assert!(err.is_not_found());
}

#[test]
fn test_empty_value_and_missing_key_differ_in_lookup() {
    let (_temp, store) = setup_temp_store();

    store.set("blank", "").unwrap();

    assert_eq!(store.get("blank").unwrap(), "");
    assert_eq!(store.get("absent").unwrap(), "");
    assert_eq!(store.lookup("blank").unwrap(), Some(String::new()));
    assert_eq!(store.lookup("absent").unwrap(), None);
}

#[test]
fn test_empty_value_overrides_earlier_value() {
    let (_temp, store) = setup_temp_store();

    store.set("me", "10").unwrap();
    store.set("me", "").unwrap();

    assert_eq!(store.lookup("me").unwrap(), Some(String::new()));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_set_rejects_separator() {
    let (_temp, store) = setup_temp_store();

    store.set("me", "10").unwrap();
    assert!(matches!(
        store.set("me", "12:30"),
        Err(KvError::InvalidField { .. })
    ));
    assert_eq!(store.get("me").unwrap(), "10");
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_malformed_line_aborts_get() {
    let (_temp, store) = setup_temp_store();

    store.set("me", "10").unwrap();
    fs::OpenOptions::new()
        .append(true)
        .open(store.path())
        .and_then(|mut f| std::io::Write::write_all(&mut f, b"corrupted\n"))
        .unwrap();
    store.set("you", "20").unwrap();

    for key in ["me", "you", "absent"] {
        match store.get(key) {
            Err(KvError::InvalidRecord { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "corrupted");
            }
            other => panic!("expected InvalidRecord for {key}, got {:?}", other),
        }
    }
}

#[test]
fn test_foreign_value_with_separator_is_kept_whole() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "time:12:30\n").unwrap();

    assert_eq!(store.get("time").unwrap(), "12:30");
}

// =============================================================================
// Isolation Tests
// =============================================================================

#[test]
fn test_independent_stores() {
    let temp_dir = TempDir::new().unwrap();
    let first = FileStore::new(temp_dir.path().join("first.txt"));
    let second = FileStore::open(
        Config::builder()
            .db_path(temp_dir.path().join("second.txt"))
            .build(),
    );

    first.set("k", "one").unwrap();
    second.set("k", "two").unwrap();

    assert_eq!(first.get("k").unwrap(), "one");
    assert_eq!(second.get("k").unwrap(), "two");
}

#[test]
fn test_reopen_sees_existing_records() {
    let (_temp, store) = setup_temp_store();
    store.set("me", "10").unwrap();

    let reopened = FileStore::new(store.path());
    assert_eq!(reopened.get("me").unwrap(), "10");
}

#[test]
fn test_records_iterates_history() {
    let (_temp, store) = setup_temp_store();
    store.set("a", "1").unwrap();
    store.set("a", "2").unwrap();

    let values: Vec<String> = store
        .records()
        .unwrap()
        .map(|r| r.unwrap().value)
        .collect();
    assert_eq!(values, vec!["1", "2"]);
}
