//! Tests for the record codec
//!
//! These tests verify:
//! - Round-trips for separator-free fields
//! - First-separator splitting on decode
//! - Write-time rejection of ambiguous fields

use linekv::error::{Field, KvError};
use linekv::log::{decode, encode, Record};

fn round_trip(key: &str, value: &str) -> Record {
    let line = encode(key, value).unwrap();
    assert!(line.ends_with('\n'));
    decode(line.strip_suffix('\n').unwrap()).unwrap()
}

#[test]
fn test_round_trip_plain_pairs() {
    for (key, value) in [("me", "10"), ("name", "ada lovelace"), ("k", ""), ("", "v")] {
        assert_eq!(round_trip(key, value), Record::new(key, value));
    }
}

#[test]
fn test_record_encode_matches_free_function() {
    let record = Record::new("city", "Lagos");
    assert_eq!(record.encode().unwrap(), encode("city", "Lagos").unwrap());
    assert_eq!(record.encode().unwrap(), "city:Lagos\n");
}

#[test]
fn test_decode_keeps_remainder_in_value() {
    let record = decode("time:12:30:00").unwrap();
    assert_eq!(record.key, "time");
    assert_eq!(record.value, "12:30:00");
}

#[test]
fn test_decode_missing_separator() {
    let err = decode("no separator here").unwrap_err();
    assert_eq!(err.content, "no separator here");
}

#[test]
fn test_encode_rejects_separator_in_value() {
    let err = encode("time", "12:30").unwrap_err();
    assert!(matches!(
        err,
        KvError::InvalidField {
            field: Field::Value,
            ..
        }
    ));
    assert!(err.to_string().contains("value"));
}

#[test]
fn test_encode_rejects_newline_in_key() {
    let err = encode("multi\nline", "v").unwrap_err();
    assert!(matches!(err, KvError::InvalidField { field: Field::Key, .. }));
}
