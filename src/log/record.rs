//! Record codec
//!
//! Translates between a key/value pair and its one-line textual form.

use thiserror::Error;

use crate::error::{Field, KvError, Result};

/// Separates the key from the value on a line
pub const SEPARATOR: char = ':';

/// A single key/value pair as persisted in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

/// A line that cannot be split into a key and a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record: {content:?}")]
pub struct DecodeError {
    pub content: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Encode this record as a newline-terminated line
    pub fn encode(&self) -> Result<String> {
        encode(&self.key, &self.value)
    }
}

/// Encode a pair as `key:value\n`
///
/// Rejects any field containing the separator or a line break, since such a
/// record could not be decoded back to the same pair.
pub fn encode(key: &str, value: &str) -> Result<String> {
    validate(Field::Key, key)?;
    validate(Field::Value, value)?;

    let mut line = String::with_capacity(key.len() + value.len() + 2);
    line.push_str(key);
    line.push(SEPARATOR);
    line.push_str(value);
    line.push('\n');
    Ok(line)
}

/// Decode a line (without its terminator) into a record
///
/// Splits on the first separator only: everything after it is the value.
pub fn decode(line: &str) -> std::result::Result<Record, DecodeError> {
    match line.split_once(SEPARATOR) {
        Some((key, value)) => Ok(Record::new(key, value)),
        None => Err(DecodeError {
            content: line.to_string(),
        }),
    }
}

/// Check that a field can be written without making the line ambiguous
pub fn validate(field: Field, text: &str) -> Result<()> {
    if text.contains(SEPARATOR) {
        return Err(KvError::InvalidField {
            field,
            reason: "must not contain ':'",
        });
    }
    // `\r` is stripped by line readers when it precedes `\n`
    if text.contains(['\n', '\r']) {
        return Err(KvError::InvalidField {
            field,
            reason: "must not contain a line break",
        });
    }
    Ok(())
}
