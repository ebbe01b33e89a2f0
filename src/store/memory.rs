//! In-memory store
//!
//! Same contract as [`FileStore`](super::FileStore) without touching disk.

use parking_lot::Mutex;

use crate::error::{Field, Result};
use crate::log::{validate, Record};

use super::Datastore;

/// Append-only record list held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `key`, telling "never written" apart from an empty value
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.records
            .lock()
            .iter()
            .rev()
            .find(|record| record.key == key)
            .map(|record| record.value.clone())
    }

    /// Number of records appended so far
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Copy of all records in append order
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }
}

impl Datastore for MemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate(Field::Key, key)?;
        validate(Field::Value, value)?;
        self.records.lock().push(Record::new(key, value));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String> {
        Ok(self.lookup(key).unwrap_or_default())
    }
}
