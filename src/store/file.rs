//! File-backed store
//!
//! Writes append to the log; reads scan the whole log from the start.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::log::{LogReader, LogWriter, Records};

use super::Datastore;

/// Key-value store over a single append-only text file
///
/// Keeps no cache and no open handle between calls. Every read costs a full
/// scan of the log, linear in the number of records ever written.
#[derive(Debug, Clone)]
pub struct FileStore {
    writer: LogWriter,
}

impl FileStore {
    /// Open a store with the given config
    ///
    /// Nothing touches the disk until the first operation.
    pub fn open(config: Config) -> Self {
        Self {
            writer: LogWriter::new(config.db_path, config.file_mode),
        }
    }

    /// Open a store at `path` with default permissions
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::open(Config::builder().db_path(path.as_ref()).build())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    /// Resolve `key`, telling "never written" apart from an empty value
    ///
    /// Returns `Ok(None)` when the log exists but has no record for the key.
    /// Fails if the log is missing or any line in it is malformed.
    pub fn lookup(&self, key: &str) -> Result<Option<String>> {
        let mut last = None;
        for record in self.records()? {
            let record = record?;
            tracing::trace!(key = %record.key, "scanned record");
            if record.key == key {
                last = Some(record.value);
            }
        }

        tracing::debug!(key, found = last.is_some(), "lookup finished");
        Ok(last)
    }

    /// Stream every record in append order
    pub fn records(&self) -> Result<Records<BufReader<File>>> {
        LogReader::open(self.path())
    }
}

impl Datastore for FileStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.writer.append(key, value)
    }

    fn get(&self, key: &str) -> Result<String> {
        Ok(self.lookup(key)?.unwrap_or_default())
    }
}
