//! Log Writer
//!
//! Appends encoded records to the log file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use super::record;

/// Appends records to a log file
///
/// Holds no open handle: the file is opened for each append and closed when
/// the append returns, on success or failure.
#[derive(Debug, Clone)]
pub struct LogWriter {
    path: PathBuf,
    mode: u32,
}

impl LogWriter {
    pub fn new(path: impl Into<PathBuf>, mode: u32) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// Append one record, creating the file if absent
    ///
    /// The whole line is handed to a single write, so a failure leaves either
    /// nothing or the complete line behind.
    pub fn append(&self, key: &str, value: &str) -> Result<()> {
        let line = record::encode(key, value)?;

        let mut file = self.open_append()?;
        file.write_all(line.as_bytes())?;

        tracing::debug!(path = %self.path.display(), key, bytes = line.len(), "appended record");
        Ok(())
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_append(&self) -> std::io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.mode);
        }

        options.open(&self.path)
    }
}
