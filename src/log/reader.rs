//! Log Reader
//!
//! Streams records from the start of the log file.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{KvError, Result};
use super::record::{self, Record};

/// Opens the log for a single forward scan
pub struct LogReader;

impl LogReader {
    /// Open a log file read-only
    ///
    /// Fails with an IO error if the file does not exist.
    pub fn open(path: &Path) -> Result<Records<BufReader<File>>> {
        let file = File::open(path)?;
        Ok(Records::new(BufReader::new(file)))
    }
}

/// Lazy iterator over the records of a log
///
/// Yields records in file order. The first undecodable line is returned as
/// an error, after which the iterator is exhausted.
pub struct Records<R> {
    lines: Lines<R>,
    line_no: usize,
    failed: bool,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            failed: false,
        }
    }

    /// Number of lines consumed so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => {
                self.failed = true;
                return Some(Err(KvError::Io(e)));
            }
        };
        self.line_no += 1;

        match record::decode(&line) {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                self.failed = true;
                tracing::warn!(line = self.line_no, content = %e.content, "malformed log line");
                Some(Err(KvError::InvalidRecord {
                    line: self.line_no,
                    content: e.content,
                }))
            }
        }
    }
}
