//! Error types for linekv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Fixed help block shown for any malformed invocation
pub const USAGE: &str = "usage:
\tset <key> <value>  Set specified key and value
\tget <key>          Get value for a given key
\t--help             Show the acceptable commands";

/// Which half of a record failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Value,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Key => f.write_str("key"),
            Field::Value => f.write_str("value"),
        }
    }
}

/// Unified error type for linekv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    /// A line in the log has no field separator
    #[error("invalid record at line {line}: {content:?}")]
    InvalidRecord { line: usize, content: String },

    /// A key or value cannot be encoded without ambiguity
    #[error("invalid {field}: {reason}")]
    InvalidField { field: Field, reason: &'static str },

    // -------------------------------------------------------------------------
    // CLI Errors
    // -------------------------------------------------------------------------
    #[error("{}", USAGE)]
    Usage,
}

impl KvError {
    /// True when the backing file does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, KvError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// True for the fixed usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, KvError::Usage)
    }
}
