//! Append-only Log Module
//!
//! The on-disk record format and the two ways of touching it: appending a
//! line and scanning all lines from the start.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────┐
//! │ key:value\n                 │  record 1 (oldest)
//! ├─────────────────────────────┤
//! │ key:value\n                 │  record 2
//! ├─────────────────────────────┤
//! │ ...                         │
//! └─────────────────────────────┘
//! ```
//!
//! UTF-8 text, no header, no footer, no checksums. Records are never
//! rewritten; a later line for the same key supersedes earlier ones.

mod record;
mod writer;
mod reader;

pub use record::{decode, encode, validate, DecodeError, Record, SEPARATOR};
pub use writer::LogWriter;
pub use reader::{LogReader, Records};
