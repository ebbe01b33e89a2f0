//! # linekv
//!
//! A command-line key-value store backed by an append-only text file:
//! - One `key:value` line per write, never rewritten
//! - Reads scan the whole file; the last matching line wins
//! - No index, no compaction, no locking
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 CLI Runner                  │
//! │        (set <key> <value> / get <key>)      │
//! └─────────────────────┬───────────────────────┘
//!                       │ Datastore
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  FileStore  │          │ MemoryStore │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!     ┌────┴─────┐
//!     ▼          ▼
//! ┌────────┐ ┌────────┐
//! │ Writer │ │ Reader │   log/ (record codec)
//! └────────┘ └────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod log;
pub mod store;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use store::{Datastore, FileStore, MemoryStore};
pub use cli::Runner;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of linekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
