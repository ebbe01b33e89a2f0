//! Configuration for linekv
//!
//! Every store is bound to an explicit backing file. The default only exists
//! for the binary, which keeps its log next to the working directory.

use std::path::PathBuf;

/// Default backing file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "database.txt";

/// Default permission bits for a freshly created log (owner read/write)
pub const DEFAULT_FILE_MODE: u32 = 0o600;

/// Configuration for a file-backed store
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the append-only log file
    pub db_path: PathBuf,

    /// Unix permission bits applied when the log is created.
    /// Ignored on other platforms.
    pub file_mode: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the permission bits used when creating the file
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.config.file_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
