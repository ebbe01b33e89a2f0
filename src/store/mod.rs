//! Store Module
//!
//! The two-method storage capability and its backends.
//!
//! ## Resolution Rule
//! A key resolves to the value of the last record written for it
//! (last-write-wins by append order). A key that was never written resolves
//! to the empty string, which is indistinguishable from an empty value
//! through [`Datastore::get`]; backends expose `lookup` when the difference
//! matters.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Storage capability consumed by the CLI dispatcher
pub trait Datastore {
    /// Record `value` as the current value of `key`
    ///
    /// Keys and values must not contain `:` or line breaks.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Get the most recent value of `key`
    ///
    /// Returns an empty string if the key was never written.
    fn get(&self, key: &str) -> Result<String>;
}

impl<S: Datastore + ?Sized> Datastore for &S {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Result<String> {
        (**self).get(key)
    }
}
