//! CLI dispatcher
//!
//! Parses an argument vector and drives a [`Datastore`].
//!
//! | args                | action                                        |
//! |---------------------|-----------------------------------------------|
//! | `set <key> <value>` | `set`; any failure becomes [`KvError::Usage`] |
//! | `get <key>`         | `get`; prints the value and a newline         |
//! | anything else       | [`KvError::Usage`], no storage operation      |

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::{KvError, Result};
use crate::store::Datastore;

#[derive(Parser, Debug)]
#[command(name = "linekv")]
#[command(about = "Key-value store backed by an append-only text file")]
#[command(disable_help_subcommand = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set specified key and value
    Set { key: String, value: String },

    /// Get value for a given key
    Get { key: String },
}

/// Routes parsed commands to a store
pub struct Runner<S> {
    store: S,
}

impl<S: Datastore> Runner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Execute one invocation
    ///
    /// `args` includes the program name, as in `std::env::args_os()`.
    pub fn run<W, I, T>(&self, out: &mut W, args: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let argv = escape_operands(&args).ok_or_else(|| {
            tracing::debug!(argc = args.len(), "wrong argument count");
            KvError::Usage
        })?;

        let args = Args::try_parse_from(argv).map_err(|e| {
            tracing::debug!(kind = ?e.kind(), "rejected arguments");
            KvError::Usage
        })?;

        match args.command {
            Commands::Set { key, value } => {
                if let Err(e) = self.store.set(&key, &value) {
                    tracing::debug!(error = %e, "set failed");
                    return Err(KvError::Usage);
                }
            }
            Commands::Get { key } => {
                let value = self.store.get(&key)?;
                writeln!(out, "{}", value)?;
            }
        }

        Ok(())
    }

    /// The store this runner dispatches to
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Check the raw argument count and mark the operands as positional
///
/// `set` takes exactly two operands and `get` exactly one. Operands are put
/// behind `--` so keys and values such as `-k`, `--help` or `--` are taken
/// literally instead of being read as flags.
fn escape_operands(args: &[OsString]) -> Option<Vec<OsString>> {
    let expected = match args.get(1).and_then(|verb| verb.to_str()) {
        Some("set") => 4,
        Some("get") => 3,
        _ => return None,
    };
    if args.len() != expected {
        return None;
    }

    let mut argv = args[..2].to_vec();
    argv.push(OsString::from("--"));
    argv.extend_from_slice(&args[2..]);
    Some(argv)
}
