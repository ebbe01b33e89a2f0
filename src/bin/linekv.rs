//! linekv binary
//!
//! Stores its log in `database.txt` under the working directory.

use std::io;
use std::process::ExitCode;

use linekv::{Config, FileStore, Runner};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    tracing::debug!("linekv v{} using {}", linekv::VERSION, config.db_path.display());

    let runner = Runner::new(FileStore::open(config));
    let stdout = io::stdout();

    match runner.run(&mut stdout.lock(), std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            if e.is_usage() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
