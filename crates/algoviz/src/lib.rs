#![forbid(unsafe_code)]

//! Command-line front end for the algoviz engines.
//!
//! Parses an array (and a target for searches), plays the chosen algorithm
//! through a [`Player`](algoviz_runtime::Player), prints one text frame per
//! visualization event, and ends with a summary line.

pub mod cli;
pub mod error;
pub mod render;

pub use cli::run_from_env;
pub use error::{CliError, Result};

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
