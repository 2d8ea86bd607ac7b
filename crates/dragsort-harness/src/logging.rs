#![forbid(unsafe_code)]

//! Subscriber setup for the harness binary.
//!
//! Logs go to stderr so the JSON summary on stdout stays machine-readable.
//! `RUST_LOG` selects what is shown (default `warn`).

use std::io;

use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global `fmt` subscriber, as JSON lines when `json` is set.
pub fn init_tracing(json: bool) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
