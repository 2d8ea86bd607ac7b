#![forbid(unsafe_code)]

//! Deterministic test harness for dragsort.
//!
//! - [`simulator`]: an in-memory [`ViewHost`](dragsort_list::ViewHost) and a
//!   frame-by-frame driver around a drag session.
//! - [`script`]: JSONL scenario scripts of host events.
//! - [`env`]: `DRAGSORT_*` environment configuration for the binary.
//! - [`sample`]: demo items.
//! - [`logging`]: stderr subscriber for the binary.

pub mod env;
pub mod logging;
pub mod sample;
pub mod script;
pub mod simulator;

pub use env::HarnessConfig;
pub use logging::init_tracing;
pub use sample::sample_items;
pub use script::{ScriptError, load_script, parse_script, read_script, write_script};
pub use simulator::{HostCommand, RunSummary, SimulatedHost, Simulator};
