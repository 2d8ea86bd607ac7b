#![forbid(unsafe_code)]

//! Replay a drag against the simulated host and print the result as JSON.
//!
//! With `DRAGSORT_SCRIPT` set, the script's events are replayed verbatim.
//! Otherwise a single drag from `DRAGSORT_FROM_ROW` to `DRAGSORT_TO_ROW` is
//! performed. See [`dragsort_harness::env`] for every variable. Logs go to
//! stderr and honour `RUST_LOG`.

use std::io::{self, Write};

use dragsort_harness::{HarnessConfig, Simulator, init_tracing, load_script, sample_items};

fn main() -> io::Result<()> {
    let config = HarnessConfig::from_env();
    if let Err(err) = init_tracing(config.log_json) {
        eprintln!("dragsort-harness: logging disabled: {err}");
    }

    config
        .drag
        .validate()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    if !(config.row_height > 0.0 && config.viewport_height > 0.0) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "DRAGSORT_ROW_HEIGHT and DRAGSORT_VIEWPORT_HEIGHT must be positive",
        ));
    }

    let mut sim = Simulator::new(
        sample_items(config.items),
        config.drag,
        config.viewport_height,
        config.row_height,
    );

    match &config.script {
        Some(path) => {
            let events = load_script(path)?;
            tracing::info!(path = %path.display(), events = events.len(), "replaying script");
            sim.replay(events);
        }
        None => {
            tracing::info!(
                from = config.from_row,
                to = config.to_row,
                frames = config.frames,
                "running built-in drag"
            );
            if !sim.drag_row(config.from_row, config.to_row, config.frames) {
                tracing::warn!(row = config.from_row, "drag did not start");
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &sim.summary()).map_err(io::Error::other)?;
    writeln!(out)?;
    Ok(())
}
