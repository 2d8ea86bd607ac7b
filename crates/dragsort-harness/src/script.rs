#![forbid(unsafe_code)]

//! JSONL scenario scripts.
//!
//! One [`HostEvent`] per line, in the serde form of `dragsort-core`:
//!
//! ```text
//! {"kind":"viewport_measured","height":1000.0}
//! {"kind":"row_measured","height":60.0}
//! {"kind":"gesture_start","y":265.0}
//! {"kind":"gesture_move","y":505.0}
//! {"kind":"frame"}
//! {"kind":"gesture_end"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

use dragsort_core::HostEvent;

/// Failure to load a scenario script.
#[derive(Debug)]
pub enum ScriptError {
    /// The script could not be read.
    Io(io::Error),
    /// Line `line` (1-based) is not a valid event.
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read script: {err}"),
            Self::Parse { line, source } => write!(f, "invalid event on line {line}: {source}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ScriptError> for io::Error {
    fn from(err: ScriptError) -> Self {
        match err {
            ScriptError::Io(err) => err,
            parse @ ScriptError::Parse { .. } => io::Error::new(io::ErrorKind::InvalidData, parse),
        }
    }
}

/// Parse every event from `reader`.
pub fn read_script(reader: impl BufRead) -> Result<Vec<HostEvent>, ScriptError> {
    let mut events = Vec::new();
    for (ix, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse {
            line: ix + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Parse a script held in memory.
pub fn parse_script(text: &str) -> Result<Vec<HostEvent>, ScriptError> {
    read_script(text.as_bytes())
}

/// Load a script from disk.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<HostEvent>, ScriptError> {
    let file = std::fs::File::open(path)?;
    read_script(io::BufReader::new(file))
}

/// Write `events` as JSONL, one event per line.
pub fn write_script<W: Write>(events: &[HostEvent], mut out: W) -> io::Result<()> {
    for event in events {
        serde_json::to_writer(&mut out, event).map_err(io::Error::other)?;
        writeln!(out)?;
    }
    Ok(())
}
