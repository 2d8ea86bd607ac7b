#![forbid(unsafe_code)]

//! Harness configuration from `DRAGSORT_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DRAGSORT_ITEMS` | 15 | Number of sample items |
//! | `DRAGSORT_VIEWPORT_HEIGHT` | 1000 | Simulated viewport height |
//! | `DRAGSORT_ROW_HEIGHT` | 60 | Simulated row height |
//! | `DRAGSORT_TOP_INSET` | 55 | [`DragConfig::top_inset`] |
//! | `DRAGSORT_SCROLL_BAND` | 100 | [`DragConfig::scroll_band`] |
//! | `DRAGSORT_SCROLL_STEP` | 5 | [`DragConfig::scroll_step`] |
//! | `DRAGSORT_HANDLE_WIDTH` | unset | [`DragConfig::drag_handle_width`] |
//! | `DRAGSORT_FROM_ROW` | 3 | Row the built-in drag starts on |
//! | `DRAGSORT_TO_ROW` | 7 | Row the built-in drag moves to |
//! | `DRAGSORT_FRAMES` | 60 | Frames to run before releasing |
//! | `DRAGSORT_SCRIPT` | unset | JSONL script replayed instead of the built-in drag |
//! | `DRAGSORT_LOG_JSON` | off | Emit logs as JSON |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;

use dragsort_core::DragConfig;

/// Everything the harness binary needs to run.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub items: usize,
    pub viewport_height: f32,
    pub row_height: f32,
    pub drag: DragConfig,
    pub from_row: usize,
    pub to_row: usize,
    pub frames: usize,
    pub script: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            items: 15,
            viewport_height: 1_000.0,
            row_height: 60.0,
            drag: DragConfig::default(),
            from_row: 3,
            to_row: 7,
            frames: 60,
            script: None,
            log_json: false,
        }
    }
}

impl HarnessConfig {
    /// Read the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = &lookup;
        let defaults = Self::default();
        let mut drag = defaults.drag;
        if let Some(inset) = env_f32(lookup, "DRAGSORT_TOP_INSET") {
            drag = drag.with_top_inset(inset);
        }
        if let Some(band) = env_f32(lookup, "DRAGSORT_SCROLL_BAND") {
            drag = drag.with_scroll_band(band);
        }
        if let Some(step) = env_f32(lookup, "DRAGSORT_SCROLL_STEP") {
            drag = drag.with_scroll_step(step);
        }
        if let Some(width) = env_f32(lookup, "DRAGSORT_HANDLE_WIDTH") {
            drag = drag.with_drag_handle_width(width);
        }

        Self {
            items: env_usize(lookup, "DRAGSORT_ITEMS").unwrap_or(defaults.items),
            viewport_height: env_f32(lookup, "DRAGSORT_VIEWPORT_HEIGHT")
                .unwrap_or(defaults.viewport_height),
            row_height: env_f32(lookup, "DRAGSORT_ROW_HEIGHT").unwrap_or(defaults.row_height),
            drag,
            from_row: env_usize(lookup, "DRAGSORT_FROM_ROW").unwrap_or(defaults.from_row),
            to_row: env_usize(lookup, "DRAGSORT_TO_ROW").unwrap_or(defaults.to_row),
            frames: env_usize(lookup, "DRAGSORT_FRAMES").unwrap_or(defaults.frames),
            script: env_string(lookup, "DRAGSORT_SCRIPT").map(PathBuf::from),
            log_json: env_flag(lookup, "DRAGSORT_LOG_JSON").unwrap_or(defaults.log_json),
        }
    }
}

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn env_string(lookup: Lookup<'_>, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_flag(lookup: Lookup<'_>, name: &str) -> Option<bool> {
    let value = env_string(lookup, name)?;
    let enabled = matches!(
        value.as_str(),
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
    );
    Some(enabled)
}

fn env_u64(lookup: Lookup<'_>, name: &str) -> Option<u64> {
    env_string(lookup, name).and_then(|value| value.parse::<u64>().ok())
}

fn env_usize(lookup: Lookup<'_>, name: &str) -> Option<usize> {
    env_u64(lookup, name).and_then(|value| usize::try_from(value).ok())
}

fn env_f32(lookup: Lookup<'_>, name: &str) -> Option<f32> {
    env_string(lookup, name)
        .and_then(|value| value.parse::<f32>().ok())
        .filter(|value| value.is_finite())
}
