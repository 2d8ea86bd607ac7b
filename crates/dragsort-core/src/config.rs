#![forbid(unsafe_code)]

//! Drag interaction constants.
//!
//! All distances are logical pixels in the host's coordinate space. Pointer
//! `y` values are absolute screen coordinates, so [`DragConfig::top_inset`]
//! is the distance from the top of the screen to the first row of the list.

use std::fmt;

/// Default distance from the top of the screen to the list's first row.
pub const DEFAULT_TOP_INSET: f32 = 55.0;

/// Default height of the auto-scroll proximity band at each viewport edge.
pub const DEFAULT_SCROLL_BAND: f32 = 100.0;

/// Default scroll distance applied per tick while inside a proximity band.
pub const DEFAULT_SCROLL_STEP: f32 = 5.0;

// ---------------------------------------------------------------------------
// DragConfig
// ---------------------------------------------------------------------------

/// Tunables for drag detection, index mapping, and auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragConfig {
    /// Fixed vertical offset of the list's first row from the top of the
    /// screen (default: 55).
    pub top_inset: f32,
    /// Height of the proximity band at the top and bottom edges (default: 100).
    pub scroll_band: f32,
    /// Constant auto-scroll step per tick (default: 5). No velocity ramp.
    pub scroll_step: f32,
    /// Width of the drag handle measured from the row's left edge.
    ///
    /// `None` (default) accepts a gesture start anywhere on the row; use this
    /// when the host already routes only handle touches to the session.
    pub drag_handle_width: Option<f32>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            top_inset: DEFAULT_TOP_INSET,
            scroll_band: DEFAULT_SCROLL_BAND,
            scroll_step: DEFAULT_SCROLL_STEP,
            drag_handle_width: None,
        }
    }
}

impl DragConfig {
    /// Set the top inset.
    #[must_use]
    pub fn with_top_inset(mut self, inset: f32) -> Self {
        self.top_inset = inset;
        self
    }

    /// Set the auto-scroll proximity band height.
    #[must_use]
    pub fn with_scroll_band(mut self, band: f32) -> Self {
        self.scroll_band = band;
        self
    }

    /// Set the auto-scroll step.
    #[must_use]
    pub fn with_scroll_step(mut self, step: f32) -> Self {
        self.scroll_step = step;
        self
    }

    /// Restrict drag start to a left-side handle of the given width.
    #[must_use]
    pub fn with_drag_handle_width(mut self, width: f32) -> Self {
        self.drag_handle_width = Some(width);
        self
    }

    /// Allow a drag to start from anywhere on the row.
    #[must_use]
    pub fn drag_on_row(mut self) -> Self {
        self.drag_handle_width = None;
        self
    }

    /// Returns true if a gesture starting at horizontal position `x` lies on
    /// the drag handle.
    #[must_use]
    pub fn accepts_start_x(&self, x: f32) -> bool {
        match self.drag_handle_width {
            Some(width) => x.is_finite() && (0.0..=width).contains(&x),
            None => true,
        }
    }

    /// Check that every field is usable.
    ///
    /// Distances must be finite and non-negative; the scroll step must also
    /// be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_distance("top_inset", self.top_inset)?;
        check_distance("scroll_band", self.scroll_band)?;
        check_distance("scroll_step", self.scroll_step)?;
        if self.scroll_step == 0.0 {
            return Err(ConfigError::NonPositiveStep);
        }
        if let Some(width) = self.drag_handle_width {
            check_distance("drag_handle_width", width)?;
        }
        Ok(())
    }
}

fn check_distance(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Reason a [`DragConfig`] was rejected by [`DragConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A distance was NaN or infinite.
    NonFinite { field: &'static str, value: f32 },
    /// A distance was below zero.
    Negative { field: &'static str, value: f32 },
    /// The auto-scroll step was zero.
    NonPositiveStep,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::NonPositiveStep => write!(f, "scroll_step must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}
