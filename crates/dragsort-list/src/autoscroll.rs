#![forbid(unsafe_code)]

//! Edge auto-scroll while dragging.
//!
//! The scroller only recommends a delta; applying it to the host and to the
//! geometry tracker is the drag session's job, because the host does not
//! report the new offset synchronously.
//!
//! ```text
//!  y = 0 ─────────────────────────────
//!         top inset
//!  ───────────────────────── list top
//!         band           → −step
//!  ─────────────────────────
//!         (no scroll)
//!  ───────────────────────── viewport_height − band
//!         band           → +step
//!  ───────────────────────── viewport_height
//! ```
//!
//! The bottom test compares the absolute pointer `y` with the viewport height
//! directly, without adding the top inset.

use dragsort_core::config::DragConfig;

/// Recommends a constant scroll step inside the edge proximity bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScroller {
    band: f32,
    step: f32,
    top_inset: f32,
}

impl AutoScroller {
    #[must_use]
    pub const fn new(band: f32, step: f32, top_inset: f32) -> Self {
        Self {
            band,
            step,
            top_inset,
        }
    }

    #[must_use]
    pub fn from_config(config: &DragConfig) -> Self {
        Self::new(config.scroll_band, config.scroll_step, config.top_inset)
    }

    #[must_use]
    pub fn band(&self) -> f32 {
        self.band
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Scroll delta for a pointer at `pointer_y`, or `None` outside both bands.
    ///
    /// Positive near the bottom edge, negative near the top edge. The bottom
    /// band wins when the two overlap on a very short viewport. An unmeasured
    /// viewport never scrolls.
    #[must_use]
    pub fn evaluate(&self, pointer_y: f32, viewport_height: f32) -> Option<f32> {
        if !viewport_height.is_finite() || viewport_height <= 0.0 || !pointer_y.is_finite() {
            return None;
        }

        if pointer_y + self.band > viewport_height {
            Some(self.step)
        } else if pointer_y < self.band + self.top_inset {
            Some(-self.step)
        } else {
            None
        }
    }
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self::from_config(&DragConfig::default())
    }
}
