#![forbid(unsafe_code)]

//! List geometry and pointer-to-row mapping.
//!
//! [`GeometryTracker`] keeps the three measurements a drag needs (viewport
//! height, row height, scroll offset) and maps an absolute pointer `y` to a
//! logical row index:
//!
//! ```text
//! index = floor((y - top_inset + scroll_offset) / row_height)
//! ```
//!
//! clamped to `[0, row_count - 1]`.
//!
//! # Invariants
//!
//! 1. `index_for_y` never returns an index outside `[0, row_count - 1]` for a
//!    non-empty list.
//! 2. While the row height is unmeasured (zero, negative, or non-finite) the
//!    previously returned index is returned, clamped to the current row
//!    count. No division happens.
//! 3. Setters are last-write-wins and never fail.
//!
//! # Limitations
//!
//! Rows are assumed to share one height, learned from whichever row reports a
//! layout. Lists whose rows differ in height get an approximate mapping.

/// Raw measurements reported by the view host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryState {
    /// Height of the list viewport (0 until measured).
    pub viewport_height: f32,
    /// Height of one row (0 until measured).
    pub row_height: f32,
    /// Current content scroll offset.
    pub scroll_offset: f32,
}

/// Translation of the floating drag copy of a row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GhostOffset {
    pub x: f32,
    pub y: f32,
}

impl GhostOffset {
    /// The resting value, used whenever no drag is active.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[inline]
fn is_measured(length: f32) -> bool {
    length.is_finite() && length > 0.0
}

// ---------------------------------------------------------------------------
// GeometryTracker
// ---------------------------------------------------------------------------

/// Tracks list layout and converts pointer positions to row indices.
#[derive(Debug, Clone)]
pub struct GeometryTracker {
    state: GeometryState,
    /// Offset of the first row from the top of the screen.
    top_inset: f32,
    /// Last index handed out by `index_for_y`.
    last_index: usize,
}

impl GeometryTracker {
    /// Create a tracker with nothing measured yet.
    #[must_use]
    pub fn new(top_inset: f32) -> Self {
        Self {
            state: GeometryState::default(),
            top_inset,
            last_index: 0,
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.state.viewport_height = height;
    }

    pub fn set_row_height(&mut self, height: f32) {
        self.state.row_height = height;
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.state.scroll_offset = offset;
    }

    /// Change the top inset (e.g. after a configuration reload).
    pub fn set_top_inset(&mut self, inset: f32) {
        self.top_inset = inset;
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GeometryState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.state.viewport_height
    }

    #[inline]
    #[must_use]
    pub fn row_height(&self) -> f32 {
        self.state.row_height
    }

    #[inline]
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.state.scroll_offset
    }

    #[inline]
    #[must_use]
    pub fn top_inset(&self) -> f32 {
        self.top_inset
    }

    /// Returns true once a usable row height has been reported.
    #[inline]
    #[must_use]
    pub fn has_row_height(&self) -> bool {
        is_measured(self.state.row_height)
    }

    /// Returns true once a usable viewport height has been reported.
    #[inline]
    #[must_use]
    pub fn has_viewport(&self) -> bool {
        is_measured(self.state.viewport_height)
    }

    /// The index most recently returned by [`index_for_y`](Self::index_for_y).
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Map an absolute pointer `y` to a row index in `[0, row_count - 1]`.
    ///
    /// Returns the previous index when the row height is unmeasured, when
    /// `y` is not finite, or when the list is empty. The previous index is
    /// clamped to the current `row_count`, so a list that shrank since the
    /// last call still gets an in-range answer.
    pub fn index_for_y(&mut self, y: f32, row_count: usize) -> usize {
        self.last_index = match self.try_index_for_y(y, row_count) {
            Some(index) => index,
            None if row_count > 0 => self.last_index.min(row_count - 1),
            None => self.last_index,
        };
        self.last_index
    }

    /// Like [`index_for_y`](Self::index_for_y) but reports the degenerate
    /// cases as `None` and does not update the remembered index.
    #[must_use]
    pub fn try_index_for_y(&self, y: f32, row_count: usize) -> Option<usize> {
        if row_count == 0 {
            return None;
        }
        if !self.has_row_height() {
            crate::trace!(
                row_height = self.state.row_height,
                "row height not measured; keeping previous index"
            );
            return None;
        }

        let raw = ((y - self.top_inset + self.state.scroll_offset) / self.state.row_height).floor();
        if raw.is_nan() {
            return None;
        }

        let last = row_count - 1;
        if raw <= 0.0 {
            Some(0)
        } else if raw >= last as f32 {
            Some(last)
        } else {
            Some(raw as usize)
        }
    }

    /// On-screen top of row `index`, relative to the list's first-row origin.
    #[must_use]
    pub fn row_top(&self, index: usize) -> f32 {
        index as f32 * self.state.row_height - self.state.scroll_offset
    }

    /// Largest scroll offset the host can settle on, once both heights are
    /// known.
    #[must_use]
    pub fn max_scroll_offset(&self, row_count: usize) -> Option<f32> {
        if !self.has_row_height() || !self.has_viewport() {
            return None;
        }
        let content = row_count as f32 * self.state.row_height;
        Some((content - self.state.viewport_height).max(0.0))
    }

    /// Predict where the host will settle a requested scroll offset.
    ///
    /// The lower bound is always 0; the upper bound applies only once the
    /// content extent is known.
    #[must_use]
    pub fn clamp_scroll_offset(&self, offset: f32, row_count: usize) -> f32 {
        let lower = offset.max(0.0);
        match self.max_scroll_offset(row_count) {
            Some(max) => lower.min(max),
            None => lower,
        }
    }
}

impl Default for GeometryTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOP_INSET)
    }
}
