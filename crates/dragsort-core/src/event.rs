#![forbid(unsafe_code)]

//! Canonical host notifications.
//!
//! A view host (the scrollable list surface) forwards layout measurements,
//! scroll reports, gesture phases, and its next-frame callback into a drag
//! session as [`HostEvent`] values.
//!
//! # Design Notes
//!
//! - Pointer coordinates are absolute screen coordinates in logical pixels.
//! - `GestureMove` carries the absolute position; the session derives the
//!   cumulative delta from the start sample itself.
//! - `GestureEnd` and `GestureCancel` have the same effect on the session;
//!   they are kept apart so logs and statistics can tell them apart.

/// One pointer position sampled during a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSample {
    /// Horizontal position; only used for the drag-handle hit test.
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl PointerSample {
    /// Create a sample at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a sample at the left edge of the row (`x = 0`).
    #[must_use]
    pub const fn at_y(y: f32) -> Self {
        Self { x: 0.0, y }
    }
}

/// Notification from the view host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum HostEvent {
    /// The list viewport was laid out.
    ViewportMeasured {
        /// Viewport height.
        height: f32,
    },

    /// A row was laid out. Rows are assumed to share one height.
    RowMeasured {
        /// Row height.
        height: f32,
    },

    /// The list reported a new scroll position.
    Scrolled {
        /// Content offset from the top.
        offset: f32,
    },

    /// A touch began on a drag handle.
    GestureStart(PointerSample),

    /// The touch moved.
    GestureMove(PointerSample),

    /// The touch was released.
    GestureEnd,

    /// Another gesture took over, or the platform cancelled the touch.
    GestureCancel,

    /// The frame requested via `request_next_frame` is being produced.
    Frame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_constructors() {
        assert_eq!(PointerSample::at_y(3.5), PointerSample { x: 0.0, y: 3.5 });
        assert_eq!(PointerSample::new(1.0, 2.0).x, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_script_line_shapes() {
        let start: HostEvent =
            serde_json::from_str(r#"{"kind":"gesture_start","y":265.0}"#).expect("start");
        assert_eq!(start, HostEvent::GestureStart(PointerSample::at_y(265.0)));

        let measured: HostEvent =
            serde_json::from_str(r#"{"kind":"row_measured","height":60}"#).expect("row");
        assert_eq!(measured, HostEvent::RowMeasured { height: 60.0 });

        let frame: HostEvent = serde_json::from_str(r#"{"kind":"frame"}"#).expect("frame");
        assert_eq!(frame, HostEvent::Frame);
    }
}
