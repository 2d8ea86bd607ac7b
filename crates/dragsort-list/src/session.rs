#![forbid(unsafe_code)]

//! Drag session state machine.
//!
//! [`DragSession`] binds the geometry tracker, reorder engine, and
//! auto-scroller into one single-writer state machine:
//!
//! ```text
//!            start(y0)                 release / terminate
//!   Idle ─────────────▶ Dragging ─────────────────────────▶ Idle
//!                        │    ▲
//!                        └────┘ move(y), tick
//! ```
//!
//! # Tick
//!
//! Each tick runs, in order:
//!
//! 1. auto-scroll: ask the [`AutoScroller`] for a delta at the latest pointer
//!    `y`, send `scroll_to_offset(offset + delta)` to the host, then record the
//!    predicted offset in the geometry tracker;
//! 2. recompute the target index from the (now updated) scroll offset;
//! 3. reorder when the target differs from the drag index.
//!
//! It then requests the next frame. A tick that finds the session idle does
//! nothing and requests nothing, which is how release and cancellation stop
//! the loop.
//!
//! # Invariants
//!
//! 1. While dragging, `drag_index < sequence().len()`.
//! 2. While idle, `drag_index()` is `None` and the ghost offset is zero.
//! 3. Scroll is applied before the index is recomputed within one tick.
//! 4. The sequence is final the moment the last reorder tick ran; release
//!    performs no extra commit.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Row height unmeasured at start | Gesture before first layout | Start ignored, stays idle |
//! | Row height lost mid-drag | Host reported 0 | Index held, no reorder |
//! | Viewport unmeasured | Gesture before list layout | No auto-scroll |
//! | Reorder index out of range | Sequence shrank mid-drag | Logged, tick continues |
//! | Non-finite pointer at start | Bad sample from host | Start ignored |
//! | Start outside drag handle | Touch on row body | Start ignored |

use dragsort_core::config::DragConfig;
use dragsort_core::event::{HostEvent, PointerSample};
use dragsort_core::geometry::{GeometryTracker, GhostOffset};

use crate::autoscroll::AutoScroller;
use crate::host::{RowState, ViewHost};
use crate::item::{Item, ItemId, Sequence};
use crate::reorder::{Reorder, ReorderEngine};

// ---------------------------------------------------------------------------
// Phase, outcome, statistics
// ---------------------------------------------------------------------------

/// Lifecycle phase of a [`DragSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A row is being dragged.
    Dragging,
}

impl DragPhase {
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The session was idle; no work was done and no frame was requested.
    Stopped,
    /// The tick ran and the next frame was requested.
    Continued {
        /// Auto-scroll delta sent to the host, if any.
        scroll_delta: Option<f32>,
        /// Reorder applied in this tick, if any.
        reorder: Option<Reorder>,
    },
}

impl TickOutcome {
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    #[must_use]
    pub const fn reorder(&self) -> Option<Reorder> {
        match self {
            Self::Continued { reorder, .. } => *reorder,
            Self::Stopped => None,
        }
    }

    #[must_use]
    pub const fn scroll_delta(&self) -> Option<f32> {
        match self {
            Self::Continued { scroll_delta, .. } => *scroll_delta,
            Self::Stopped => None,
        }
    }
}

/// Diagnostic counters. Never cleared by release or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragStats {
    pub drags_started: u64,
    pub ticks: u64,
    pub reorders: u64,
    pub scroll_steps: u64,
    pub releases: u64,
    pub cancellations: u64,
}

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// Single-writer drag-to-reorder state machine.
#[derive(Debug, Clone)]
pub struct DragSession {
    config: DragConfig,
    geometry: GeometryTracker,
    engine: ReorderEngine,
    scroller: AutoScroller,
    phase: DragPhase,
    drag_index: Option<usize>,
    dragged_id: Option<ItemId>,
    ghost: GhostOffset,
    /// Ghost `y` at drag start; the pointer delta is added to it.
    ghost_origin: f32,
    start_y: f32,
    latest_y: f32,
    stats: DragStats,
}

impl DragSession {
    /// Create an idle session over `items`.
    #[must_use]
    pub fn new(items: impl Into<Sequence>, config: DragConfig) -> Self {
        Self {
            geometry: GeometryTracker::new(config.top_inset),
            engine: ReorderEngine::new(items),
            scroller: AutoScroller::from_config(&config),
            config,
            phase: DragPhase::Idle,
            drag_index: None,
            dragged_id: None,
            ghost: GhostOffset::ZERO,
            ghost_origin: 0.0,
            start_y: 0.0,
            latest_y: 0.0,
            stats: DragStats::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Current index of the dragged item, `None` while idle.
    #[inline]
    #[must_use]
    pub fn drag_index(&self) -> Option<usize> {
        self.drag_index
    }

    #[inline]
    #[must_use]
    pub fn dragged_id(&self) -> Option<ItemId> {
        self.dragged_id
    }

    /// The item shown in the floating ghost.
    #[must_use]
    pub fn dragged_item(&self) -> Option<&Item> {
        self.drag_index.and_then(|ix| self.engine.get(ix))
    }

    #[inline]
    #[must_use]
    pub fn ghost_offset(&self) -> GhostOffset {
        self.ghost
    }

    /// Render order.
    #[inline]
    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        self.engine.sequence()
    }

    #[inline]
    #[must_use]
    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &GeometryTracker {
        &self.geometry
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> DragStats {
        self.stats
    }

    /// Latest pointer `y` seen during the current or last drag.
    #[inline]
    #[must_use]
    pub fn latest_y(&self) -> f32 {
        self.latest_y
    }

    /// Presentation of the row slot at `index`.
    #[must_use]
    pub fn row_state(&self, index: usize) -> RowState {
        RowState {
            dragging: self.is_dragging() && self.drag_index == Some(index),
        }
    }

    /// The host must disable its own scrolling while a drag is active.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        !self.is_dragging()
    }

    // -----------------------------------------------------------------------
    // Configuration and data
    // -----------------------------------------------------------------------

    /// Replace the configuration. Measured geometry is kept.
    pub fn set_config(&mut self, config: DragConfig) {
        self.geometry.set_top_inset(config.top_inset);
        self.scroller = AutoScroller::from_config(&config);
        self.config = config;
    }

    /// Replace the items. Any active drag is cancelled first.
    pub fn set_items<H: ViewHost + ?Sized>(&mut self, items: impl Into<Sequence>, host: &mut H) {
        if self.is_dragging() {
            self.terminate(host);
        }
        self.engine.set_items(items);
        host.request_redraw();
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Route one host notification.
    ///
    /// Returns the tick outcome for [`HostEvent::Frame`], `None` otherwise.
    pub fn handle_event<H: ViewHost + ?Sized>(
        &mut self,
        event: HostEvent,
        host: &mut H,
    ) -> Option<TickOutcome> {
        match event {
            HostEvent::ViewportMeasured { height } => self.geometry.set_viewport_height(height),
            HostEvent::RowMeasured { height } => self.geometry.set_row_height(height),
            HostEvent::Scrolled { offset } => self.geometry.set_scroll_offset(offset),
            HostEvent::GestureStart(sample) => {
                self.start(sample, host);
            }
            HostEvent::GestureMove(sample) => self.move_to(sample),
            HostEvent::GestureEnd => self.release(host),
            HostEvent::GestureCancel => self.terminate(host),
            HostEvent::Frame => return Some(self.tick(host)),
        }
        None
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// `Idle → Dragging`.
    ///
    /// Returns false (and stays idle) when already dragging, when the list is
    /// empty, when the row height is not yet measured, when the sample's `y`
    /// is not finite, or when the sample is outside the drag handle.
    pub fn start<H: ViewHost + ?Sized>(&mut self, sample: PointerSample, host: &mut H) -> bool {
        if self.is_dragging() {
            return false;
        }
        if self.engine.is_empty() || !self.geometry.has_row_height() {
            dragsort_core::trace!(
                rows = self.engine.len(),
                row_height = self.geometry.row_height(),
                "drag start ignored: nothing to drag yet"
            );
            return false;
        }
        if !sample.y.is_finite() {
            dragsort_core::trace!(y = sample.y, "drag start ignored: pointer not finite");
            return false;
        }
        if !self.config.accepts_start_x(sample.x) {
            return false;
        }

        let index = self.geometry.index_for_y(sample.y, self.engine.len());
        self.drag_index = Some(index);
        self.dragged_id = self.engine.get(index).map(|item| item.id);
        self.ghost_origin = self.geometry.row_top(index);
        self.ghost = GhostOffset::new(0.0, self.ghost_origin);
        self.start_y = sample.y;
        self.latest_y = sample.y;
        self.phase = DragPhase::Dragging;
        self.stats.drags_started += 1;

        dragsort_core::debug!(index, item = ?self.dragged_id, y = sample.y, "drag started");

        host.request_redraw();
        host.request_next_frame();
        true
    }

    /// Record a pointer sample and move the ghost by the cumulative delta.
    ///
    /// Ignored while idle.
    pub fn move_to(&mut self, sample: PointerSample) {
        if !self.is_dragging() || !sample.y.is_finite() {
            return;
        }
        self.latest_y = sample.y;
        self.update_ghost();
    }

    /// Advance one frame. See the module docs for the step order.
    pub fn tick<H: ViewHost + ?Sized>(&mut self, host: &mut H) -> TickOutcome {
        let Some(from) = self.drag_index.filter(|_| self.is_dragging()) else {
            return TickOutcome::Stopped;
        };

        let _span = dragsort_core::debug_span!(
            "drag_tick",
            drag_index = from,
            y = self.latest_y,
            scroll = self.geometry.scroll_offset()
        )
        .entered();

        self.stats.ticks += 1;
        let row_count = self.engine.len();

        let scroll_delta = self
            .scroller
            .evaluate(self.latest_y, self.geometry.viewport_height());
        if let Some(delta) = scroll_delta {
            let requested = self.geometry.scroll_offset() + delta;
            host.scroll_to_offset(requested, false);
            let predicted = self.geometry.clamp_scroll_offset(requested, row_count);
            self.geometry.set_scroll_offset(predicted);
            self.stats.scroll_steps += 1;
        }

        let target = self.geometry.index_for_y(self.latest_y, row_count);
        let mut applied = None;
        if target != from {
            match self.engine.reorder(from, target) {
                Ok(reorder) => {
                    dragsort_core::debug!(
                        item = reorder.item_id,
                        from = reorder.from,
                        to = reorder.to,
                        "reordered"
                    );
                    self.drag_index = Some(reorder.to);
                    self.stats.reorders += 1;
                    applied = Some(reorder);
                    host.request_redraw();
                }
                Err(_err) => {
                    dragsort_core::warn!(error = %_err, "reorder skipped");
                }
            }
        }

        self.update_ghost();
        host.request_next_frame();
        TickOutcome::Continued {
            scroll_delta,
            reorder: applied,
        }
    }

    /// `Dragging → Idle` on release. The order is already final.
    pub fn release<H: ViewHost + ?Sized>(&mut self, host: &mut H) {
        if self.is_dragging() {
            self.stats.releases += 1;
            dragsort_core::debug!(
                index = ?self.drag_index,
                item = ?self.dragged_id,
                "drag released"
            );
        }
        self.reset(host);
    }

    /// `Dragging → Idle` when the gesture is taken away.
    pub fn terminate<H: ViewHost + ?Sized>(&mut self, host: &mut H) {
        if self.is_dragging() {
            self.stats.cancellations += 1;
            dragsort_core::debug!(
                index = ?self.drag_index,
                item = ?self.dragged_id,
                "drag cancelled"
            );
        }
        self.reset(host);
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn update_ghost(&mut self) {
        self.ghost = GhostOffset::new(0.0, self.ghost_origin + (self.latest_y - self.start_y));
    }

    fn reset<H: ViewHost + ?Sized>(&mut self, host: &mut H) {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        self.drag_index = None;
        self.dragged_id = None;
        self.ghost = GhostOffset::ZERO;
        self.ghost_origin = 0.0;
        if was_dragging {
            host.request_redraw();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
