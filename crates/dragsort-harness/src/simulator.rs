#![forbid(unsafe_code)]

//! Deterministic host simulator for testing.
//!
//! [`SimulatedHost`] stands in for a real scrollable list: it settles scroll
//! requests inside the content extent, remembers whether a frame was
//! requested, and records every outbound command. [`Simulator`] wires it to a
//! [`DragSession`] and produces frames on demand, so drag scenarios run
//! without any UI and with no timing dependence.
//!
//! Scroll reports are delayed by one frame: a scroll requested during a tick
//! is reported back as [`HostEvent::Scrolled`] just before the next tick,
//! mirroring a host whose scroll callback arrives after the frame.
//!
//! # Example
//!
//! ```
//! use dragsort_core::DragConfig;
//! use dragsort_harness::{Simulator, sample_items};
//!
//! let mut sim = Simulator::new(sample_items(15), DragConfig::default(), 1_000.0, 60.0);
//! assert!(sim.press_row(3));
//! sim.drag_to_row(7);
//! sim.run_frame();
//! sim.release();
//!
//! assert_eq!(sim.sequence().ids()[7], 4);
//! ```

use dragsort_core::{DragConfig, HostEvent, PointerSample};
use dragsort_list::{DragSession, DragStats, ItemId, Sequence, TickOutcome, ViewHost};
use serde::Serialize;

/// Record of an outbound command the session issued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HostCommand {
    /// `scroll_to_offset` with the requested (unclamped) offset.
    ScrollTo { offset: f32, animated: bool },
    /// `request_next_frame`.
    RequestFrame,
    /// `request_redraw`.
    Redraw,
}

// ---------------------------------------------------------------------------
// SimulatedHost
// ---------------------------------------------------------------------------

/// In-memory [`ViewHost`] with uniform rows.
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    viewport_height: f32,
    row_height: f32,
    row_count: usize,
    scroll_offset: f32,
    /// Settled offset not yet reported to the session.
    pending_scroll: Option<f32>,
    frame_pending: bool,
    commands: Vec<HostCommand>,
}

impl SimulatedHost {
    #[must_use]
    pub fn new(viewport_height: f32, row_height: f32, row_count: usize) -> Self {
        Self {
            viewport_height,
            row_height,
            row_count,
            scroll_offset: 0.0,
            pending_scroll: None,
            frame_pending: false,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    #[must_use]
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// The host's actual scroll position.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.scroll_offset = self.settle(self.scroll_offset);
    }

    /// Largest offset the list can scroll to.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f32 {
        (self.row_count as f32 * self.row_height - self.viewport_height).max(0.0)
    }

    /// Scroll as the user would, with the report still pending.
    pub fn user_scroll(&mut self, offset: f32) -> f32 {
        self.scroll_offset = self.settle(offset);
        self.pending_scroll = Some(self.scroll_offset);
        self.scroll_offset
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Consume the pending frame request.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }

    /// Consume the pending scroll report.
    pub fn take_scroll_report(&mut self) -> Option<f32> {
        self.pending_scroll.take()
    }

    /// Every command issued so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Offsets passed to `scroll_to_offset`, as requested.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<f32> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                HostCommand::ScrollTo { offset, .. } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn frame_requests(&self) -> usize {
        self.count(|cmd| matches!(cmd, HostCommand::RequestFrame))
    }

    #[must_use]
    pub fn redraws(&self) -> usize {
        self.count(|cmd| matches!(cmd, HostCommand::Redraw))
    }

    fn count(&self, pred: impl Fn(&HostCommand) -> bool) -> usize {
        self.commands.iter().filter(|cmd| pred(cmd)).count()
    }

    fn settle(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return self.scroll_offset;
        }
        offset.max(0.0).min(self.max_scroll_offset())
    }
}

impl ViewHost for SimulatedHost {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        self.commands.push(HostCommand::ScrollTo { offset, animated });
        self.scroll_offset = self.settle(offset);
        self.pending_scroll = Some(self.scroll_offset);
    }

    fn request_next_frame(&mut self) {
        self.commands.push(HostCommand::RequestFrame);
        self.frame_pending = true;
    }

    fn request_redraw(&mut self) {
        self.commands.push(HostCommand::Redraw);
    }
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

/// Final state of a simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Item ids in their final order.
    pub order: Vec<ItemId>,
    pub frames: u64,
    pub drags_started: u64,
    pub reorders: u64,
    pub scroll_steps: u64,
    pub releases: u64,
    pub cancellations: u64,
    pub scroll_offset: f32,
    pub dragging: bool,
}

/// Drives a [`DragSession`] against a [`SimulatedHost`].
#[derive(Debug, Clone)]
pub struct Simulator {
    session: DragSession,
    host: SimulatedHost,
    /// Every event delivered to the session, for replay.
    events: Vec<HostEvent>,
    outcomes: Vec<TickOutcome>,
    frames: u64,
}

impl Simulator {
    /// Create a simulator whose list has already been laid out.
    #[must_use]
    pub fn new(
        items: impl Into<Sequence>,
        config: DragConfig,
        viewport_height: f32,
        row_height: f32,
    ) -> Self {
        Self::unmeasured(items, config, viewport_height, row_height)
            .measured(viewport_height, row_height)
    }

    /// Create a simulator whose session has not seen any layout yet.
    #[must_use]
    pub fn unmeasured(
        items: impl Into<Sequence>,
        config: DragConfig,
        viewport_height: f32,
        row_height: f32,
    ) -> Self {
        let session = DragSession::new(items, config);
        let host = SimulatedHost::new(viewport_height, row_height, session.sequence().len());
        Self {
            session,
            host,
            events: Vec::new(),
            outcomes: Vec::new(),
            frames: 0,
        }
    }

    fn measured(mut self, viewport_height: f32, row_height: f32) -> Self {
        self.send(HostEvent::ViewportMeasured {
            height: viewport_height,
        });
        self.send(HostEvent::RowMeasured { height: row_height });
        self
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    #[must_use]
    pub fn host(&self) -> &SimulatedHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SimulatedHost {
        &mut self.host
    }

    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        self.session.sequence()
    }

    #[must_use]
    pub fn stats(&self) -> DragStats {
        self.session.stats()
    }

    /// Outcomes of every tick run so far.
    #[must_use]
    pub fn outcomes(&self) -> &[TickOutcome] {
        &self.outcomes
    }

    /// Events delivered to the session so far.
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Screen `y` of the middle of row `index` at the current scroll offset.
    #[must_use]
    pub fn y_for_row(&self, index: usize) -> f32 {
        let geo = self.session.geometry();
        geo.top_inset() + geo.row_top(index) + geo.row_height() / 2.0
    }

    // -----------------------------------------------------------------------
    // Event injection
    // -----------------------------------------------------------------------

    /// Deliver one host event. Frames go through [`frame`](Self::frame).
    pub fn send(&mut self, event: HostEvent) -> Option<TickOutcome> {
        if event == HostEvent::Frame {
            return Some(self.frame());
        }
        self.events.push(event);
        self.session.handle_event(event, &mut self.host)
    }

    /// Deliver events in order, stopping at nothing.
    pub fn replay(&mut self, events: impl IntoIterator<Item = HostEvent>) {
        for event in events {
            self.send(event);
        }
    }

    /// Scroll the list as the user would and report it immediately.
    pub fn scroll_to(&mut self, offset: f32) {
        let settled = self.host.user_scroll(offset);
        self.host.take_scroll_report();
        self.send(HostEvent::Scrolled { offset: settled });
    }

    /// Start a drag at screen `y`.
    pub fn press_at(&mut self, y: f32) -> bool {
        self.send(HostEvent::GestureStart(PointerSample::at_y(y)));
        self.session.is_dragging()
    }

    /// Start a drag on the middle of row `index`.
    pub fn press_row(&mut self, index: usize) -> bool {
        self.press_at(self.y_for_row(index))
    }

    pub fn drag_to(&mut self, y: f32) {
        self.send(HostEvent::GestureMove(PointerSample::at_y(y)));
    }

    pub fn drag_to_row(&mut self, index: usize) {
        self.drag_to(self.y_for_row(index));
    }

    pub fn release(&mut self) {
        self.send(HostEvent::GestureEnd);
    }

    pub fn cancel(&mut self) {
        self.send(HostEvent::GestureCancel);
    }

    /// Replace the list contents.
    pub fn set_items(&mut self, items: impl Into<Sequence>) {
        self.session.set_items(items, &mut self.host);
        self.host.set_row_count(self.session.sequence().len());
    }

    // -----------------------------------------------------------------------
    // Frames
    // -----------------------------------------------------------------------

    /// Produce one frame unconditionally.
    ///
    /// A pending scroll report is delivered first, then the session ticks.
    pub fn frame(&mut self) -> TickOutcome {
        self.host.take_frame_request();
        if let Some(offset) = self.host.take_scroll_report() {
            self.send(HostEvent::Scrolled { offset });
        }
        self.events.push(HostEvent::Frame);
        self.frames += 1;
        let outcome = self.session.tick(&mut self.host);
        self.outcomes.push(outcome);
        outcome
    }

    /// Produce a frame only if the session asked for one.
    pub fn run_frame(&mut self) -> Option<TickOutcome> {
        if self.host.frame_pending() {
            Some(self.frame())
        } else {
            None
        }
    }

    /// Run up to `max` requested frames; returns how many ran.
    pub fn run_frames(&mut self, max: usize) -> usize {
        let mut ran = 0;
        while ran < max && self.run_frame().is_some() {
            ran += 1;
        }
        ran
    }

    /// Drag row `from` to row `to`, let `frames` frames run, and release.
    ///
    /// Returns false if the drag did not start.
    pub fn drag_row(&mut self, from: usize, to: usize, frames: usize) -> bool {
        if !self.press_row(from) {
            return false;
        }
        self.drag_to_row(to);
        self.run_frames(frames.max(1));
        self.release();
        self.run_frame();
        true
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let stats = self.session.stats();
        RunSummary {
            order: self.session.sequence().ids(),
            frames: self.frames,
            drags_started: stats.drags_started,
            reorders: stats.reorders,
            scroll_steps: stats.scroll_steps,
            releases: stats.releases,
            cancellations: stats.cancellations,
            scroll_offset: self.host.scroll_offset(),
            dragging: self.session.is_dragging(),
        }
    }
}
