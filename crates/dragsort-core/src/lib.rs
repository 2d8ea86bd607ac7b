#![forbid(unsafe_code)]

//! Core: list geometry, host events, and drag configuration.
//!
//! # Role in dragsort
//! `dragsort-core` is the measurement layer. It owns the viewport/row/scroll
//! bookkeeping that turns raw pointer coordinates into row indices, the
//! canonical notifications a view host forwards into a drag session, and the
//! tunable constants shared by every other crate.
//!
//! # Primary responsibilities
//! - **GeometryTracker**: last-write-wins layout state and `index_for_y`.
//! - **HostEvent**: layout, scroll, gesture, and frame notifications.
//! - **DragConfig**: top inset, auto-scroll band and step, drag handle width.
//!
//! # How it fits in the system
//! `dragsort-list` builds the reorder engine, auto-scroller, and drag session
//! on top of these types. Nothing here allocates per event or performs I/O.

pub mod config;
pub mod event;
pub mod geometry;
pub mod logging;

pub use config::{ConfigError, DragConfig};
pub use event::{HostEvent, PointerSample};
pub use geometry::{GeometryState, GeometryTracker, GhostOffset};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
