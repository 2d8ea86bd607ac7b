#![forbid(unsafe_code)]

//! Drag-to-reorder for uniform-height lists.
//!
//! # Role in dragsort
//! `dragsort-list` turns pointer gestures into reorders. It owns the item
//! order, decides when the list should auto-scroll, and drives the per-frame
//! drag loop against a [`ViewHost`].
//!
//! # Primary responsibilities
//! - **ReorderEngine**: sole writer of the order; remove-then-insert moves.
//! - **AutoScroller**: constant-step scrolling inside the edge bands.
//! - **DragSession**: `Idle`/`Dragging` state machine and the frame tick.
//! - **ViewHost**: the outbound surface (scroll, next frame, redraw).
//!
//! # Example
//!
//! ```
//! use dragsort_core::{DragConfig, HostEvent, PointerSample};
//! use dragsort_list::{DragSession, Item, ViewHost};
//!
//! struct Host;
//! impl ViewHost for Host {
//!     fn scroll_to_offset(&mut self, _offset: f32, _animated: bool) {}
//!     fn request_next_frame(&mut self) {}
//! }
//!
//! let items: Vec<Item> = (1..=5).map(|id| Item::new(id, id.to_string())).collect();
//! let mut session = DragSession::new(items, DragConfig::default());
//! let mut host = Host;
//!
//! session.handle_event(HostEvent::ViewportMeasured { height: 600.0 }, &mut host);
//! session.handle_event(HostEvent::RowMeasured { height: 50.0 }, &mut host);
//! session.handle_event(HostEvent::GestureStart(PointerSample::at_y(180.0)), &mut host);
//! session.handle_event(HostEvent::GestureMove(PointerSample::at_y(330.0)), &mut host);
//! session.handle_event(HostEvent::Frame, &mut host);
//! session.handle_event(HostEvent::GestureEnd, &mut host);
//!
//! assert_eq!(session.sequence().ids(), vec![1, 2, 4, 5, 3]);
//! ```

pub mod autoscroll;
pub mod host;
pub mod item;
pub mod reorder;
pub mod session;

pub use autoscroll::AutoScroller;
pub use host::{RowState, ViewHost};
pub use item::{Item, ItemId, Sequence};
pub use reorder::{Reorder, ReorderEngine, ReorderError};
pub use session::{DragPhase, DragSession, DragStats, TickOutcome};
