#![forbid(unsafe_code)]

//! Logging macros for every dragsort crate.
//!
//! Call sites always go through this crate (`dragsort_core::debug!(..)`,
//! `crate::trace!(..)` inside core). With the `tracing` feature these are the
//! `tracing` macros; without it they swallow their arguments, so field
//! expressions are never evaluated.
//!
//! Only the levels the drag loop uses are provided: `trace` for skipped
//! geometry, `debug` for lifecycle and reorders, `warn` for rejected
//! reorders, and the `debug_span` wrapped around each tick.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod off {
    /// Swallows a `trace!` call.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Swallows a `debug!` call.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Swallows a `warn!` call.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Yields an [`InertSpan`](crate::logging::InertSpan).
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::InertSpan
        };
    }
}

/// What `debug_span!` yields when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct InertSpan;

#[cfg(not(feature = "tracing"))]
impl InertSpan {
    /// Mirrors `tracing::Span::entered`; the guard holds nothing.
    #[must_use]
    pub fn entered(self) -> InertSpan {
        self
    }
}
