#![forbid(unsafe_code)]

//! The surface a drag session drives.
//!
//! A [`ViewHost`] is the scrollable list view: it renders the sequence, owns
//! real scroll physics, and produces frames. The session only ever asks it to
//! jump to an offset, to schedule one more frame, and to redraw.
//!
//! # Frame loop
//!
//! After `request_next_frame` the host must deliver exactly one
//! [`HostEvent::Frame`](dragsort_core::HostEvent::Frame) (or call
//! `DragSession::tick`) on its next frame. Requests made while one is already
//! pending collapse into that one. A tick that finds the session idle does not
//! request another frame, which ends the loop.

/// Outbound commands from a drag session.
pub trait ViewHost {
    /// Jump the list to `offset`. Offsets outside the content may be
    /// requested; clamping them is the host's job.
    fn scroll_to_offset(&mut self, offset: f32, animated: bool);

    /// Schedule one more tick on the next frame.
    fn request_next_frame(&mut self);

    /// The sequence, drag index, or ghost offset changed.
    fn request_redraw(&mut self) {}
}

impl<H: ViewHost + ?Sized> ViewHost for &mut H {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        (**self).scroll_to_offset(offset, animated);
    }

    fn request_next_frame(&mut self) {
        (**self).request_next_frame();
    }

    fn request_redraw(&mut self) {
        (**self).request_redraw();
    }
}

/// How the host should paint one row slot of the underlying list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    /// The slot holds the dragged item; the floating ghost stands in for it.
    pub dragging: bool,
}

impl RowState {
    /// Opacity for the slot: hidden while the ghost represents it.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        if self.dragging { 0.0 } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        scrolls: Vec<f32>,
        frames: usize,
        redraws: usize,
    }

    impl ViewHost for Counting {
        fn scroll_to_offset(&mut self, offset: f32, _animated: bool) {
            self.scrolls.push(offset);
        }

        fn request_next_frame(&mut self) {
            self.frames += 1;
        }
    }

    fn drive(host: &mut impl ViewHost) {
        host.scroll_to_offset(12.0, false);
        host.request_next_frame();
        host.request_redraw();
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut host = Counting::default();
        drive(&mut &mut host);
        assert_eq!(host.scrolls, vec![12.0]);
        assert_eq!(host.frames, 1);
        // Default redraw is a no-op.
        assert_eq!(host.redraws, 0);
    }

    #[test]
    fn dragged_slot_is_transparent() {
        assert_eq!(RowState { dragging: true }.opacity(), 0.0);
        assert_eq!(RowState::default().opacity(), 1.0);
    }
}
