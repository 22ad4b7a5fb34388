// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-coalescing contract.
//!
//! Input events are cheap and may arrive faster than the display refreshes.
//! A slider therefore never paints from a move event directly: it asks a
//! [`FrameScheduler`] for a callback on the next display frame and paints
//! from there. Asking again before that frame fires first cancels the
//! outstanding request, so each slider has at most one pending update at a
//! time and a burst of moves collapses into a single paint.
//!
//! Backends provide the real scheduler (e.g. `requestAnimationFrame` on the
//! web). [`ManualScheduler`] lets the host decide when a frame happens, which
//! is what tests and simulations need.

use alloc::vec::Vec;
use core::fmt;

use crate::id::SliderId;

/// Opaque token naming one requested frame callback.
///
/// A handle is valid from [`FrameScheduler::request_frame`] until either its
/// callback fires or it is passed to [`FrameScheduler::cancel_frame`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

impl fmt::Debug for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameHandle({})", self.0)
    }
}

/// Schedules one-shot callbacks on the next display frame.
///
/// When a requested frame fires, the host must route `(target, handle)` to
/// [`SliderSet::on_frame`](crate::registry::SliderSet::on_frame). A
/// cancelled handle must never be delivered; if one arrives anyway the
/// slider ignores it.
pub trait FrameScheduler {
    /// Requests a callback for `target` on the next display frame.
    fn request_frame(&mut self, target: SliderId) -> FrameHandle;

    /// Cancels a previously requested callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A [`FrameScheduler`] whose frames happen when the host says so.
///
/// Call [`fire_due`](Self::fire_due) to simulate one display frame: it drains
/// every request made since the previous frame, in request order.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: u64,
    queued: Vec<(SliderId, FrameHandle)>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Creates a scheduler with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of requests waiting for the next frame.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Returns `true` if `handle` is waiting for the next frame.
    #[must_use]
    pub fn is_queued(&self, handle: FrameHandle) -> bool {
        self.queued.iter().any(|&(_, h)| h == handle)
    }

    /// Total requests made over the scheduler's lifetime.
    #[must_use]
    pub fn requested_total(&self) -> u64 {
        self.requested
    }

    /// Total cancellations of still-queued requests.
    #[must_use]
    pub fn cancelled_total(&self) -> u64 {
        self.cancelled
    }

    /// Ends the current frame interval, returning the callbacks that are due.
    #[must_use]
    pub fn fire_due(&mut self) -> Vec<(SliderId, FrameHandle)> {
        core::mem::take(&mut self.queued)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, target: SliderId) -> FrameHandle {
        // Start at 1 like `requestAnimationFrame` ids.
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.queued.push((target, handle));
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queued.len();
        self.queued.retain(|&(_, h)| h != handle);
        if self.queued.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_nonzero() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame(SliderId(0));
        let b = s.request_frame(SliderId(0));
        assert_ne!(a, b);
        assert_ne!(a, FrameHandle(0));
    }

    #[test]
    fn cancel_removes_only_that_request() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame(SliderId(0));
        let b = s.request_frame(SliderId(1));
        s.cancel_frame(a);
        assert!(!s.is_queued(a));
        assert!(s.is_queued(b));
        assert_eq!(s.cancelled_total(), 1);
    }

    #[test]
    fn cancelling_unknown_handle_is_ignored() {
        let mut s = ManualScheduler::new();
        s.cancel_frame(FrameHandle(99));
        assert_eq!(s.cancelled_total(), 0);
    }

    #[test]
    fn fire_due_drains_in_request_order() {
        let mut s = ManualScheduler::new();
        let a = s.request_frame(SliderId(2));
        let b = s.request_frame(SliderId(0));
        assert_eq!(s.fire_due(), [(SliderId(2), a), (SliderId(0), b)]);
        assert_eq!(s.queued_len(), 0);
        assert!(s.fire_due().is_empty());
    }
}
