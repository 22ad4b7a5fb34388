// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the drag engine.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! slider calls at each step of a drag gesture. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::frame::FrameHandle;
use crate::id::SliderId;
use crate::input::PointerKind;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a slider starts a drag gesture.
#[derive(Clone, Copy, Debug)]
pub struct DragStartEvent {
    /// Which slider.
    pub slider: SliderId,
    /// Input family that started the drag.
    pub kind: PointerKind,
    /// Left edge of the bounds captured for this gesture.
    pub bounds_left: f64,
    /// Width of the bounds captured for this gesture.
    pub bounds_width: f64,
    /// Percentage applied immediately, or `None` if the event had no usable
    /// coordinate.
    pub percentage: Option<f64>,
}

/// Emitted when a move event requests a coalesced update.
#[derive(Clone, Copy, Debug)]
pub struct FrameRequestEvent {
    /// Which slider.
    pub slider: SliderId,
    /// Handle of the new request.
    pub handle: FrameHandle,
    /// Handle of the request this one cancelled, if any.
    pub superseded: Option<FrameHandle>,
}

/// Emitted when a frame callback applies a coalesced update.
#[derive(Clone, Copy, Debug)]
pub struct FrameApplyEvent {
    /// Which slider.
    pub slider: SliderId,
    /// Handle that fired.
    pub handle: FrameHandle,
    /// Percentage that was painted.
    pub percentage: f64,
}

/// Emitted when a frame callback arrives for a handle that is no longer
/// pending.
#[derive(Clone, Copy, Debug)]
pub struct StaleFrameEvent {
    /// Which slider.
    pub slider: SliderId,
    /// The stale handle.
    pub handle: FrameHandle,
}

/// Emitted when a slider ends a drag gesture.
#[derive(Clone, Copy, Debug)]
pub struct DragEndEvent {
    /// Which slider.
    pub slider: SliderId,
    /// Percentage left visible (the last applied one).
    pub percentage: f64,
    /// Pending update discarded by the release, if any.
    pub dropped: Option<FrameHandle>,
}

/// Per-gesture counters, reported when a drag ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureSummary {
    /// Which slider.
    pub slider: SliderId,
    /// Move events consumed.
    pub moves: u32,
    /// Frames requested.
    pub requested: u32,
    /// Requests cancelled by a newer move.
    pub superseded: u32,
    /// Frames that painted.
    pub applied: u32,
    /// Requests discarded by the release (0 or 1).
    pub dropped: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the drag engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a drag starts.
    fn on_drag_start(&mut self, e: &DragStartEvent) {
        _ = e;
    }

    /// Called when a move requests a coalesced update.
    fn on_frame_request(&mut self, e: &FrameRequestEvent) {
        _ = e;
    }

    /// Called when a coalesced update is painted.
    fn on_frame_apply(&mut self, e: &FrameApplyEvent) {
        _ = e;
    }

    /// Called when a stale frame callback is ignored.
    fn on_stale_frame(&mut self, e: &StaleFrameEvent) {
        _ = e;
    }

    /// Called when a drag ends.
    fn on_drag_end(&mut self, e: &DragEndEvent) {
        _ = e;
    }

    /// Called with the counters of a finished gesture.
    fn on_gesture_summary(&mut self, s: &GestureSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`DragStartEvent`].
    #[inline]
    pub fn drag_start(&mut self, e: &DragStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_drag_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameRequestEvent`].
    #[inline]
    pub fn frame_request(&mut self, e: &FrameRequestEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_request(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameApplyEvent`].
    #[inline]
    pub fn frame_apply(&mut self, e: &FrameApplyEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_apply(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StaleFrameEvent`].
    #[inline]
    pub fn stale_frame(&mut self, e: &StaleFrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stale_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DragEndEvent`].
    #[inline]
    pub fn drag_end(&mut self, e: &DragEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_drag_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GestureSummary`].
    #[inline]
    pub fn gesture_summary(&mut self, s: &GestureSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_gesture_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
