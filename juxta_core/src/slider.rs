// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-widget drag state machine.
//!
//! A [`Slider`] is either idle or dragging. While dragging it holds the
//! container bounds captured when the gesture began, so layout is queried
//! once per gesture rather than once per event.
//!
//! ```text
//!            start_drag (measure, paint now)
//!   Idle ──────────────────────────────────► Dragging { bounds }
//!    ▲                                          │   ▲
//!    │  end_drag (cancel pending, no paint)     │   │ drag (cancel + request frame)
//!    └──────────────────────────────────────────┘───┘
//! ```
//!
//! The split percentage is the only stored visual state; the clip and handle
//! position are derived from it on every paint. Moves never paint directly:
//! they park the latest sample in a single pending frame and the frame
//! callback paints it. Releasing discards a pending frame instead of flushing
//! it, so the last painted position is where the slider settles.

use kurbo::Rect;

use crate::backend::SplitSurface;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::geometry::{Percentage, SplitVisual, split_percentage};
use crate::id::SliderId;
use crate::input::{PointerInput, PointerSample};
use crate::trace::{
    DragEndEvent, DragStartEvent, FrameApplyEvent, FrameRequestEvent, GestureSummary,
    StaleFrameEvent, Tracer,
};

/// Configuration for new sliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    /// Split shown before the first drag, in percent (clamped to `[0, 100]`).
    pub initial_percentage: f64,
}

impl SliderConfig {
    /// Default configuration: split in the middle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_percentage: 50.0,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a slider is being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    Idle,
    /// A gesture is in progress.
    Dragging {
        /// Container bounds captured when the gesture started.
        bounds: Rect,
    },
}

/// A coalesced update waiting for its frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingFrame {
    /// The scheduler request that will paint it.
    pub handle: FrameHandle,
    /// The most recent sample; it replaces any older one.
    pub sample: PointerSample,
}

/// One comparison widget's drag state.
#[derive(Debug)]
pub struct Slider<P> {
    id: SliderId,
    surface: P,
    state: DragState,
    percentage: Percentage,
    pending: Option<PendingFrame>,
    gesture: GestureSummary,
}

impl<P: SplitSurface> Slider<P> {
    /// Creates an idle slider and paints its initial split.
    pub fn new(id: SliderId, surface: P, config: SliderConfig) -> Self {
        let mut slider = Self {
            id,
            surface,
            state: DragState::Idle,
            percentage: Percentage::HALF,
            pending: None,
            gesture: GestureSummary {
                slider: id,
                ..GestureSummary::default()
            },
        };
        slider.paint(Percentage::new_clamped(config.initial_percentage));
        slider
    }

    /// Returns this slider's id.
    #[must_use]
    pub fn id(&self) -> SliderId {
        self.id
    }

    /// Returns the current split.
    #[must_use]
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    /// Returns the drag state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns `true` between a start and its matching end.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Returns the bounds cached for the current gesture.
    #[must_use]
    pub fn cached_bounds(&self) -> Option<Rect> {
        match self.state {
            DragState::Dragging { bounds } => Some(bounds),
            DragState::Idle => None,
        }
    }

    /// Returns the pending coalesced update, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingFrame> {
        self.pending
    }

    /// Returns the surface this slider paints to.
    #[must_use]
    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Starts a gesture: captures bounds and paints the grabbed position at
    /// once.
    ///
    /// Starting again while already dragging re-captures bounds and drops
    /// any pending update.
    pub fn start_drag(
        &mut self,
        input: &PointerInput<'_>,
        scheduler: &mut (impl FrameScheduler + ?Sized),
        tracer: &mut Tracer<'_>,
    ) {
        self.cancel_pending(scheduler);

        let bounds = self.surface.measure();
        self.state = DragState::Dragging { bounds };
        self.gesture = GestureSummary {
            slider: self.id,
            ..GestureSummary::default()
        };
        self.surface.set_dragging(true);

        let percentage = input.sample().map(|sample| {
            let p = split_percentage(sample.client_x, bounds);
            self.paint(p);
            p.get()
        });

        tracer.drag_start(&DragStartEvent {
            slider: self.id,
            kind: input.kind(),
            bounds_left: bounds.x0,
            bounds_width: bounds.width(),
            percentage,
        });
    }

    /// Handles a move. Returns `true` if the event belongs to this slider's
    /// gesture (the host should then suppress default scrolling).
    ///
    /// Does nothing while idle.
    pub fn drag(
        &mut self,
        input: &PointerInput<'_>,
        scheduler: &mut (impl FrameScheduler + ?Sized),
        tracer: &mut Tracer<'_>,
    ) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.gesture.moves += 1;

        // A move without a usable coordinate keeps the current request.
        let Some(sample) = input.sample() else {
            return true;
        };

        let superseded = self.cancel_pending(scheduler);
        if superseded.is_some() {
            self.gesture.superseded += 1;
        }

        let handle = scheduler.request_frame(self.id);
        self.gesture.requested += 1;
        self.pending = Some(PendingFrame { handle, sample });

        tracer.frame_request(&FrameRequestEvent {
            slider: self.id,
            handle,
            superseded,
        });
        true
    }

    /// Ends the gesture, discarding any pending update unpainted.
    ///
    /// Does nothing while idle.
    pub fn end_drag(
        &mut self,
        scheduler: &mut (impl FrameScheduler + ?Sized),
        tracer: &mut Tracer<'_>,
    ) {
        if !self.is_dragging() {
            return;
        }
        self.state = DragState::Idle;
        self.surface.set_dragging(false);

        let dropped = self.cancel_pending(scheduler);
        if dropped.is_some() {
            self.gesture.dropped += 1;
        }

        tracer.drag_end(&DragEndEvent {
            slider: self.id,
            percentage: self.percentage.get(),
            dropped,
        });
        tracer.gesture_summary(&self.gesture);
    }

    /// Frame callback: paints the pending sample if `handle` is still the
    /// pending one. Returns `true` if something was painted.
    pub fn on_frame(&mut self, handle: FrameHandle, tracer: &mut Tracer<'_>) -> bool {
        if let Some(pending) = self.pending
            && pending.handle == handle
            && let DragState::Dragging { bounds } = self.state
        {
            self.pending = None;
            let p = split_percentage(pending.sample.client_x, bounds);
            self.paint(p);
            self.gesture.applied += 1;
            tracer.frame_apply(&FrameApplyEvent {
                slider: self.id,
                handle,
                percentage: p.get(),
            });
            return true;
        }

        tracer.stale_frame(&StaleFrameEvent {
            slider: self.id,
            handle,
        });
        false
    }

    fn cancel_pending(
        &mut self,
        scheduler: &mut (impl FrameScheduler + ?Sized),
    ) -> Option<FrameHandle> {
        let pending = self.pending.take()?;
        scheduler.cancel_frame(pending.handle);
        Some(pending.handle)
    }

    fn paint(&mut self, p: Percentage) {
        self.percentage = p;
        self.surface.apply_split(SplitVisual::from(p));
    }
}
