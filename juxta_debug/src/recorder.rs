// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in the
//! order it arrived, as a [`RecordedEvent`]. Pair it with
//! [`json::export`](crate::json::export) to save a gesture for later
//! inspection.

use juxta_core::id::SliderId;
use juxta_core::trace::{
    DragEndEvent, DragStartEvent, FrameApplyEvent, FrameRequestEvent, GestureSummary,
    StaleFrameEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A drag started.
    DragStart(DragStartEvent),
    /// A move requested a frame.
    FrameRequest(FrameRequestEvent),
    /// A frame painted.
    FrameApply(FrameApplyEvent),
    /// A stale frame callback was ignored.
    StaleFrame(StaleFrameEvent),
    /// A drag ended.
    DragEnd(DragEndEvent),
    /// Counters of a finished gesture.
    GestureSummary(GestureSummary),
}

impl RecordedEvent {
    /// Returns the slider the event belongs to.
    #[must_use]
    pub fn slider(&self) -> SliderId {
        match self {
            Self::DragStart(e) => e.slider,
            Self::FrameRequest(e) => e.slider,
            Self::FrameApply(e) => e.slider,
            Self::StaleFrame(e) => e.slider,
            Self::DragEnd(e) => e.slider,
            Self::GestureSummary(s) => s.slider,
        }
    }

    /// Returns a short name for the event kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragStart(_) => "DragStart",
            Self::FrameRequest(_) => "FrameRequest",
            Self::FrameApply(_) => "FrameApply",
            Self::StaleFrame(_) => "StaleFrame",
            Self::DragEnd(_) => "DragEnd",
            Self::GestureSummary(_) => "GestureSummary",
        }
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Returns the summaries of every finished gesture.
    pub fn summaries(&self) -> impl Iterator<Item = &GestureSummary> {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::GestureSummary(s) => Some(s),
            _ => None,
        })
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_drag_start(&mut self, e: &DragStartEvent) {
        self.events.push(RecordedEvent::DragStart(*e));
    }

    fn on_frame_request(&mut self, e: &FrameRequestEvent) {
        self.events.push(RecordedEvent::FrameRequest(*e));
    }

    fn on_frame_apply(&mut self, e: &FrameApplyEvent) {
        self.events.push(RecordedEvent::FrameApply(*e));
    }

    fn on_stale_frame(&mut self, e: &StaleFrameEvent) {
        self.events.push(RecordedEvent::StaleFrame(*e));
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        self.events.push(RecordedEvent::DragEnd(*e));
    }

    fn on_gesture_summary(&mut self, s: &GestureSummary) {
        self.events.push(RecordedEvent::GestureSummary(*s));
    }
}
