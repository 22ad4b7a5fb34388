// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use juxta_core::frame::FrameHandle;
use juxta_core::trace::{
    DragEndEvent, DragStartEvent, FrameApplyEvent, FrameRequestEvent, GestureSummary,
    StaleFrameEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

struct Handle(Option<FrameHandle>);

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(h) => write!(f, "{}", h.0),
            None => f.write_str("-"),
        }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_drag_start(&mut self, e: &DragStartEvent) {
        let at = match e.percentage {
            Some(p) => format!("{p:.1}%"),
            None => "-".to_owned(),
        };
        let _ = writeln!(
            self.writer,
            "[start] slider={} kind={:?} left={:.1} width={:.1} at={at}",
            e.slider.0, e.kind, e.bounds_left, e.bounds_width,
        );
    }

    fn on_frame_request(&mut self, e: &FrameRequestEvent) {
        let _ = writeln!(
            self.writer,
            "[request] slider={} handle={} superseded={}",
            e.slider.0,
            e.handle.0,
            Handle(e.superseded),
        );
    }

    fn on_frame_apply(&mut self, e: &FrameApplyEvent) {
        let _ = writeln!(
            self.writer,
            "[apply] slider={} handle={} at={:.1}%",
            e.slider.0, e.handle.0, e.percentage,
        );
    }

    fn on_stale_frame(&mut self, e: &StaleFrameEvent) {
        let _ = writeln!(
            self.writer,
            "[stale] slider={} handle={}",
            e.slider.0, e.handle.0,
        );
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        let _ = writeln!(
            self.writer,
            "[end] slider={} at={:.1}% dropped={}",
            e.slider.0,
            e.percentage,
            Handle(e.dropped),
        );
    }

    fn on_gesture_summary(&mut self, s: &GestureSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] slider={} moves={} requested={} superseded={} applied={} dropped={}",
            s.slider.0, s.moves, s.requested, s.superseded, s.applied, s.dropped,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juxta_core::id::SliderId;
    use juxta_core::input::PointerKind;

    #[test]
    fn pretty_print_start() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_drag_start(&DragStartEvent {
            slider: SliderId(2),
            kind: PointerKind::Touch,
            bounds_left: 100.0,
            bounds_width: 200.0,
            percentage: Some(25.0),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("[start]"), "got: {output}");
        assert!(output.contains("slider=2"), "got: {output}");
        assert!(output.contains("kind=Touch"), "got: {output}");
        assert!(output.contains("at=25.0%"), "got: {output}");
    }

    #[test]
    fn missing_handles_print_as_dash() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_frame_request(&FrameRequestEvent {
            slider: SliderId(0),
            handle: FrameHandle(3),
            superseded: None,
        });
        sink.on_drag_end(&DragEndEvent {
            slider: SliderId(0),
            percentage: 40.0,
            dropped: Some(FrameHandle(3)),
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[request] slider=0 handle=3 superseded=-");
        assert_eq!(lines[1], "[end] slider=0 at=40.0% dropped=3");
    }
}
