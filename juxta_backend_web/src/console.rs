// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.
//!
//! [`ConsoleSink`] writes one `console.debug` line per drag event, in the
//! same shape as the native pretty printer.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::JsValue;

use juxta_core::trace::{
    DragEndEvent, DragStartEvent, FrameApplyEvent, FrameRequestEvent, GestureSummary,
    StaleFrameEvent, TraceSink,
};

/// A [`TraceSink`] that logs to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn log(line: &str) {
    web_sys::console::debug_1(&JsValue::from_str(line));
}

fn handle_or_dash(handle: Option<juxta_core::frame::FrameHandle>) -> String {
    handle.map_or_else(|| String::from("-"), |h| format!("{}", h.0))
}

impl TraceSink for ConsoleSink {
    fn on_drag_start(&mut self, e: &DragStartEvent) {
        let at = e
            .percentage
            .map_or_else(|| String::from("-"), |p| format!("{p:.1}%"));
        log(&format!(
            "[juxta:start] slider={} kind={:?} left={:.1} width={:.1} at={at}",
            e.slider.0, e.kind, e.bounds_left, e.bounds_width,
        ));
    }

    fn on_frame_request(&mut self, e: &FrameRequestEvent) {
        log(&format!(
            "[juxta:request] slider={} handle={} superseded={}",
            e.slider.0,
            e.handle.0,
            handle_or_dash(e.superseded),
        ));
    }

    fn on_frame_apply(&mut self, e: &FrameApplyEvent) {
        log(&format!(
            "[juxta:apply] slider={} handle={} at={:.1}%",
            e.slider.0, e.handle.0, e.percentage,
        ));
    }

    fn on_stale_frame(&mut self, e: &StaleFrameEvent) {
        log(&format!(
            "[juxta:stale] slider={} handle={}",
            e.slider.0, e.handle.0,
        ));
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        log(&format!(
            "[juxta:end] slider={} at={:.1}% dropped={}",
            e.slider.0,
            e.percentage,
            handle_or_dash(e.dropped),
        ));
    }

    fn on_gesture_summary(&mut self, s: &GestureSummary) {
        log(&format!(
            "[juxta:summary] slider={} moves={} requested={} superseded={} applied={} dropped={}",
            s.slider.0, s.moves, s.requested, s.superseded, s.applied, s.dropped,
        ));
    }
}
