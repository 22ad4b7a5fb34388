// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated drag gestures that exercise the tracing and diagnostics pipeline.
//!
//! Drives two sliders through a [`ManualScheduler`], firing frames by hand
//! between bursts of moves, and records every event to both a
//! [`PrettyPrintSink`](juxta_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](juxta_debug::recorder::RecorderSink), then exports the
//! recording as JSON.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Rect;

use juxta_core::backend::SplitSurface;
use juxta_core::frame::ManualScheduler;
use juxta_core::geometry::SplitVisual;
use juxta_core::input::{PointerInput, TouchContact};
use juxta_core::registry::SliderSet;
use juxta_core::slider::SliderConfig;
use juxta_core::trace::{
    DragEndEvent, DragStartEvent, FrameApplyEvent, FrameRequestEvent, GestureSummary,
    StaleFrameEvent, TraceSink, Tracer,
};

use juxta_debug::pretty::PrettyPrintSink;
use juxta_debug::recorder::RecorderSink;

/// Moves delivered between two animation frames.
const MOVES_PER_FRAME: usize = 3;
const OUTPUT_PATH: &str = "juxta_trace.json";

/// A widget laid out at a fixed rectangle that remembers its last paint.
struct DemoSurface {
    bounds: Rect,
    last: Option<SplitVisual>,
}

impl SplitSurface for DemoSurface {
    fn measure(&self) -> Rect {
        self.bounds
    }

    fn apply_split(&mut self, visual: SplitVisual) {
        self.last = Some(visual);
    }
}

/// Forwards every event to two sinks.
struct Tee<'a> {
    first: &'a mut dyn TraceSink,
    second: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_drag_start(&mut self, e: &DragStartEvent) {
        self.first.on_drag_start(e);
        self.second.on_drag_start(e);
    }

    fn on_frame_request(&mut self, e: &FrameRequestEvent) {
        self.first.on_frame_request(e);
        self.second.on_frame_request(e);
    }

    fn on_frame_apply(&mut self, e: &FrameApplyEvent) {
        self.first.on_frame_apply(e);
        self.second.on_frame_apply(e);
    }

    fn on_stale_frame(&mut self, e: &StaleFrameEvent) {
        self.first.on_stale_frame(e);
        self.second.on_stale_frame(e);
    }

    fn on_drag_end(&mut self, e: &DragEndEvent) {
        self.first.on_drag_end(e);
        self.second.on_drag_end(e);
    }

    fn on_gesture_summary(&mut self, s: &GestureSummary) {
        self.first.on_gesture_summary(s);
        self.second.on_gesture_summary(s);
    }
}

fn fire_frames(set: &mut SliderSet<DemoSurface, ManualScheduler>, tracer: &mut Tracer<'_>) {
    for (target, handle) in set.scheduler_mut().fire_due() {
        set.on_frame(target, handle, tracer);
    }
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::with_writer(std::io::stdout());
    let mut recorder = RecorderSink::new();

    // -- sliders -----------------------------------------------------------
    let mut set = SliderSet::new(ManualScheduler::new(), SliderConfig::new());
    let top = set.insert(DemoSurface {
        bounds: Rect::new(100.0, 0.0, 500.0, 300.0),
        last: None,
    });
    let bottom = set.insert(DemoSurface {
        bounds: Rect::new(0.0, 400.0, 800.0, 700.0),
        last: None,
    });

    {
        let mut tee = Tee {
            first: &mut pretty,
            second: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        // 1. Mouse drag on the top slider: grab at 25%, sweep right past the
        //    edge, release with a frame still pending.
        set.pointer_down(top, &PointerInput::Mouse { client_x: 200.0 }, &mut tracer);
        let mut x = 200.0;
        for _ in 0..4 {
            for _ in 0..MOVES_PER_FRAME {
                x += 40.0;
                set.pointer_move(&PointerInput::Mouse { client_x: x }, &mut tracer);
            }
            fire_frames(&mut set, &mut tracer);
        }
        set.pointer_move(&PointerInput::Mouse { client_x: 650.0 }, &mut tracer);
        set.pointer_up(&mut tracer);
        // The dropped frame's handle is gone; nothing is queued to fire.
        fire_frames(&mut set, &mut tracer);

        // 2. Touch drag on the bottom slider, including a move whose contact
        //    list is empty.
        let grab = [TouchContact {
            client_x: 600.0,
            client_y: 500.0,
        }];
        set.pointer_down(bottom, &PointerInput::Touch { contacts: &grab }, &mut tracer);
        for step in 1..=MOVES_PER_FRAME {
            let contacts = [TouchContact {
                client_x: 600.0 - 80.0 * step as f64,
                client_y: 500.0,
            }];
            set.pointer_move(&PointerInput::Touch { contacts: &contacts }, &mut tracer);
        }
        set.pointer_move(&PointerInput::Touch { contacts: &[] }, &mut tracer);
        fire_frames(&mut set, &mut tracer);
        set.pointer_up(&mut tracer);
    }

    for slider in set.iter() {
        let handle_left = slider.surface().last.map(|v| v.handle_left);
        println!(
            "slider {} rests at {:.1}% (handle left: {handle_left:?})",
            slider.id().0,
            slider.percentage().get(),
        );
    }

    // -- export ------------------------------------------------------------
    match File::create(OUTPUT_PATH) {
        Ok(file) => {
            let mut writer = BufWriter::new(file);
            if let Err(e) = juxta_debug::json::export(recorder.events(), &mut writer) {
                eprintln!("failed to write {OUTPUT_PATH}: {e}");
            } else {
                println!(
                    "wrote {} events to {OUTPUT_PATH}",
                    recorder.events().len()
                );
            }
        }
        Err(e) => eprintln!("failed to create {OUTPUT_PATH}: {e}"),
    }
}
