// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events of a [`RecorderSink`](crate::recorder::RecorderSink)
//! as a JSON array, one object per event in arrival order. Every object has
//! `seq`, `name`, and `slider` keys plus an `args` object with the event's
//! fields; missing handles and percentages are `null`.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| to_value(seq, event))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &values).map_err(io::Error::other)?;
    writeln!(writer)
}

fn to_value(seq: usize, event: &RecordedEvent) -> Value {
    let args = match event {
        RecordedEvent::DragStart(e) => json!({
            "kind": format!("{:?}", e.kind),
            "bounds_left": e.bounds_left,
            "bounds_width": e.bounds_width,
            "percentage": e.percentage,
        }),
        RecordedEvent::FrameRequest(e) => json!({
            "handle": e.handle.0,
            "superseded": e.superseded.map(|h| h.0),
        }),
        RecordedEvent::FrameApply(e) => json!({
            "handle": e.handle.0,
            "percentage": e.percentage,
        }),
        RecordedEvent::StaleFrame(e) => json!({
            "handle": e.handle.0,
        }),
        RecordedEvent::DragEnd(e) => json!({
            "percentage": e.percentage,
            "dropped": e.dropped.map(|h| h.0),
        }),
        RecordedEvent::GestureSummary(s) => json!({
            "moves": s.moves,
            "requested": s.requested,
            "superseded": s.superseded,
            "applied": s.applied,
            "dropped": s.dropped,
        }),
    };
    json!({
        "seq": seq,
        "name": event.name(),
        "slider": event.slider().0,
        "args": args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use juxta_core::frame::FrameHandle;
    use juxta_core::id::SliderId;
    use juxta_core::trace::{DragEndEvent, FrameRequestEvent, GestureSummary};

    #[test]
    fn export_produces_array_in_order() {
        let events = [
            RecordedEvent::FrameRequest(FrameRequestEvent {
                slider: SliderId(1),
                handle: FrameHandle(4),
                superseded: None,
            }),
            RecordedEvent::DragEnd(DragEndEvent {
                slider: SliderId(1),
                percentage: 62.5,
                dropped: Some(FrameHandle(4)),
            }),
            RecordedEvent::GestureSummary(GestureSummary {
                slider: SliderId(1),
                moves: 3,
                requested: 1,
                superseded: 0,
                applied: 0,
                dropped: 1,
            }),
        ];

        let mut out = Vec::new();
        export(&events, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let arr = parsed.as_array().unwrap();

        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0]["seq"], 0);
        assert_eq!(arr[0]["name"], "FrameRequest");
        assert_eq!(arr[0]["args"]["superseded"], Value::Null);
        assert_eq!(arr[1]["slider"], 1);
        assert_eq!(arr[1]["args"]["percentage"], 62.5);
        assert_eq!(arr[1]["args"]["dropped"], 4);
        assert_eq!(arr[2]["args"]["moves"], 3);
    }

    #[test]
    fn export_empty_is_empty_array() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, json!([]));
    }
}
