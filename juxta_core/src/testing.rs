// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by unit tests.

use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::Rect;

use crate::backend::SplitSurface;
use crate::geometry::SplitVisual;

/// A surface that records every paint and layout query.
#[derive(Debug)]
pub(crate) struct RecordingSurface {
    pub(crate) bounds: Rect,
    pub(crate) measures: Cell<u32>,
    pub(crate) painted: Vec<SplitVisual>,
    pub(crate) dragging: bool,
    pub(crate) dragging_changes: u32,
}

impl RecordingSurface {
    pub(crate) fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            measures: Cell::new(0),
            painted: Vec::new(),
            dragging: false,
            dragging_changes: 0,
        }
    }

    pub(crate) fn last_left(&self) -> Option<f64> {
        self.painted.last().map(|v| v.handle_left)
    }
}

impl SplitSurface for RecordingSurface {
    fn measure(&self) -> Rect {
        self.measures.set(self.measures.get() + 1);
        self.bounds
    }

    fn apply_split(&mut self, visual: SplitVisual) {
        self.painted.push(visual);
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        self.dragging_changes += 1;
    }
}
