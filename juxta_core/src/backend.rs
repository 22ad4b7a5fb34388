// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Juxta splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Frame scheduler**: Implements
//!   [`FrameScheduler`](crate::frame::FrameScheduler) on top of the
//!   platform's display callback (e.g. `requestAnimationFrame`) and routes
//!   fired callbacks to [`SliderSet::on_frame`](crate::registry::SliderSet::on_frame).
//!
//! - **Input translation**: Converts native mouse/touch events into
//!   [`PointerInput`](crate::input::PointerInput). Press events on a widget
//!   go to [`SliderSet::pointer_down`](crate::registry::SliderSet::pointer_down);
//!   move and release events are observed document-wide and go to
//!   [`pointer_move`](crate::registry::SliderSet::pointer_move) /
//!   [`pointer_up`](crate::registry::SliderSet::pointer_up).
//!
//! - **Surface**: Implements the [`SplitSurface`] trait for one widget's
//!   native elements.
//!
//! # Crate boundaries
//!
//! `juxta_core` owns the state machine, geometry, and this contract module.
//! Backend crates depend on `juxta_core` and provide platform glue.

use kurbo::Rect;

use crate::geometry::SplitVisual;

/// One widget's native elements: the container that is measured and the two
/// visuals that show the split.
///
/// Both DOM-backed surfaces and test doubles implement this trait.
pub trait SplitSurface {
    /// Queries the container's current layout rectangle in client
    /// coordinates.
    ///
    /// This may force layout, so the slider calls it once per drag gesture.
    fn measure(&self) -> Rect;

    /// Paints the split: clips the after layer and moves the handle.
    ///
    /// Implementations must update both properties in the same call.
    fn apply_split(&mut self, visual: SplitVisual);

    /// Shows or clears the "being dragged" affordance (cursor, class).
    fn set_dragging(&mut self, dragging: bool) {
        _ = dragging;
    }
}
