// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider registry and input dispatch.
//!
//! Move and release input is observed once for the whole document and must
//! reach every slider, because a drag continues after the pointer leaves the
//! widget. [`SliderSet`] is that single dispatcher: press events are routed to
//! one slider by id, while move, release, and frame callbacks are fanned out
//! and each slider ignores what is not its own gesture. Dragging one slider
//! never touches another's state.
//!
//! The set also owns the [`FrameScheduler`] all its sliders share.

use alloc::vec::Vec;

use crate::backend::SplitSurface;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::id::SliderId;
use crate::input::PointerInput;
use crate::slider::{Slider, SliderConfig};
use crate::trace::Tracer;

/// Every slider on a page plus their shared frame scheduler.
///
/// Sliders are added once, at discovery time, and never removed.
///
/// # Usage
///
/// ```rust,ignore
/// let mut set = SliderSet::new(scheduler, SliderConfig::new());
/// let id = set.insert(surface);
///
/// // press on the widget
/// set.pointer_down(id, &PointerInput::Mouse { client_x }, &mut tracer);
/// // document-level move; suppress default scrolling if consumed
/// if set.pointer_move(&input, &mut tracer) > 0 { event.prevent_default(); }
/// // display frame fired
/// set.on_frame(id, handle, &mut tracer);
/// // document-level release
/// set.pointer_up(&mut tracer);
/// ```
#[derive(Debug)]
pub struct SliderSet<P, S> {
    sliders: Vec<Slider<P>>,
    scheduler: S,
    config: SliderConfig,
}

impl<P: SplitSurface, S: FrameScheduler> SliderSet<P, S> {
    /// Creates an empty set.
    #[must_use]
    pub fn new(scheduler: S, config: SliderConfig) -> Self {
        Self {
            sliders: Vec::new(),
            scheduler,
            config,
        }
    }

    /// Returns the id the next [`insert`](Self::insert) will assign.
    ///
    /// Hosts use it to wire input for a widget before committing it.
    ///
    /// # Panics
    ///
    /// Panics if `u32::MAX` sliders are already inserted.
    #[must_use]
    pub fn next_id(&self) -> SliderId {
        SliderId(u32::try_from(self.sliders.len()).expect("too many sliders"))
    }

    /// Constructs a slider for `surface` and returns its id.
    ///
    /// The new slider paints its initial split immediately.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` sliders are inserted.
    pub fn insert(&mut self, surface: P) -> SliderId {
        let id = self.next_id();
        self.sliders.push(Slider::new(id, surface, self.config));
        id
    }

    /// Returns the number of sliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    /// Returns `true` if no sliders were inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Returns the slider with the given id.
    #[must_use]
    pub fn get(&self, id: SliderId) -> Option<&Slider<P>> {
        self.sliders.get(id.index())
    }

    /// Iterates over all sliders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Slider<P>> {
        self.sliders.iter()
    }

    /// Returns the shared scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the shared scheduler mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns `true` if any slider is mid-gesture.
    #[must_use]
    pub fn any_dragging(&self) -> bool {
        self.sliders.iter().any(Slider::is_dragging)
    }

    /// Routes a press on slider `id`'s widget. Unknown ids are ignored.
    pub fn pointer_down(&mut self, id: SliderId, input: &PointerInput<'_>, tracer: &mut Tracer<'_>) {
        if let Some(slider) = self.sliders.get_mut(id.index()) {
            slider.start_drag(input, &mut self.scheduler, tracer);
        }
    }

    /// Routes a document-level move to every slider.
    ///
    /// Returns how many sliders consumed it; a non-zero count means the host
    /// should suppress the platform's default gesture handling.
    pub fn pointer_move(&mut self, input: &PointerInput<'_>, tracer: &mut Tracer<'_>) -> usize {
        let mut consumed = 0;
        for slider in &mut self.sliders {
            if slider.drag(input, &mut self.scheduler, tracer) {
                consumed += 1;
            }
        }
        consumed
    }

    /// Routes a document-level release to every slider.
    pub fn pointer_up(&mut self, tracer: &mut Tracer<'_>) {
        for slider in &mut self.sliders {
            slider.end_drag(&mut self.scheduler, tracer);
        }
    }

    /// Routes a fired frame callback. Returns `true` if it painted.
    pub fn on_frame(&mut self, id: SliderId, handle: FrameHandle, tracer: &mut Tracer<'_>) -> bool {
        self.sliders
            .get_mut(id.index())
            .is_some_and(|slider| slider.on_frame(handle, tracer))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::frame::ManualScheduler;
    use crate::geometry::Percentage;
    use crate::testing::RecordingSurface;

    fn set_of(n: usize) -> SliderSet<RecordingSurface, ManualScheduler> {
        let mut set = SliderSet::new(ManualScheduler::new(), SliderConfig::new());
        for i in 0..n {
            let left = i as f64 * 1000.0;
            set.insert(RecordingSurface::new(Rect::new(left, 0.0, left + 100.0, 50.0)));
        }
        set
    }

    fn mouse(x: f64) -> PointerInput<'static> {
        PointerInput::Mouse { client_x: x }
    }

    fn pump(set: &mut SliderSet<RecordingSurface, ManualScheduler>) -> usize {
        let mut painted = 0;
        let mut tracer = Tracer::none();
        for (id, handle) in set.scheduler_mut().fire_due() {
            if set.on_frame(id, handle, &mut tracer) {
                painted += 1;
            }
        }
        painted
    }

    #[test]
    fn ids_follow_insertion_order() {
        let set = set_of(3);
        let ids: Vec<_> = set.iter().map(Slider::id).collect();
        assert_eq!(ids, [SliderId(0), SliderId(1), SliderId(2)]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn next_id_is_what_insert_assigns() {
        let mut set = set_of(2);
        let expected = set.next_id();
        assert_eq!(expected, SliderId(2));
        let id = set.insert(RecordingSurface::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(id, expected);
        assert_eq!(set.next_id(), SliderId(3));
    }

    #[test]
    fn empty_set_ignores_everything() {
        let mut set = set_of(0);
        let mut tracer = Tracer::none();
        assert!(set.is_empty());
        set.pointer_down(SliderId(0), &mouse(1.0), &mut tracer);
        assert_eq!(set.pointer_move(&mouse(2.0), &mut tracer), 0);
        set.pointer_up(&mut tracer);
        assert_eq!(set.scheduler().requested_total(), 0);
    }

    #[test]
    fn dragging_one_leaves_the_other_alone() {
        let mut set = set_of(2);
        let mut tracer = Tracer::none();

        set.pointer_down(SliderId(0), &mouse(20.0), &mut tracer);
        for x in [30.0, 40.0, 1050.0] {
            assert_eq!(set.pointer_move(&mouse(x), &mut tracer), 1);
        }
        assert_eq!(pump(&mut set), 1);
        set.pointer_up(&mut tracer);

        let a = set.get(SliderId(0)).unwrap();
        let b = set.get(SliderId(1)).unwrap();
        assert_eq!(a.percentage(), Percentage::MAX);
        assert_eq!(b.percentage(), Percentage::HALF);
        assert_eq!(b.surface().painted.len(), 1);
        assert_eq!(b.surface().measures.get(), 0);
    }

    #[test]
    fn moves_without_a_drag_are_not_consumed() {
        let mut set = set_of(2);
        assert_eq!(set.pointer_move(&mouse(10.0), &mut Tracer::none()), 0);
        assert!(!set.any_dragging());
    }

    #[test]
    fn one_frame_per_slider_per_interval() {
        let mut set = set_of(2);
        let mut tracer = Tracer::none();
        set.pointer_down(SliderId(0), &mouse(10.0), &mut tracer);
        set.pointer_down(SliderId(1), &mouse(1010.0), &mut tracer);
        for _ in 0..5 {
            assert_eq!(set.pointer_move(&mouse(60.0), &mut tracer), 2);
        }
        assert_eq!(set.scheduler().queued_len(), 2);
        assert_eq!(pump(&mut set), 2);
        assert_eq!(set.get(SliderId(0)).unwrap().percentage().get(), 60.0);
        // Far left of slider 1's bounds.
        assert_eq!(set.get(SliderId(1)).unwrap().percentage(), Percentage::MIN);
    }

    #[test]
    fn release_ends_every_drag_and_drops_frames() {
        let mut set = set_of(2);
        let mut tracer = Tracer::none();
        set.pointer_down(SliderId(0), &mouse(50.0), &mut tracer);
        set.pointer_move(&mouse(90.0), &mut tracer);
        set.pointer_up(&mut tracer);

        assert!(!set.any_dragging());
        assert_eq!(set.scheduler().queued_len(), 0);
        assert_eq!(pump(&mut set), 0);
        assert_eq!(set.get(SliderId(0)).unwrap().percentage().get(), 50.0);
    }

    #[test]
    fn frame_for_unknown_slider_is_ignored() {
        let mut set = set_of(1);
        assert!(!set.on_frame(SliderId(7), FrameHandle(1), &mut Tracer::none()));
    }
}
