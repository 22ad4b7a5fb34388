// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page discovery and event wiring.
//!
//! [`mount_sliders`] finds every comparison widget in a document, builds one
//! slider per widget in document order, and wires input:
//!
//! - `mousedown` / `touchstart` on each widget's grab surface start that
//!   slider's drag;
//! - `mousemove` / `touchmove` / `mouseup` / `touchend` / `touchcancel` are
//!   observed once on the document and fanned out through the shared
//!   [`SliderSet`], so a drag keeps tracking after the pointer leaves the
//!   widget;
//! - fired animation frames come back through the [`RafScheduler`] dispatch.
//!
//! A malformed widget never stops discovery of the ones after it.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use juxta_core::geometry::Percentage;
use juxta_core::id::SliderId;
use juxta_core::input::PointerInput;
use juxta_core::registry::SliderSet;
use juxta_core::slider::SliderConfig;
use juxta_core::trace::Tracer;

use crate::input::{mouse_input, touch_contacts};
use crate::listener::EventListener;
use crate::raf::{FrameDispatch, RafScheduler};
use crate::surface::DomSurface;

/// Selectors and presentation knobs for [`mount_sliders`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MountConfig {
    /// Marks one comparison widget.
    pub container_selector: &'static str,
    /// The element pressed to grab, measured for layout (within a widget).
    pub grab_selector: &'static str,
    /// The draggable divider (within a widget).
    pub handle_selector: &'static str,
    /// The clipped "after" image layer (within a widget).
    pub after_selector: &'static str,
    /// Class set on the grab surface while dragging.
    pub dragging_class: &'static str,
    /// Cursor shown on the grab surface while idle.
    pub grab_cursor: &'static str,
    /// Cursor shown on the grab surface while dragging.
    pub grabbing_cursor: &'static str,
    /// Configuration for each slider.
    pub slider: SliderConfig,
}

impl MountConfig {
    /// Default selectors for the stock comparison widget markup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            container_selector: ".comparison-slider",
            grab_selector: ".comparison-image-wrapper",
            handle_selector: ".slider-handle",
            after_selector: ".after-image",
            dragging_class: "dragging",
            grab_cursor: "grab",
            grabbing_cursor: "grabbing",
            slider: SliderConfig::new(),
        }
    }
}

impl Default for MountConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Something wrong with the page found while mounting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// A widget has no image wrapper; it grabs on its container instead.
    #[error("widget {index}: no grab surface matches `{selector}`, using the container")]
    MissingGrabSurface {
        /// Widget position in document order.
        index: usize,
        /// The selector that matched nothing.
        selector: &'static str,
    },
    /// A widget has no handle; the handle is not painted.
    #[error("widget {index}: no handle matches `{selector}`")]
    MissingHandle {
        /// Widget position in document order.
        index: usize,
        /// The selector that matched nothing.
        selector: &'static str,
    },
    /// A widget has no after layer; the clip is not painted.
    #[error("widget {index}: no after layer matches `{selector}`")]
    MissingAfterLayer {
        /// Widget position in document order.
        index: usize,
        /// The selector that matched nothing.
        selector: &'static str,
    },
    /// The document rejected a selector as invalid.
    #[error("selector `{selector}` is not valid")]
    Selector {
        /// The rejected selector.
        selector: &'static str,
    },
    /// `addEventListener` threw.
    #[error("failed to attach `{event}` listener")]
    Listener {
        /// The event name.
        event: &'static str,
    },
}

/// What [`mount_sliders`] found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountReport {
    /// Widgets that got a slider.
    pub mounted: usize,
    /// Missing parts of widgets that mounted in degraded form.
    pub defects: Vec<MountError>,
    /// Widgets that could not be mounted at all, and document listeners
    /// that could not be attached.
    pub skipped: Vec<MountError>,
}

impl MountReport {
    /// Passes a successful value through, or files the error under
    /// [`skipped`](Self::skipped).
    fn record<T>(&mut self, result: Result<T, MountError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.skipped.push(err);
                None
            }
        }
    }
}

type WebSliderSet = SliderSet<DomSurface, RafScheduler>;

struct PageState {
    sliders: WebSliderSet,
    #[cfg(feature = "trace")]
    sink: crate::console::ConsoleSink,
}

impl PageState {
    fn with_tracer<R>(&mut self, f: impl FnOnce(&mut WebSliderSet, &mut Tracer<'_>) -> R) -> R {
        #[cfg(feature = "trace")]
        let mut tracer = Tracer::new(&mut self.sink);
        #[cfg(not(feature = "trace"))]
        let mut tracer = Tracer::none();
        f(&mut self.sliders, &mut tracer)
    }
}

/// The mounted sliders of one page.
///
/// Dropping it detaches every listener and cancels pending frames. On a
/// page that never unmounts, keep it alive with `core::mem::forget`.
pub struct SliderPage {
    state: Rc<RefCell<PageState>>,
    report: MountReport,
    _listeners: Vec<EventListener>,
}

impl core::fmt::Debug for SliderPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderPage")
            .field("report", &self.report)
            .field("listeners", &self._listeners.len())
            .finish_non_exhaustive()
    }
}

impl SliderPage {
    /// Returns what was found while mounting.
    #[must_use]
    pub fn report(&self) -> &MountReport {
        &self.report
    }

    /// Returns the number of mounted sliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().sliders.len()
    }

    /// Returns `true` if the page had no comparison widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current split of slider `id`.
    #[must_use]
    pub fn percentage(&self, id: SliderId) -> Option<Percentage> {
        self.state.borrow().sliders.get(id).map(|s| s.percentage())
    }

    /// Returns `true` if slider `id` is mid-gesture.
    #[must_use]
    pub fn is_dragging(&self, id: SliderId) -> bool {
        self.state
            .borrow()
            .sliders
            .get(id)
            .is_some_and(|s| s.is_dragging())
    }
}

/// Mounts a slider on every comparison widget in `document`.
///
/// Widgets missing optional parts mount in degraded form and are listed in
/// [`MountReport::defects`]. A widget whose listeners cannot be attached is
/// left out and listed in [`MountReport::skipped`]; the others still mount.
/// With no matching widgets nothing is attached.
///
/// Fails only if the container selector is rejected by the document.
pub fn mount_sliders(document: &Document, config: &MountConfig) -> Result<SliderPage, MountError> {
    let state = Rc::new_cyclic(|weak: &Weak<RefCell<PageState>>| {
        let weak = weak.clone();
        let dispatch: FrameDispatch = Rc::new(move |id, handle| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let Ok(mut page) = state.try_borrow_mut() else {
                return;
            };
            page.with_tracer(|sliders, tracer| sliders.on_frame(id, handle, tracer));
        });
        RefCell::new(PageState {
            sliders: SliderSet::new(RafScheduler::new(dispatch), config.slider),
            #[cfg(feature = "trace")]
            sink: crate::console::ConsoleSink::new(),
        })
    });

    let containers = document
        .query_selector_all(config.container_selector)
        .map_err(|_| MountError::Selector {
            selector: config.container_selector,
        })?;

    let mut report = MountReport::default();
    let mut listeners = Vec::new();

    for (index, i) in (0..containers.length()).enumerate() {
        let Some(container) = containers
            .get(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let Some((surface, defects)) =
            report.record(DomSurface::discover(&container, index, config))
        else {
            continue;
        };

        // Wire input first so a widget that cannot receive presses is never
        // added to the set.
        let grab: EventTarget = surface.grab_surface().clone().into();
        let id = state.borrow().sliders.next_id();
        let Some(press) = report.record(attach_press(&grab, &state, id)) else {
            continue;
        };
        let inserted = state.borrow_mut().sliders.insert(surface);
        debug_assert_eq!(inserted, id, "press listeners target the inserted slider");
        listeners.extend(press);
        report.defects.extend(defects);
        report.mounted += 1;
    }

    if report.mounted > 0 {
        let doc: &EventTarget = document.as_ref();
        for event in ["mousemove", "touchmove"] {
            let attached = EventListener::attach(doc, event, false, move_handler(&state));
            listeners.extend(report.record(attached));
        }
        for event in ["mouseup", "touchend", "touchcancel"] {
            let attached = EventListener::attach(doc, event, true, release_handler(&state));
            listeners.extend(report.record(attached));
        }
    }

    Ok(SliderPage {
        state,
        report,
        _listeners: listeners,
    })
}

/// Calls `f` with the pointer input carried by `event`, if it is a mouse or
/// touch event.
fn with_input<R>(event: &Event, f: impl FnOnce(&PointerInput<'_>) -> R) -> Option<R> {
    if let Some(e) = event.dyn_ref::<MouseEvent>() {
        return Some(f(&mouse_input(e)));
    }
    let e = event.dyn_ref::<TouchEvent>()?;
    let contacts = touch_contacts(e);
    Some(f(&PointerInput::Touch {
        contacts: &contacts,
    }))
}

/// Attaches both press listeners for slider `id`, or neither.
fn attach_press(
    grab: &EventTarget,
    state: &Rc<RefCell<PageState>>,
    id: SliderId,
) -> Result<[EventListener; 2], MountError> {
    Ok([
        EventListener::attach(grab, "mousedown", true, press_handler(state, id))?,
        EventListener::attach(grab, "touchstart", false, press_handler(state, id))?,
    ])
}

fn press_handler(state: &Rc<RefCell<PageState>>, id: SliderId) -> impl FnMut(Event) + 'static {
    let weak = Rc::downgrade(state);
    move |event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let Ok(mut page) = state.try_borrow_mut() else {
            return;
        };
        with_input(&event, |input| {
            page.with_tracer(|sliders, tracer| sliders.pointer_down(id, input, tracer));
        });
    }
}

fn move_handler(state: &Rc<RefCell<PageState>>) -> impl FnMut(Event) + 'static {
    let weak = Rc::downgrade(state);
    move |event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let Ok(mut page) = state.try_borrow_mut() else {
            return;
        };
        let consumed = with_input(&event, |input| {
            page.with_tracer(|sliders, tracer| sliders.pointer_move(input, tracer))
        })
        .unwrap_or(0);
        if consumed > 0 {
            // Keeps touch drags from scrolling the page.
            event.prevent_default();
        }
    }
}

fn release_handler(state: &Rc<RefCell<PageState>>) -> impl FnMut(Event) + 'static {
    let weak = Rc::downgrade(state);
    move |_event: Event| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let Ok(mut page) = state.try_borrow_mut() else {
            return;
        };
        page.with_tracer(|sliders, tracer| sliders.pointer_up(tracer));
    }
}
