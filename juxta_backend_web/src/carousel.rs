// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM slide carousel.
//!
//! [`mount_carousel`] drives a [`Carousel`] from the page: one indicator dot
//! is created per slide inside the dots container, the prev/next buttons and
//! the dots navigate, and after every transition the active class is
//! re-applied to all slides and dots from [`Carousel::active_flags`].

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, EventTarget};

use juxta_core::carousel::Carousel;

use crate::listener::EventListener;
use crate::MountError;

/// Selectors and class names for [`mount_carousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Matches each slide, in order.
    pub item_selector: &'static str,
    /// The "previous" button.
    pub prev_selector: &'static str,
    /// The "next" button.
    pub next_selector: &'static str,
    /// Container that receives the generated dots.
    pub dots_selector: &'static str,
    /// Class of each generated dot.
    pub dot_class: &'static str,
    /// Class marking the showing slide and its dot.
    pub active_class: &'static str,
}

impl CarouselConfig {
    /// Default selectors for the stock carousel markup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            item_selector: ".slider-item",
            prev_selector: ".prev-btn",
            next_selector: ".next-btn",
            dots_selector: ".slider-dots",
            dot_class: "slider-dot",
            active_class: "active",
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}

struct CarouselState {
    carousel: Carousel,
    items: Vec<Element>,
    dots: Vec<Element>,
    active_class: &'static str,
}

impl CarouselState {
    fn show(&self) {
        for (el, active) in self.items.iter().zip(self.carousel.active_flags()) {
            let _ = el
                .class_list()
                .toggle_with_force(self.active_class, active);
        }
        for (el, active) in self.dots.iter().zip(self.carousel.active_flags()) {
            let _ = el
                .class_list()
                .toggle_with_force(self.active_class, active);
        }
    }
}

/// A mounted carousel.
///
/// Dropping it detaches the button and dot listeners; the generated dots
/// stay in the page.
pub struct DomCarousel {
    state: Rc<RefCell<CarouselState>>,
    _listeners: Vec<EventListener>,
}

impl core::fmt::Debug for DomCarousel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DomCarousel")
            .field("carousel", &state.carousel)
            .field("dots", &state.dots.len())
            .finish_non_exhaustive()
    }
}

impl DomCarousel {
    /// Returns the index of the showing slide.
    #[must_use]
    pub fn index(&self) -> usize {
        self.state.borrow().carousel.index()
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.borrow().carousel.count()
    }

    /// Shows the next slide.
    pub fn advance(&self) -> usize {
        navigate(&self.state, Carousel::advance)
    }

    /// Shows the previous slide.
    pub fn retreat(&self) -> usize {
        navigate(&self.state, Carousel::retreat)
    }

    /// Shows slide `index`. Returns `false` if it is out of range.
    pub fn go_to(&self, index: usize) -> bool {
        let mut state = self.state.borrow_mut();
        let moved = state.carousel.go_to(index);
        if moved {
            state.show();
        }
        moved
    }
}

fn navigate(state: &RefCell<CarouselState>, step: fn(&mut Carousel) -> usize) -> usize {
    let Ok(mut state) = state.try_borrow_mut() else {
        return 0;
    };
    let index = step(&mut state.carousel);
    state.show();
    index
}

/// Mounts the carousel in `document` and shows the first slide.
///
/// Missing buttons or dots container are tolerated; with no slides the
/// carousel is inert.
pub fn mount_carousel(document: &Document, config: &CarouselConfig) -> Result<DomCarousel, MountError> {
    let found = document
        .query_selector_all(config.item_selector)
        .map_err(|_| MountError::Selector {
            selector: config.item_selector,
        })?;
    let items: Vec<Element> = (0..found.length())
        .filter_map(|i| found.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    let mut dots = Vec::new();
    if !items.is_empty()
        && let Some(container) = select(document, config.dots_selector)?
    {
        for _ in &items {
            let Ok(dot) = document.create_element("div") else {
                break;
            };
            let _ = dot.class_list().add_1(config.dot_class);
            if container.append_child(&dot).is_ok() {
                dots.push(dot);
            }
        }
    }

    let state = Rc::new(RefCell::new(CarouselState {
        carousel: Carousel::new(items.len()),
        items,
        dots,
        active_class: config.active_class,
    }));
    state.borrow().show();

    let mut listeners = Vec::new();
    let buttons: [(&'static str, fn(&mut Carousel) -> usize); 2] = [
        (config.prev_selector, Carousel::retreat),
        (config.next_selector, Carousel::advance),
    ];
    for (selector, step) in buttons {
        if let Some(button) = select(document, selector)? {
            let weak = Rc::downgrade(&state);
            listeners.push(EventListener::attach(
                button.as_ref(),
                "click",
                true,
                move |_| {
                    if let Some(state) = weak.upgrade() {
                        navigate(&state, step);
                    }
                },
            )?);
        }
    }

    let dot_targets: Vec<EventTarget> = state
        .borrow()
        .dots
        .iter()
        .map(|dot| dot.clone().into())
        .collect();
    for (index, target) in dot_targets.iter().enumerate() {
        let weak = Rc::downgrade(&state);
        listeners.push(EventListener::attach(target, "click", true, move |_| {
            if let Some(state) = weak.upgrade()
                && let Ok(mut page) = state.try_borrow_mut()
                && page.carousel.go_to(index)
            {
                page.show();
            }
        })?);
    }

    Ok(DomCarousel {
        state,
        _listeners: listeners,
    })
}

fn select(document: &Document, selector: &'static str) -> Result<Option<Element>, MountError> {
    document
        .query_selector(selector)
        .map_err(|_| MountError::Selector { selector })
}
