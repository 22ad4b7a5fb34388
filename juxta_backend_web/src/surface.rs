// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM split surface.
//!
//! [`DomSurface`] paints a slider's split onto one comparison widget: it
//! clips the after-image layer with `clip-path: inset(...)` and positions the
//! handle with `left`. Layout is read with `getBoundingClientRect` on the
//! grab surface (the image wrapper).

use alloc::format;
use alloc::vec::Vec;

use kurbo::Rect;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement};

use juxta_core::backend::SplitSurface;
use juxta_core::geometry::SplitVisual;

use crate::{MountConfig, MountError};

/// One comparison widget's DOM elements.
///
/// A widget missing its handle or after layer still mounts; painting then
/// skips the missing element. A widget missing its image wrapper grabs and
/// measures on the container instead.
pub struct DomSurface {
    grab: HtmlElement,
    handle: Option<HtmlElement>,
    after: Option<HtmlElement>,
    dragging_class: &'static str,
    grab_cursor: &'static str,
    grabbing_cursor: &'static str,
}

impl core::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSurface")
            .field("grab", &"HtmlElement")
            .field("has_handle", &self.handle.is_some())
            .field("has_after", &self.after.is_some())
            .finish_non_exhaustive()
    }
}

impl DomSurface {
    /// Finds the parts of the widget rooted at `container`.
    ///
    /// Returns the surface together with every part that was missing
    /// (`index` is the widget's position in document order, used in the
    /// errors). Fails only if the document rejects a selector.
    pub fn discover(
        container: &HtmlElement,
        index: usize,
        config: &MountConfig,
    ) -> Result<(Self, Vec<MountError>), MountError> {
        let mut defects = Vec::new();

        let grab = match query(container, config.grab_selector)? {
            Some(el) => el,
            None => {
                defects.push(MountError::MissingGrabSurface {
                    index,
                    selector: config.grab_selector,
                });
                container.clone()
            }
        };
        let handle = query(container, config.handle_selector)?;
        if handle.is_none() {
            defects.push(MountError::MissingHandle {
                index,
                selector: config.handle_selector,
            });
        }
        let after = query(container, config.after_selector)?;
        if after.is_none() {
            defects.push(MountError::MissingAfterLayer {
                index,
                selector: config.after_selector,
            });
        }

        let surface = Self {
            grab,
            handle,
            after,
            dragging_class: config.dragging_class,
            grab_cursor: config.grab_cursor,
            grabbing_cursor: config.grabbing_cursor,
        };
        Ok((surface, defects))
    }

    /// Returns the element that receives presses and is measured.
    #[must_use]
    pub fn grab_surface(&self) -> &HtmlElement {
        &self.grab
    }

    /// Returns `true` if both visual parts were found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.handle.is_some() && self.after.is_some()
    }
}

impl SplitSurface for DomSurface {
    fn measure(&self) -> Rect {
        let r = self.grab.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn apply_split(&mut self, visual: SplitVisual) {
        if let Some(after) = &self.after {
            let _ = after
                .style()
                .set_property("clip-path", &format!("inset(0 {}% 0 0)", visual.clip_right));
        }
        if let Some(handle) = &self.handle {
            let _ = handle
                .style()
                .set_property("left", &format!("{}%", visual.handle_left));
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        let _ = self
            .grab
            .class_list()
            .toggle_with_force(self.dragging_class, dragging);
        let cursor = if dragging {
            self.grabbing_cursor
        } else {
            self.grab_cursor
        };
        let _ = self.grab.style().set_property("cursor", cursor);
    }
}

/// Returns the first `HtmlElement` under `root` matching `selector`.
pub(crate) fn query(root: &Element, selector: &'static str) -> Result<Option<HtmlElement>, MountError> {
    let found = root
        .query_selector(selector)
        .map_err(|_| MountError::Selector { selector })?;
    Ok(found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}
