// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event translation.

use alloc::vec::Vec;

use web_sys::{MouseEvent, TouchEvent};

use juxta_core::input::{PointerInput, TouchContact};

/// Converts a mouse event.
#[must_use]
pub fn mouse_input(e: &MouseEvent) -> PointerInput<'static> {
    PointerInput::Mouse {
        client_x: f64::from(e.client_x()),
    }
}

/// Collects the active contacts of a touch event in platform order.
///
/// Pair with [`PointerInput::Touch`]; `touchend` has no active contacts and
/// produces an empty list.
#[must_use]
pub fn touch_contacts(e: &TouchEvent) -> Vec<TouchContact> {
    let list = e.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchContact {
            client_x: f64::from(t.client_x()),
            client_y: f64::from(t.client_y()),
        })
        .collect()
}
