// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web example: before/after comparison sliders and a slide carousel.
//!
//! Mounts a slider on every `.comparison-slider` widget in `index.html` and
//! wires the `.slider-item` carousel. Widgets with missing parts are reported
//! on the console and still mount.
//!
//! Build with: `wasm-pack build --target web demos/web_page`
//!
//! Then serve `demos/web_page/` and open `index.html` in a browser. Build
//! with `--features trace` to log every drag event to the console.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::string::ToString as _;

use wasm_bindgen::prelude::*;

use juxta_backend_web::{CarouselConfig, MountConfig, mount_carousel, mount_sliders};

fn js_error(err: &impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let sliders = mount_sliders(&document, &MountConfig::new()).map_err(|e| js_error(&e))?;
    for defect in &sliders.report().defects {
        web_sys::console::warn_1(&js_error(defect));
    }
    for skipped in &sliders.report().skipped {
        web_sys::console::error_1(&js_error(skipped));
    }

    let carousel = mount_carousel(&document, &CarouselConfig::new()).map_err(|e| js_error(&e))?;

    // The page never unmounts; leak the handles so their listeners stay live.
    core::mem::forget(sliders);
    core::mem::forget(carousel);

    Ok(())
}
