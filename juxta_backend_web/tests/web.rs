// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for slider mounting and the carousel.
//!
//! Run with `wasm-pack test --headless --chrome juxta_backend_web`.

#![cfg(target_arch = "wasm32")]

use juxta_backend_web::{
    CarouselConfig, MountConfig, MountError, mount_carousel, mount_sliders,
};
use juxta_core::id::SliderId;
use wasm_bindgen::JsCast as _;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Document, EventTarget, HtmlElement, MouseEvent, MouseEventInit, Touch, TouchEvent,
    TouchEventInit, TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const WIDGET: &str = r#"
<div class="comparison-slider" style="position:absolute;left:0;top:0;width:200px;height:100px">
  <div class="comparison-image-wrapper" style="position:absolute;left:0;top:0;width:200px;height:100px">
    <div class="before-image"></div>
    <div class="after-image"></div>
    <div class="slider-handle"></div>
  </div>
</div>
"#;

fn document_with(markup: &str) -> Document {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser");
    document
        .body()
        .expect("document has a body")
        .set_inner_html(markup);
    document
}

fn element(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .expect("valid selector")
        .expect("element present")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn mouse(kind: &str, client_x: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(client_x);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event")
}

/// A cancelable touch event with one contact per entry of `xs`.
fn touch(kind: &str, target: &EventTarget, xs: &[i32]) -> TouchEvent {
    let touches = js_sys::Array::new();
    for (identifier, &x) in (0..).zip(xs) {
        let init = TouchInit::new(identifier, target);
        init.set_client_x(x);
        touches.push(&Touch::new(&init).expect("touch"));
    }
    let init = TouchEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_touches(&touches);
    init.set_changed_touches(&touches);
    TouchEvent::new_with_event_init_dict(kind, &init).expect("touch event")
}

/// Resolves after the next animation frame has run its callbacks.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .expect("test runs in a browser")
            .request_animation_frame(&resolve)
            .expect("frame requested");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("frame fired");
}

fn handle_left(document: &Document) -> String {
    element(document, ".slider-handle")
        .style()
        .get_property_value("left")
        .unwrap()
}

#[wasm_bindgen_test]
fn mount_paints_initial_split() {
    let document = document_with(WIDGET);
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");

    assert_eq!(page.len(), 1);
    assert!(page.report().defects.is_empty());
    let handle = element(&document, ".slider-handle");
    assert_eq!(handle.style().get_property_value("left").unwrap(), "50%");
    let after = element(&document, ".after-image");
    let clip = after.style().get_property_value("clip-path").unwrap();
    assert!(clip.starts_with("inset(") && clip.contains("50%"), "got: {clip}");
}

#[wasm_bindgen_test]
fn press_paints_immediately_and_release_ends_drag() {
    let document = document_with(WIDGET);
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");
    let wrapper = element(&document, ".comparison-image-wrapper");

    wrapper.dispatch_event(&mouse("mousedown", 60)).unwrap();
    assert!(page.is_dragging(SliderId(0)));
    assert_eq!(page.percentage(SliderId(0)).unwrap().get(), 30.0);
    assert!(wrapper.class_list().contains("dragging"));
    let handle = element(&document, ".slider-handle");
    assert_eq!(handle.style().get_property_value("left").unwrap(), "30%");

    // The move is coalesced into a frame that the release then drops.
    document.dispatch_event(&mouse("mousemove", 150)).unwrap();
    document.dispatch_event(&mouse("mouseup", 150)).unwrap();
    assert!(!page.is_dragging(SliderId(0)));
    assert_eq!(page.percentage(SliderId(0)).unwrap().get(), 30.0);
    assert!(!wrapper.class_list().contains("dragging"));
}

#[wasm_bindgen_test]
fn moves_without_a_press_are_ignored() {
    let document = document_with(WIDGET);
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");

    let mv = mouse("mousemove", 20);
    document.dispatch_event(&mv).unwrap();
    assert!(!mv.default_prevented());
    assert_eq!(page.percentage(SliderId(0)).unwrap().get(), 50.0);
}

#[wasm_bindgen_test]
fn dragged_mouse_moves_are_prevented() {
    let document = document_with(WIDGET);
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");
    let wrapper = element(&document, ".comparison-image-wrapper");

    wrapper.dispatch_event(&mouse("mousedown", 60)).unwrap();
    let mv = mouse("mousemove", 150);
    document.dispatch_event(&mv).unwrap();
    assert!(mv.default_prevented());

    document.dispatch_event(&mouse("mouseup", 150)).unwrap();
    let after = mouse("mousemove", 20);
    document.dispatch_event(&after).unwrap();
    assert!(!after.default_prevented());
    assert!(!page.is_dragging(SliderId(0)));
}

#[wasm_bindgen_test]
async fn touch_drag_paints_and_cancel_ends_it() {
    let document = document_with(WIDGET);
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");
    let wrapper = element(&document, ".comparison-image-wrapper");
    let target: &EventTarget = wrapper.as_ref();

    wrapper.dispatch_event(&touch("touchstart", target, &[60])).unwrap();
    assert!(page.is_dragging(SliderId(0)));
    assert_eq!(page.percentage(SliderId(0)).unwrap().get(), 30.0);
    assert_eq!(handle_left(&document), "30%");
    assert!(wrapper.class_list().contains("dragging"));

    let mv = touch("touchmove", target, &[150]);
    document.dispatch_event(&mv).unwrap();
    assert!(mv.default_prevented());
    // Nothing paints until the frame fires.
    assert_eq!(handle_left(&document), "30%");
    next_frame().await;
    assert_eq!(page.percentage(SliderId(0)).unwrap().get(), 75.0);
    assert_eq!(handle_left(&document), "75%");

    document.dispatch_event(&touch("touchcancel", target, &[])).unwrap();
    assert!(!page.is_dragging(SliderId(0)));
    assert!(!wrapper.class_list().contains("dragging"));
}

#[wasm_bindgen_test]
async fn touch_move_without_contacts_paints_nothing() {
    let document = document_with(WIDGET);
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");
    let wrapper = element(&document, ".comparison-image-wrapper");
    let target: &EventTarget = wrapper.as_ref();

    wrapper.dispatch_event(&touch("touchstart", target, &[60])).unwrap();
    document.dispatch_event(&touch("touchmove", target, &[])).unwrap();
    next_frame().await;
    next_frame().await;

    assert!(page.is_dragging(SliderId(0)));
    assert_eq!(page.percentage(SliderId(0)).unwrap().get(), 30.0);
    assert_eq!(handle_left(&document), "30%");

    document.dispatch_event(&touch("touchend", target, &[])).unwrap();
    assert!(!page.is_dragging(SliderId(0)));
}

#[wasm_bindgen_test]
fn widget_without_handle_mounts_degraded() {
    let document = document_with(
        r#"<div class="comparison-slider">
             <div class="comparison-image-wrapper"><div class="after-image"></div></div>
           </div>"#,
    );
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");

    assert_eq!(page.len(), 1);
    assert_eq!(
        page.report().defects,
        vec![MountError::MissingHandle {
            index: 0,
            selector: ".slider-handle",
        }]
    );
}

#[wasm_bindgen_test]
fn page_without_widgets_mounts_nothing() {
    let document = document_with("<p>no sliders here</p>");
    let page = mount_sliders(&document, &MountConfig::new()).expect("mount");
    assert!(page.is_empty());
    assert_eq!(page.report().mounted, 0);
}

#[wasm_bindgen_test]
fn carousel_builds_dots_and_wraps() {
    let document = document_with(
        r#"<div class="slider-item"></div><div class="slider-item"></div>
           <div class="slider-item"></div><div class="slider-item"></div>
           <button class="prev-btn"></button><button class="next-btn"></button>
           <div class="slider-dots"></div>"#,
    );
    let carousel = mount_carousel(&document, &CarouselConfig::new()).expect("mount");

    assert_eq!(carousel.count(), 4);
    assert_eq!(document.query_selector_all(".slider-dot").unwrap().length(), 4);
    assert_eq!(document.query_selector_all(".slider-item.active").unwrap().length(), 1);

    element(&document, ".prev-btn").click();
    assert_eq!(carousel.index(), 3);
    element(&document, ".next-btn").click();
    assert_eq!(carousel.index(), 0);

    let dots = document.query_selector_all(".slider-dot").unwrap();
    dots.get(2)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert_eq!(carousel.index(), 2);
    assert_eq!(document.query_selector_all(".slider-dot.active").unwrap().length(), 1);
}
