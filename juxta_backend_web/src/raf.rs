// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` frame scheduler.
//!
//! [`RafScheduler`] implements [`FrameScheduler`] with the browser's
//! `requestAnimationFrame` / `cancelAnimationFrame`. Each slider gets one
//! persistent JS closure, created on its first request and reused after
//! that, so a drag allocates no closures per move. When a frame fires, the
//! closure looks up which handle was outstanding for its slider and hands
//! `(SliderId, FrameHandle)` to the dispatch function supplied at
//! construction.
//!
//! [`FrameScheduler`]: juxta_core::frame::FrameScheduler

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use juxta_core::frame::{FrameHandle, FrameScheduler};
use juxta_core::id::SliderId;

// Global bindings; a drag requests a frame per move and has no Window handy.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Receives fired frames. Called from inside the `requestAnimationFrame`
/// callback, never from inside [`FrameScheduler`] methods.
pub type FrameDispatch = Rc<dyn Fn(SliderId, FrameHandle)>;

type RafClosure = Closure<dyn FnMut(f64)>;

/// A [`FrameScheduler`] backed by `requestAnimationFrame`.
///
/// Dropping the scheduler cancels every outstanding request.
pub struct RafScheduler {
    inner: Rc<RafInner>,
}

struct RafInner {
    /// Where fired frames go.
    dispatch: FrameDispatch,

    /// One closure per slider slot, created on first use.
    closures: RefCell<Vec<Option<RafClosure>>>,

    /// The handle currently registered for each slider slot.
    ///
    /// Taken by the closure when it fires and cleared by `cancel_frame`, so
    /// a handle is delivered at most once.
    outstanding: RefCell<Vec<Option<FrameHandle>>>,
}

impl RafScheduler {
    /// Creates a scheduler that delivers fired frames to `dispatch`.
    #[must_use]
    pub fn new(dispatch: FrameDispatch) -> Self {
        Self {
            inner: Rc::new(RafInner {
                dispatch,
                closures: RefCell::new(Vec::new()),
                outstanding: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Returns the number of requests that have not fired or been cancelled.
    #[must_use]
    pub fn outstanding_len(&self) -> usize {
        self.inner.outstanding.borrow().iter().flatten().count()
    }

    fn ensure_closure(&self, target: SliderId) {
        let slot = target.index();
        let mut closures = self.inner.closures.borrow_mut();
        if closures.len() <= slot {
            closures.resize_with(slot + 1, || None);
        }
        if closures[slot].is_some() {
            return;
        }

        let weak: Weak<RafInner> = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // Release the borrow before dispatching.
            let fired = inner
                .outstanding
                .borrow_mut()
                .get_mut(slot)
                .and_then(Option::take);
            if let Some(handle) = fired {
                (inner.dispatch)(target, handle);
            }
        }) as Box<dyn FnMut(f64)>);
        closures[slot] = Some(closure);
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self, target: SliderId) -> FrameHandle {
        self.ensure_closure(target);
        let slot = target.index();

        let id = {
            let closures = self.inner.closures.borrow();
            match closures.get(slot).and_then(Option::as_ref) {
                Some(closure) => request_animation_frame(closure.as_ref().unchecked_ref()),
                None => 0,
            }
        };
        // rAF ids are positive; 0 never names a live request.
        let handle = FrameHandle(u64::try_from(id).unwrap_or_default());

        let mut outstanding = self.inner.outstanding.borrow_mut();
        if outstanding.len() <= slot {
            outstanding.resize(slot + 1, None);
        }
        outstanding[slot] = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Ok(id) = i32::try_from(handle.0) {
            cancel_animation_frame(id);
        }
        for entry in self.inner.outstanding.borrow_mut().iter_mut() {
            if *entry == Some(handle) {
                *entry = None;
            }
        }
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        let live: Vec<FrameHandle> = self
            .inner
            .outstanding
            .borrow()
            .iter()
            .flatten()
            .copied()
            .collect();
        for handle in live {
            self.cancel_frame(handle);
        }
        // Drop the JS closures so they don't leak.
        self.inner.closures.borrow_mut().clear();
    }
}

impl core::fmt::Debug for RafScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafScheduler")
            .field("closures", &self.inner.closures.borrow().len())
            .field("outstanding", &self.outstanding_len())
            .finish_non_exhaustive()
    }
}
