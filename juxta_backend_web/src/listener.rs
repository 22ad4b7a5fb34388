// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned DOM event listeners.
//!
//! [`EventListener`] keeps the JS closure alive for as long as the listener
//! is attached and detaches it on drop, so a listener never outlives the Rust
//! state it points at.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::MountError;

type EventClosure = Closure<dyn FnMut(Event)>;

/// A listener attached to an [`EventTarget`], removed when dropped.
pub(crate) struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: EventClosure,
}

impl EventListener {
    /// Attaches `handler` for `event` on `target`.
    ///
    /// `passive: false` is required for handlers that may call
    /// `preventDefault` on touch events.
    pub(crate) fn attach(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, MountError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|_| MountError::Listener { event })?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
