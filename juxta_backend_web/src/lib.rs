// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for juxta.
//!
//! This crate wires the drag engine to the browser:
//!
//! - [`mount_sliders`]: discovers comparison widgets and wires mouse/touch input
//! - [`RafScheduler`]: `requestAnimationFrame` frame coalescing
//! - [`DomSurface`]: paints the split with `clip-path` and `left`
//! - [`mount_carousel`]: the slide carousel with prev/next buttons and dots
//!
//! With the `trace` feature, every drag event is logged to the browser
//! console through `ConsoleSink`.

#![no_std]

extern crate alloc;

mod carousel;
#[cfg(feature = "trace")]
mod console;
mod input;
mod listener;
mod mount;
mod raf;
mod surface;

pub use carousel::{CarouselConfig, DomCarousel, mount_carousel};
#[cfg(feature = "trace")]
pub use console::ConsoleSink;
pub use input::{mouse_input, touch_contacts};
pub use juxta_core::backend::SplitSurface;
pub use mount::{MountConfig, MountError, MountReport, SliderPage, mount_sliders};
pub use raf::{FrameDispatch, RafScheduler};
pub use surface::DomSurface;
