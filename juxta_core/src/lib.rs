// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag engine and frame coalescing for before/after comparison sliders.
//!
//! `juxta_core` holds everything about a comparison slider that does not
//! touch a browser: drag state, split geometry, pointer unification, and the
//! protocol that folds bursts of input into at most one visual update per
//! display frame. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   host input (mouse / touch)
//!       │
//!       ▼
//!   PointerInput ──► SliderSet::pointer_down / pointer_move / pointer_up
//!                            │
//!              ┌─────────────┴──────────────┐
//!              ▼                            ▼
//!   start: measure + apply now     move: FrameScheduler::request_frame()
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   SliderSet::on_frame(id, handle) ──► SplitSurface::apply_split()
//! ```
//!
//! **[`slider`]**: The per-widget drag state machine. Owns the authoritative
//! split percentage and the single pending frame.
//!
//! **[`registry`]**: [`SliderSet`](registry::SliderSet), the explicit
//! dispatcher that routes shared document-level input to every instance.
//!
//! **[`frame`]**: The [`FrameScheduler`](frame::FrameScheduler) contract and
//! a host-driven [`ManualScheduler`](frame::ManualScheduler).
//!
//! **[`geometry`]**: Percentage math and the derived split visuals.
//!
//! **[`input`]**: Mouse and touch samples folded into one coordinate.
//!
//! **[`backend`]**: The [`SplitSurface`](backend::SplitSurface) trait that
//! platform backends implement to measure and paint a widget.
//!
//! **[`carousel`]**: Index state for the slide carousel collaborator.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and drag events,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod carousel;
pub mod frame;
pub mod geometry;
pub mod id;
pub mod input;
pub mod registry;
pub mod slider;
pub mod trace;

#[cfg(test)]
mod testing;
