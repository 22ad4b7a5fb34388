// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider identity.
//!
//! [`SliderId`] is a lightweight handle naming one slider inside a
//! [`SliderSet`](crate::registry::SliderSet). Ids are assigned in insertion
//! order, which is document order when sliders are discovered from a page.

use core::fmt;

/// Identifies one slider within its [`SliderSet`](crate::registry::SliderSet).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SliderId(pub u32);

impl SliderId {
    /// Returns the slot index of this slider.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SliderId({})", self.0)
    }
}
