// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Split geometry.
//!
//! [`Percentage`] is the authoritative split position of a slider, always in
//! `[0, 100]`. [`split_percentage`] maps a client x coordinate onto it using
//! the bounds captured at drag start. [`SplitVisual`] derives the two visual
//! properties (after-layer clip and handle offset) from a single percentage so
//! they can never disagree.

use kurbo::Rect;

/// A split position in percent of container width, clamped to `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    /// The left edge: everything shows the "before" image.
    pub const MIN: Self = Self(0.0);
    /// The centre split.
    pub const HALF: Self = Self(50.0);
    /// The right edge: everything shows the "after" image.
    pub const MAX: Self = Self(100.0);

    /// Creates a percentage, clamping into `[0, 100]`.
    ///
    /// NaN maps to [`Percentage::MIN`].
    #[inline]
    #[must_use]
    pub fn new_clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the value in `[0, 100]`.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Maps a client x coordinate onto a split percentage within `bounds`.
///
/// Only the horizontal extent of `bounds` is used. A zero, negative, or
/// non-finite width is degenerate layout and yields [`Percentage::MIN`].
#[must_use]
pub fn split_percentage(client_x: f64, bounds: Rect) -> Percentage {
    let width = bounds.width();
    let ratio = if width > 0.0 && width.is_finite() {
        (client_x - bounds.x0) / width
    } else {
        0.0
    };
    Percentage::new_clamped(ratio * 100.0)
}

/// The two visual properties derived from one split percentage.
///
/// Both are percentages of container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitVisual {
    /// How much of the after layer is clipped away on the right.
    pub clip_right: f64,
    /// Horizontal offset of the handle from the left edge.
    pub handle_left: f64,
}

impl From<Percentage> for SplitVisual {
    fn from(p: Percentage) -> Self {
        Self {
            clip_right: 100.0 - p.get(),
            handle_left: p.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(left: f64, width: f64) -> Rect {
        Rect::new(left, 0.0, left + width, 300.0)
    }

    #[test]
    fn inside_bounds_is_proportional() {
        let p = split_percentage(150.0, bounds(100.0, 200.0));
        assert_eq!(p.get(), 25.0);
    }

    #[test]
    fn left_of_container_clamps_to_zero() {
        let p = split_percentage(20.0, bounds(100.0, 200.0));
        assert_eq!(p, Percentage::MIN);
    }

    #[test]
    fn past_right_edge_clamps_to_hundred() {
        let p = split_percentage(900.0, bounds(100.0, 200.0));
        assert_eq!(p, Percentage::MAX);
    }

    #[test]
    fn zero_width_is_zero_not_nan() {
        let p = split_percentage(150.0, bounds(100.0, 0.0));
        assert_eq!(p.get(), 0.0);
        assert!(p.get().is_finite());
    }

    #[test]
    fn negative_width_is_zero() {
        let rect = Rect::new(200.0, 0.0, 100.0, 10.0);
        assert_eq!(split_percentage(150.0, rect), Percentage::MIN);
    }

    #[test]
    fn nan_clamps_to_min() {
        assert_eq!(Percentage::new_clamped(f64::NAN), Percentage::MIN);
        assert_eq!(Percentage::new_clamped(f64::INFINITY), Percentage::MAX);
        assert_eq!(Percentage::new_clamped(-3.5), Percentage::MIN);
    }

    #[test]
    fn visual_is_derived_from_one_value() {
        let v = SplitVisual::from(Percentage::new_clamped(30.0));
        assert_eq!(v.handle_left, 30.0);
        assert_eq!(v.clip_right, 70.0);
    }
}
