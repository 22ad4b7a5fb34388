// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide carousel index.
//!
//! [`Carousel`] tracks which of a fixed number of slides is showing.
//! Navigation wraps around at both ends. Which slide and which indicator dot
//! are "active" is never stored separately: it is projected from the index
//! on demand, so there is exactly one active item at any time.

/// Current position in a fixed, ordered sequence of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    /// Creates a carousel over `count` slides, showing the first one.
    ///
    /// With `count == 0` every navigation call is a no-op.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Returns the index of the showing slide.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of slides.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Moves to the next slide, wrapping to the first after the last.
    pub fn advance(&mut self) -> usize {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
        self.index
    }

    /// Moves to the previous slide, wrapping to the last before the first.
    pub fn retreat(&mut self) -> usize {
        if self.count > 0 {
            self.index = (self.index + self.count - 1) % self.count;
        }
        self.index
    }

    /// Jumps to slide `index`. Returns `false` and stays put if it is out of
    /// range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.count {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Returns `true` if slide (and dot) `i` should be marked active.
    #[must_use]
    pub const fn is_active(&self, i: usize) -> bool {
        self.count > 0 && i == self.index
    }

    /// Iterates the active flag of every slide in order.
    pub fn active_flags(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.count).map(|i| self.is_active(i))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn retreat_from_first_wraps_to_last() {
        let mut c = Carousel::new(4);
        assert_eq!(c.retreat(), 3);
    }

    #[test]
    fn advance_from_last_wraps_to_first() {
        let mut c = Carousel::new(4);
        assert!(c.go_to(3));
        assert_eq!(c.advance(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let mut c = Carousel::new(4);
        c.advance();
        assert!(!c.go_to(4));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn exactly_one_active() {
        let mut c = Carousel::new(5);
        c.go_to(2);
        let flags: Vec<bool> = c.active_flags().collect();
        assert_eq!(flags, [false, false, true, false, false]);
        assert_eq!(c.active_flags().filter(|&a| a).count(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        assert_eq!(c.advance(), 0);
        assert_eq!(c.retreat(), 0);
        assert!(!c.go_to(0));
        assert!(!c.is_active(0));
        assert_eq!(c.active_flags().count(), 0);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = Carousel::new(1);
        assert_eq!(c.advance(), 0);
        assert_eq!(c.retreat(), 0);
        assert!(c.is_active(0));
    }
}
