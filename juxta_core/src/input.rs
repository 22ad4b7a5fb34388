// Copyright 2026 the Juxta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input unification.
//!
//! Mouse and touch events both reduce to one horizontal client coordinate.
//! Backends translate native events into a [`PointerInput`]; the slider only
//! ever sees the [`PointerSample`] extracted from it.

/// One touch contact, in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchContact {
    /// Horizontal client coordinate.
    pub client_x: f64,
    /// Vertical client coordinate.
    pub client_y: f64,
}

/// Which input family produced a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse press / move.
    Mouse,
    /// Touch start / move.
    Touch,
}

/// A native pointer event, borrowed from the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput<'a> {
    /// A mouse event.
    Mouse {
        /// Horizontal client coordinate.
        client_x: f64,
    },
    /// A touch event carrying its currently active contacts.
    Touch {
        /// Active contacts in platform order.
        contacts: &'a [TouchContact],
    },
}

impl PointerInput<'_> {
    /// Returns the input family.
    #[must_use]
    pub const fn kind(&self) -> PointerKind {
        match self {
            Self::Mouse { .. } => PointerKind::Mouse,
            Self::Touch { .. } => PointerKind::Touch,
        }
    }

    /// Extracts the sample this event contributes, if any.
    ///
    /// Touch events use their first contact. A touch event with no contacts,
    /// or a non-finite coordinate, yields `None`.
    #[must_use]
    pub fn sample(&self) -> Option<PointerSample> {
        let client_x = match self {
            Self::Mouse { client_x } => *client_x,
            Self::Touch { contacts } => contacts.first()?.client_x,
        };
        client_x.is_finite().then_some(PointerSample {
            client_x,
            kind: self.kind(),
        })
    }
}

/// The owned position carried by a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Horizontal client coordinate.
    pub client_x: f64,
    /// Which input family produced it.
    pub kind: PointerKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(x: f64) -> TouchContact {
        TouchContact {
            client_x: x,
            client_y: 0.0,
        }
    }

    #[test]
    fn mouse_yields_its_coordinate() {
        let s = PointerInput::Mouse { client_x: 42.0 }.sample().unwrap();
        assert_eq!(s.client_x, 42.0);
        assert_eq!(s.kind, PointerKind::Mouse);
    }

    #[test]
    fn touch_uses_first_contact() {
        let contacts = [contact(10.0), contact(90.0)];
        let s = PointerInput::Touch {
            contacts: &contacts,
        }
        .sample()
        .unwrap();
        assert_eq!(s.client_x, 10.0);
        assert_eq!(s.kind, PointerKind::Touch);
    }

    #[test]
    fn touch_without_contacts_has_no_sample() {
        assert_eq!(PointerInput::Touch { contacts: &[] }.sample(), None);
    }

    #[test]
    fn non_finite_coordinate_has_no_sample() {
        assert_eq!(PointerInput::Mouse { client_x: f64::NAN }.sample(), None);
    }
}
