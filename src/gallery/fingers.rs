// SPDX-License-Identifier: MPL-2.0
//! Finger-count state machine.
//!
//! A pinch keeps ownership of the touch until every finger is lifted. When
//! one finger of two is released the pinch continues on a virtual focal
//! point; when a second finger comes back the origin is re-anchored. This
//! module only tracks which of those situations applies so the pinch math
//! can pick its formula.

/// How many fingers are on the photo and who owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerPhase {
    #[default]
    NoTouch,
    /// One finger, driven by the pan recognizer.
    SingleFingerPan,
    /// Two or more fingers, driven by the pinch recognizer.
    MultiFingerPinch { fingers: usize },
    /// A pinch that lost fingers down to one and still owns the touch.
    PinchDegradedToOne,
}

/// Result of feeding a pointer count into [`FingerPhase::on_pointers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerTransition {
    Unchanged,
    /// A second finger arrived; a pinch starts.
    EnteredPinch,
    /// The pinch dropped to one finger.
    Degraded,
    /// A degraded pinch got a second finger back.
    Restored,
    /// A pinch changed between multi-finger counts (for example 2 to 3).
    FingerCountChanged,
    /// A frame with no pointers; nothing changes.
    Ignored,
}

impl FingerTransition {
    /// Whether the pinch origin must be re-anchored to the new focal point.
    #[must_use]
    pub fn reanchors_origin(self) -> bool {
        matches!(self, Self::Restored | Self::FingerCountChanged)
    }
}

impl FingerPhase {
    /// Applies a frame reporting `pointers` contacts.
    pub fn on_pointers(&mut self, pointers: usize) -> FingerTransition {
        if pointers == 0 {
            return FingerTransition::Ignored;
        }
        let (next, transition) = match (*self, pointers) {
            (Self::NoTouch | Self::SingleFingerPan, 1) => {
                (Self::SingleFingerPan, FingerTransition::Unchanged)
            }
            (Self::NoTouch | Self::SingleFingerPan, n) => {
                (Self::MultiFingerPinch { fingers: n }, FingerTransition::EnteredPinch)
            }
            (Self::MultiFingerPinch { .. }, 1) => {
                (Self::PinchDegradedToOne, FingerTransition::Degraded)
            }
            (Self::MultiFingerPinch { fingers }, n) if fingers == n => {
                (*self, FingerTransition::Unchanged)
            }
            (Self::MultiFingerPinch { .. }, n) => (
                Self::MultiFingerPinch { fingers: n },
                FingerTransition::FingerCountChanged,
            ),
            (Self::PinchDegradedToOne, 1) => (*self, FingerTransition::Unchanged),
            (Self::PinchDegradedToOne, n) => {
                (Self::MultiFingerPinch { fingers: n }, FingerTransition::Restored)
            }
        };
        *self = next;
        transition
    }

    /// Whether translation follows the last two-finger focal point plus the
    /// tracked offset rather than the reported focal point.
    #[must_use]
    pub fn uses_virtual_focal(self) -> bool {
        self == Self::PinchDegradedToOne
    }

    #[must_use]
    pub fn is_pinch(self) -> bool {
        matches!(self, Self::MultiFingerPinch { .. } | Self::PinchDegradedToOne)
    }
}
