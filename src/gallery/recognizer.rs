// SPDX-License-Identifier: MPL-2.0
//! Recognizer topology.
//!
//! The host toolkit runs the actual recognizers. This module describes how
//! they must be wired (who waits for whom, who runs simultaneously and with
//! which thresholds) so every host configures them the same way, and lets
//! the gallery check the same rules at runtime.

use crate::config::{Platform, DOUBLE_TAP_MAX_DISTANCE_PX, PAN_MIN_DISTANCE_PX};

/// The gallery's recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    Pan,
    Pinch,
    SingleTap,
    DoubleTap,
}

/// Configuration of one recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerHandle {
    pub kind: RecognizerKind,
    /// Recognizers that must fail before this one may fire.
    pub wait_for: Vec<RecognizerKind>,
    /// Recognizers allowed to run at the same time as this one.
    pub simultaneous_with: Vec<RecognizerKind>,
    /// Travel before a pan activates.
    pub min_distance: Option<f32>,
    /// Travel after which a tap fails.
    pub max_distance: Option<f32>,
    pub number_of_taps: Option<u32>,
    pub max_pointers: Option<usize>,
}

impl RecognizerHandle {
    fn new(kind: RecognizerKind) -> Self {
        Self {
            kind,
            wait_for: Vec::new(),
            simultaneous_with: Vec::new(),
            min_distance: None,
            max_distance: None,
            number_of_taps: None,
            max_pointers: None,
        }
    }

    #[must_use]
    pub fn waits_for(&self, other: RecognizerKind) -> bool {
        self.wait_for.contains(&other)
    }

    #[must_use]
    pub fn is_simultaneous_with(&self, other: RecognizerKind) -> bool {
        self.simultaneous_with.contains(&other)
    }
}

/// The wiring of all gallery recognizers.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTopology {
    handles: Vec<RecognizerHandle>,
}

impl GestureTopology {
    /// Wiring used by the gallery.
    ///
    /// Single tap waits for pan, pinch and double tap to fail. Pan and pinch
    /// run simultaneously so a pinch can take over a pan in progress. On
    /// iOS the pan only tracks one pointer; the pinch handles the rest.
    #[must_use]
    pub fn gallery(platform: Platform) -> Self {
        let mut pan = RecognizerHandle::new(RecognizerKind::Pan);
        pan.simultaneous_with.push(RecognizerKind::Pinch);
        pan.min_distance = Some(PAN_MIN_DISTANCE_PX);
        if platform == Platform::Ios {
            pan.max_pointers = Some(1);
        }

        let mut pinch = RecognizerHandle::new(RecognizerKind::Pinch);
        pinch.simultaneous_with.push(RecognizerKind::Pan);

        let mut double_tap = RecognizerHandle::new(RecognizerKind::DoubleTap);
        double_tap.number_of_taps = Some(2);
        double_tap.max_distance = Some(DOUBLE_TAP_MAX_DISTANCE_PX);

        let mut single_tap = RecognizerHandle::new(RecognizerKind::SingleTap);
        single_tap.number_of_taps = Some(1);
        single_tap.wait_for = vec![
            RecognizerKind::Pan,
            RecognizerKind::Pinch,
            RecognizerKind::DoubleTap,
        ];

        Self {
            handles: vec![pan, pinch, single_tap, double_tap],
        }
    }

    /// Returns the handle of `kind`.
    #[must_use]
    pub fn handle(&self, kind: RecognizerKind) -> Option<&RecognizerHandle> {
        self.handles.iter().find(|handle| handle.kind == kind)
    }

    #[must_use]
    pub fn handles(&self) -> &[RecognizerHandle] {
        &self.handles
    }

    /// Whether `kind` may fire while the `owners` hold the touch.
    ///
    /// A recognizer is blocked by an owner it waits for, and by any owner
    /// it is not declared simultaneous with.
    #[must_use]
    pub fn may_fire(&self, kind: RecognizerKind, owners: &[RecognizerKind]) -> bool {
        let Some(handle) = self.handle(kind) else {
            return false;
        };
        owners.iter().all(|&owner| {
            owner == kind || (!handle.waits_for(owner) && handle.is_simultaneous_with(owner))
        })
    }
}
