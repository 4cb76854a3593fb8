// SPDX-License-Identifier: MPL-2.0
//! Continuous gesture state.
//!
//! Every value here is owned by the [`Gallery`](super::Gallery) and mutated
//! only from its gesture-dispatch path, so handlers borrow it mutably in
//! turn and no locking is involved.

use super::fingers::FingerPhase;
use crate::animation::AnimatedValue;
use crate::domain::gallery::ZoomScale;
use iced_core::{Point, Vector};
use std::time::Duration;

/// Work to run when an animation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The pager reached page `index`; commit it.
    PageCommitted(usize),
    /// The dismiss fade finished; ask the host to close the overlay.
    OverlayClosed,
}

/// An animated gallery value.
pub type Value = AnimatedValue<Completion>;

/// Whether the current drag pages horizontally. Decided once per gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeDetermination {
    #[default]
    Undetermined,
    /// Confirmed page swipe; vertical movement is locked.
    Horizontal,
    /// Vertical drag or pan; cannot page for the rest of the gesture.
    Rejected,
}

/// Pan bookkeeping around a pinch that shares the same touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinchHandoff {
    #[default]
    NotPinched,
    /// A pinch ran during the current pan; the pan's baseline is stale.
    Pinched,
    /// The pan took the touch back after the pinch ended.
    Resumed,
}

/// Per-touch scratch values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchTracking {
    /// Translation captured when the gesture started.
    pub offset: Vector,
    /// Focal point, relative to the photo center, the pinch zooms around.
    pub origin: Vector,
    /// Latest reported focal point relative to the photo center.
    pub adjusted_focal: Vector,
    /// Focal point used on the previous pinch frame.
    pub old_focal: Vector,
    /// Distance between the virtual and the reported focal point while a
    /// pinch continues on one finger.
    pub focal_offset: Vector,
    /// Where the first tap of a double tap landed.
    pub tap_point: Option<Point>,
    pub swipe: SwipeDetermination,
    pub fingers: FingerPhase,
    /// The pinch owns the touch and pan frames are ignored.
    pub pinch_active: bool,
    pub handoff: PinchHandoff,
    /// Zoom scale the current pinch multiplies from.
    pub pinch_baseline: f32,
    /// Haptics already fired for the minimum bound.
    pub hit_min_scale: bool,
    /// Haptics already fired for the maximum bound.
    pub hit_max_scale: bool,
}

impl Default for TouchTracking {
    fn default() -> Self {
        Self {
            offset: Vector::ZERO,
            origin: Vector::ZERO,
            adjusted_focal: Vector::ZERO,
            old_focal: Vector::ZERO,
            focal_offset: Vector::ZERO,
            tap_point: None,
            swipe: SwipeDetermination::Undetermined,
            fingers: FingerPhase::NoTouch,
            pinch_active: false,
            handoff: PinchHandoff::NotPinched,
            pinch_baseline: 1.0,
            // A gallery opens at the minimum scale; reaching it again must
            // not buzz.
            hit_min_scale: true,
            hit_max_scale: false,
        }
    }
}

/// Continuous values of the focused photo, the pager and the chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    pub translate_x: Value,
    pub translate_y: Value,
    /// Zoom scale, always within `[1, 8]`.
    pub scale: Value,
    /// Dismiss rubber-band factor applied on top of `scale`.
    pub pull: Value,
    /// Scale committed by the last completed gesture.
    pub offset_scale: f32,
    /// Page-level offset of the whole pager.
    pub translation_x: Value,
    pub overlay_opacity: Value,
    pub header_footer_visible: Value,
    pub touch: TouchTracking,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            translate_x: Value::new(0.0),
            translate_y: Value::new(0.0),
            scale: Value::new(ZoomScale::default().value()),
            pull: Value::new(1.0),
            offset_scale: ZoomScale::default().value(),
            translation_x: Value::new(0.0),
            overlay_opacity: Value::new(1.0),
            header_footer_visible: Value::new(1.0),
            touch: TouchTracking::default(),
        }
    }

    /// Clears focal history, swipe determination, finger phase and pinch
    /// ownership. Baseline offsets and haptic flags survive.
    pub fn reset_touch(&mut self) {
        let touch = &mut self.touch;
        touch.origin = Vector::ZERO;
        touch.adjusted_focal = Vector::ZERO;
        touch.old_focal = Vector::ZERO;
        touch.focal_offset = Vector::ZERO;
        touch.swipe = SwipeDetermination::Undetermined;
        touch.fingers = FingerPhase::NoTouch;
        touch.pinch_active = false;
    }

    /// Puts the focused photo back at rest, unzoomed and centered.
    pub fn reset_movement(&mut self) {
        self.translate_x.set(0.0);
        self.translate_y.set(0.0);
        self.scale.set(ZoomScale::default().value());
        self.pull.set(1.0);
        self.offset_scale = ZoomScale::default().value();
    }

    /// Stops every animation on the focused photo.
    pub fn cancel_motion(&mut self) {
        self.translate_x.cancel();
        self.translate_y.cancel();
        self.scale.cancel();
        self.pull.cancel();
    }

    /// Writes a zoom scale, clamped into its bounds.
    pub fn set_zoom(&mut self, scale: f32) -> ZoomScale {
        let zoom = ZoomScale::new(scale);
        self.scale.set(zoom.value());
        zoom
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomScale {
        ZoomScale::new(self.scale.get())
    }

    #[must_use]
    pub fn translate(&self) -> Vector {
        Vector::new(self.translate_x.get(), self.translate_y.get())
    }

    /// Scale the photo is rendered at, rubber band included.
    #[must_use]
    pub fn effective_scale(&self) -> f32 {
        self.scale.get() * self.pull.get()
    }

    /// Whether any value is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.values().iter().any(|value| value.is_animating())
    }

    /// Advances every animation and collects the completions that fired.
    pub fn advance(&mut self, dt: Duration) -> Vec<Completion> {
        self.values_mut()
            .into_iter()
            .filter_map(|value| value.advance(dt))
            .collect()
    }

    /// Stops every animation, discarding pending completions.
    pub fn cancel_all(&mut self) {
        for value in self.values_mut() {
            value.cancel();
        }
    }

    fn values(&self) -> [&Value; 7] {
        [
            &self.translate_x,
            &self.translate_y,
            &self.scale,
            &self.pull,
            &self.translation_x,
            &self.overlay_opacity,
            &self.header_footer_visible,
        ]
    }

    fn values_mut(&mut self) -> [&mut Value; 7] {
        [
            &mut self.translate_x,
            &mut self.translate_y,
            &mut self.scale,
            &mut self.pull,
            &mut self.translation_x,
            &mut self.overlay_opacity,
            &mut self.header_footer_visible,
        ]
    }
}
