// SPDX-License-Identifier: MPL-2.0
//! Pinch handling: focal-anchored zoom across finger-count changes.
//!
//! Focal points are tracked relative to the photo center:
//! `adjusted = focal - (screen_center + baseline_offset)`. The photo
//! translation on every frame is `offset + focal_term - local * origin`,
//! where `local` is the zoom relative to the pinch baseline and
//! `focal_term` is the reported focal point, or the last two-finger focal
//! point plus a tracked offset while only one finger remains.

use super::events::PinchEvent;
use super::fingers::FingerTransition;
use super::layout::Layout;
use super::settle;
use super::state::{GestureState, PinchHandoff, SwipeDetermination};
use crate::config::{GalleryTuning, MIN_SCALE};
use crate::domain::gallery::HapticStyle;
use iced_core::{Point, Vector};

/// Smallest baseline a pinch multiplies from.
const MIN_BASELINE: f32 = 0.01;

/// What a pinch frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PinchFrame {
    /// Stale or empty frame; nothing changed.
    Ignored,
    /// First two-finger frame; baselines captured, nothing moved.
    Began,
    /// Zoom and translation updated.
    Updated { haptic: Option<HapticStyle> },
}

fn adjusted_focal(layout: &Layout, offset: Vector, focal: Point) -> Vector {
    Vector::new(
        focal.x - (layout.half_width() + offset.x),
        focal.y - (layout.half_height() + offset.y),
    )
}

/// Applies one pinch frame.
///
/// The pinch starts on the first frame reporting two or more pointers.
/// Some platforms report the first frame with a single stale pointer, so
/// earlier frames are ignored, and the starting frame only records
/// baselines.
pub(crate) fn frame(state: &mut GestureState, layout: &Layout, event: &PinchEvent) -> PinchFrame {
    if event.pointers == 0 {
        return PinchFrame::Ignored;
    }
    if !state.touch.pinch_active {
        if event.pointers < 2 {
            return PinchFrame::Ignored;
        }
        begin(state, layout, event);
        return PinchFrame::Began;
    }
    PinchFrame::Updated {
        haptic: update(state, layout, event),
    }
}

fn begin(state: &mut GestureState, layout: &Layout, event: &PinchEvent) {
    state.cancel_motion();

    let baseline = state.effective_scale().max(MIN_BASELINE);
    state.pull.set(1.0);
    state.set_zoom(baseline);

    let offset = state.translate();
    let focal = adjusted_focal(layout, offset, event.focal);
    let touch = &mut state.touch;
    touch.pinch_active = true;
    touch.handoff = PinchHandoff::Pinched;
    touch.swipe = SwipeDetermination::Undetermined;
    touch.fingers.on_pointers(event.pointers);
    touch.pinch_baseline = baseline;
    touch.offset = offset;
    touch.adjusted_focal = focal;
    touch.origin = focal;
    touch.old_focal = focal;
    touch.focal_offset = Vector::ZERO;
}

fn update(state: &mut GestureState, layout: &Layout, event: &PinchEvent) -> Option<HapticStyle> {
    let transition = state.touch.fingers.on_pointers(event.pointers);

    let baseline = state.touch.pinch_baseline;
    let zoom = state.set_zoom(baseline * event.scale);
    let local = zoom.value() / baseline;

    let touch = &mut state.touch;
    let haptic = if zoom.is_inside() {
        touch.hit_min_scale = false;
        touch.hit_max_scale = false;
        None
    } else if zoom.is_max() && !touch.hit_max_scale {
        touch.hit_max_scale = true;
        Some(HapticStyle::ImpactLight)
    } else if zoom.is_min() && !touch.hit_min_scale {
        touch.hit_min_scale = true;
        Some(HapticStyle::ImpactLight)
    } else {
        None
    };

    let focal = adjusted_focal(layout, touch.offset, event.focal);
    touch.adjusted_focal = focal;

    if transition == FingerTransition::Degraded {
        touch.focal_offset = touch.old_focal - focal;
    } else if transition.reanchors_origin() {
        touch.origin = touch.origin - (touch.old_focal - focal) * (1.0 / local);
    }

    touch.old_focal = if touch.fingers.uses_virtual_focal() {
        focal + touch.focal_offset
    } else {
        focal
    };

    let translate = touch.offset + touch.old_focal - touch.origin * local;
    state.translate_x.set(translate.x);
    state.translate_y.set(translate.y);
    haptic
}

/// Ends the pinch: snaps the photo inside the bounds of the new scale and
/// commits that scale. Returns `false` when no pinch was running.
pub(crate) fn finish(state: &mut GestureState, layout: &Layout, tuning: &GalleryTuning) -> bool {
    if !state.touch.pinch_active {
        return false;
    }
    let zoom = state.zoom().value();
    let (x, y) = settle::pinch_release(state.translate(), zoom, layout, tuning);
    x.apply(&mut state.translate_x);
    y.apply(&mut state.translate_y);
    state.offset_scale = zoom.max(MIN_SCALE);
    state.reset_touch();
    true
}
