// SPDX-License-Identifier: MPL-2.0
//! Pan handling: drag, axis lock, rubber band and release.

use super::events::PanEvent;
use super::layout::Layout;
use super::settle::{self, PanRelease, PanSettle};
use super::state::{Completion, GestureState, PinchHandoff, SwipeDetermination};
use crate::config::{GalleryTuning, PULL_DAMPING};
use iced_core::Vector;

/// Starts a pan. A pinch already owning the touch keeps it.
pub(crate) fn begin(state: &mut GestureState) {
    if state.touch.pinch_active {
        return;
    }
    state.cancel_motion();
    state.touch.offset = state.translate();
    state.touch.handoff = PinchHandoff::NotPinched;
    state.touch.fingers.on_pointers(1);
}

/// Applies one pan frame. Returns `false` when the frame was ignored.
pub(crate) fn update(
    state: &mut GestureState,
    layout: &Layout,
    tuning: &GalleryTuning,
    event: &PanEvent,
) -> bool {
    if event.pointers != 1 || state.touch.pinch_active {
        return false;
    }
    let drag = event.translation;

    // A pinch just released with one finger still down: continue from
    // where the pinch left the photo and never page from here.
    if state.touch.handoff == PinchHandoff::Pinched {
        state.touch.offset = state.translate() - drag;
        state.touch.swipe = SwipeDetermination::Rejected;
        state.touch.handoff = PinchHandoff::Resumed;
    }

    if state.touch.swipe == SwipeDetermination::Undetermined {
        state.touch.swipe = determine_swipe(state, layout, tuning, drag);
    }

    let pull = state.pull.get();
    let offset = state.touch.offset;
    state.translate_x.set(offset.x * pull + drag.x);
    if state.touch.swipe != SwipeDetermination::Horizontal {
        state.translate_y.set(offset.y * pull + drag.y);
    }

    state.overlay_opacity.set(pull);
    if let Some(pull) = rubber_band(layout, state.scale.get(), state.translate_y.get()) {
        state.pull.set(pull);
    }
    true
}

fn determine_swipe(
    state: &GestureState,
    layout: &Layout,
    tuning: &GalleryTuning,
    drag: Vector,
) -> SwipeDetermination {
    let bound = layout.bound_x(state.effective_scale());
    let offset_x = state.touch.offset.x;
    let lined_up = (-bound - offset_x).abs() < tuning.edge_epsilon
        || (bound - offset_x).abs() < tuning.edge_epsilon;

    if drag.y.abs() > tuning.vertical_lock {
        SwipeDetermination::Rejected
    } else if (drag.x / drag.y).abs() > tuning.swipe_ratio && lined_up {
        SwipeDetermination::Horizontal
    } else {
        SwipeDetermination::Undetermined
    }
}

/// Pull factor while the photo is dragged past its resting top edge, or
/// `None` when the drag stays inside.
fn rubber_band(layout: &Layout, zoom: f32, translate_y: f32) -> Option<f32> {
    let stretch = if layout.is_short(zoom) && translate_y > 0.0 {
        translate_y
    } else if layout.is_tall(zoom) && translate_y > layout.bound_y(zoom) {
        translate_y - layout.bound_y(zoom)
    } else {
        return None;
    };
    Some(1.0 - PULL_DAMPING * (stretch / layout.height()))
}

/// Ends a pan and starts its settle animations.
///
/// Returns the plan so the caller can run the page change. `None` when the
/// release belongs to a pinch: the pinch still owns the touch, more than one
/// finger is down, or the pinch already settled this touch.
pub(crate) fn finish(
    state: &mut GestureState,
    layout: &Layout,
    tuning: &GalleryTuning,
    event: &PanEvent,
    index: usize,
    count: usize,
) -> Option<PanSettle> {
    if state.touch.pinch_active || event.pointers >= 2 {
        return None;
    }
    if state.touch.handoff == PinchHandoff::Pinched {
        state.reset_touch();
        return None;
    }

    let release = PanRelease {
        translate: state.translate(),
        offset: state.touch.offset,
        drag: event.translation,
        velocity: event.velocity,
        scale: state.effective_scale(),
        zoom: state.scale.get(),
        swipe: state.touch.swipe,
        index,
        count,
    };
    let plan = settle::pan_release(&release, layout, tuning);

    plan.x.apply(&mut state.translate_x);
    plan.y.apply(&mut state.translate_y);
    if (state.pull.get() - 1.0).abs() > f32::EPSILON {
        state.pull.animate(plan.pull);
    }

    if let Some(dismiss) = plan.dismiss {
        state.cancel_motion();
        state
            .overlay_opacity
            .animate_then(dismiss.overlay, Completion::OverlayClosed);
        state.pull.animate(dismiss.pull);
        state.translate_y.animate(dismiss.y);
        state.translate_x.animate(dismiss.x);
    }

    state.reset_touch();
    Some(plan)
}
