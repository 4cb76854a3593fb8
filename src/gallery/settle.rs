// SPDX-License-Identifier: MPL-2.0
//! Settle planning.
//!
//! Pure functions turning the terminal state of a gesture into the
//! animations that resolve it: a page change, a snap back inside the bounds,
//! a momentum decay, a dismiss, or a tap toggle. The coordinator applies the
//! returned plans; nothing here touches gallery state.

use super::layout::Layout;
use super::state::{SwipeDetermination, Value};
use crate::animation::{Animation, Decay, Easing, Timing};
use crate::config::{GalleryTuning, DISMISS_TOP_SLACK_PX, MIN_SCALE};
use iced_core::{Point, Vector};

/// How one axis comes to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSettle {
    /// Stay where it is.
    Hold,
    Timing(Timing),
    Decay(Decay),
}

impl AxisSettle {
    /// Starts the planned animation on `value`.
    pub fn apply(self, value: &mut Value) {
        match self {
            AxisSettle::Hold => {}
            AxisSettle::Timing(timing) => value.animate(timing),
            AxisSettle::Decay(decay) => value.animate(decay),
        }
    }

    /// Where the axis ends up, when known in advance.
    #[must_use]
    pub fn target(self) -> Option<f32> {
        match self {
            AxisSettle::Timing(timing) => Some(timing.to),
            _ => None,
        }
    }
}

/// Direction of a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Next,
    Previous,
}

/// Terminal state of a pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRelease {
    /// Photo translation at release.
    pub translate: Vector,
    /// Translation captured when the pan began.
    pub offset: Vector,
    /// Accumulated drag.
    pub drag: Vector,
    /// Release velocity in px/s.
    pub velocity: Vector,
    /// Rendered scale, rubber band included.
    pub scale: f32,
    /// Committed zoom scale.
    pub zoom: f32,
    pub swipe: SwipeDetermination,
    pub index: usize,
    pub count: usize,
}

/// Page change started by a pan release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlan {
    pub turn: PageTurn,
    pub index: usize,
    pub pager: Timing,
}

/// Animations closing the gallery after a pull down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissPlan {
    pub overlay: Timing,
    pub pull: Timing,
    pub x: Decay,
    pub y: Animation,
}

/// Everything a pan release resolves into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSettle {
    pub page: Option<PagePlan>,
    pub x: AxisSettle,
    pub y: AxisSettle,
    /// Rubber band recovery.
    pub pull: Timing,
    pub dismiss: Option<DismissPlan>,
}

/// Where the fling would end: the drag plus a weighted share of velocity.
#[must_use]
pub fn projected_end(drag: Vector, velocity: Vector, tuning: &GalleryTuning) -> Vector {
    Vector::new(
        drag.x + velocity.x * tuning.horizontal_velocity_weight,
        drag.y + velocity.y * tuning.vertical_velocity_weight,
    )
}

fn snap_timing(to: f32, tuning: &GalleryTuning) -> Timing {
    Timing::to(to).duration(tuning.snap_duration)
}

fn default_timing(to: f32, tuning: &GalleryTuning) -> Timing {
    Timing::to(to).duration(tuning.default_duration)
}

fn ease_out(to: f32, tuning: &GalleryTuning) -> Timing {
    snap_timing(to, tuning).easing(Easing::EaseOut)
}

/// Whether the release heads for the next page, ignoring list bounds and
/// swipe confirmation: right edge lined up, dragged left, flung far enough.
#[must_use]
pub fn heads_to_next(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> bool {
    let bound = layout.bound_x(release.scale);
    let projected = projected_end(release.drag, release.velocity, tuning);
    (release.offset.x + bound).abs() < tuning.edge_epsilon
        && release.translate.x < 0.0
        && projected.x < -layout.half_width()
}

/// Mirror of [`heads_to_next`] for the previous page.
#[must_use]
pub fn heads_to_previous(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> bool {
    let bound = layout.bound_x(release.scale);
    let projected = projected_end(release.drag, release.velocity, tuning);
    (release.offset.x - bound).abs() < tuning.edge_epsilon
        && release.translate.x > 0.0
        && projected.x > layout.half_width()
}

/// Page change for a confirmed horizontal swipe, if a neighbour exists.
#[must_use]
pub fn page_turn(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> Option<PagePlan> {
    if release.swipe != SwipeDetermination::Horizontal {
        return None;
    }
    let (turn, index) = if release.index + 1 < release.count
        && heads_to_next(release, layout, tuning)
    {
        (PageTurn::Next, release.index + 1)
    } else if release.index > 0 && heads_to_previous(release, layout, tuning) {
        (PageTurn::Previous, release.index - 1)
    } else {
        return None;
    };
    Some(PagePlan {
        turn,
        index,
        pager: Timing::to(layout.page_offset(index))
            .duration(tuning.page_duration)
            .easing(Easing::EaseOut),
    })
}

/// Horizontal settle: center when zoomed out, snap back when past a bound,
/// otherwise keep the momentum inside the bounds.
#[must_use]
pub fn settle_x(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> AxisSettle {
    let x = release.translate.x;
    if release.scale < MIN_SCALE {
        return AxisSettle::Timing(default_timing(0.0, tuning));
    }
    let bound = layout.bound_x(release.scale);
    if x > bound {
        AxisSettle::Timing(snap_timing(bound, tuning))
    } else if x < -bound {
        AxisSettle::Timing(snap_timing(-bound, tuning))
    } else {
        AxisSettle::Decay(
            Decay::new(release.velocity.x, tuning.decay_deceleration).clamped(-bound, bound),
        )
    }
}

/// Vertical settle: center a photo shorter than the screen, otherwise the
/// same shape as [`settle_x`] bounded by the photo height.
#[must_use]
pub fn settle_y(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> AxisSettle {
    let y = release.translate.y;
    if layout.is_short(release.scale) {
        return AxisSettle::Timing(default_timing(0.0, tuning));
    }
    let bound = layout.bound_y(release.scale);
    if y > bound {
        AxisSettle::Timing(default_timing(bound, tuning))
    } else if y < -bound {
        AxisSettle::Timing(default_timing(-bound, tuning))
    } else {
        AxisSettle::Decay(
            Decay::new(release.velocity.y, tuning.decay_deceleration).clamped(-bound, bound),
        )
    }
}

/// Whether a release pulls the gallery closed.
#[must_use]
pub fn should_dismiss(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> bool {
    let projected = projected_end(release.drag, release.velocity, tuning);
    projected.y > layout.half_height()
        && release.offset.y + DISMISS_TOP_SLACK_PX >= layout.bound_y(release.scale)
        && release.swipe != SwipeDetermination::Horizontal
        && release.translate.y != 0.0
        && !heads_to_next(release, layout, tuning)
        && !heads_to_previous(release, layout, tuning)
}

/// Fade out, shrink and keep flinging the photo off screen.
#[must_use]
pub fn dismiss(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> DismissPlan {
    let y = if release.velocity.y > tuning.dismiss_fling_velocity {
        Animation::Decay(Decay::new(release.velocity.y, tuning.decay_deceleration))
    } else {
        Animation::Timing(ease_out(
            layout.half_height() + layout.image_height() / 2.0 * release.scale,
            tuning,
        ))
    };
    DismissPlan {
        overlay: ease_out(0.0, tuning),
        pull: ease_out(tuning.dismiss_scale / release.zoom.max(MIN_SCALE), tuning),
        x: Decay::new(release.velocity.x, tuning.decay_deceleration),
        y,
    }
}

/// Resolves a pan release.
#[must_use]
pub fn pan_release(release: &PanRelease, layout: &Layout, tuning: &GalleryTuning) -> PanSettle {
    let dismiss = should_dismiss(release, layout, tuning).then(|| dismiss(release, layout, tuning));
    PanSettle {
        page: page_turn(release, layout, tuning),
        x: settle_x(release, layout, tuning),
        y: settle_y(release, layout, tuning),
        pull: default_timing(1.0, tuning),
        dismiss,
    }
}

/// Resolves a pinch release: snap the translation back inside the bounds
/// of the committed scale.
#[must_use]
pub fn pinch_release(
    translate: Vector,
    scale: f32,
    layout: &Layout,
    tuning: &GalleryTuning,
) -> (AxisSettle, AxisSettle) {
    let bound_x = layout.bound_x(scale);
    let x = if translate.x > bound_x {
        AxisSettle::Timing(default_timing(bound_x, tuning))
    } else if translate.x < -bound_x {
        AxisSettle::Timing(default_timing(-bound_x, tuning))
    } else {
        AxisSettle::Hold
    };

    let bound_y = layout.bound_y(scale);
    let y = if layout.is_short(scale) {
        AxisSettle::Timing(default_timing(0.0, tuning))
    } else if translate.y > bound_y {
        AxisSettle::Timing(default_timing(bound_y, tuning))
    } else if translate.y < -bound_y {
        AxisSettle::Timing(default_timing(-bound_y, tuning))
    } else {
        AxisSettle::Hold
    };

    (x, y)
}

/// Double tap zoom toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapPlan {
    /// Scale committed immediately.
    pub offset_scale: f32,
    pub scale: Timing,
    pub x: Timing,
    pub y: Option<Timing>,
    /// Zeroes the gesture baseline offsets.
    pub reset_offsets: bool,
    /// Hides the header and footer.
    pub hide_chrome: bool,
}

/// Zooms in around `point` when the photo is at rest, otherwise zooms out.
///
/// Zooming in keeps the tapped column fixed and, when the zoomed photo is
/// taller than the screen, shows the half that was tapped.
#[must_use]
pub fn double_tap(point: Point, at_rest: bool, layout: &Layout, tuning: &GalleryTuning) -> DoubleTapPlan {
    if at_rest {
        let scale = tuning.double_tap_scale;
        let y = layout.is_tall(scale).then(|| {
            let reach = layout.bound_y(scale);
            let to = if point.y > layout.half_height() {
                -reach
            } else {
                reach
            };
            ease_out(to, tuning)
        });
        DoubleTapPlan {
            offset_scale: scale,
            scale: ease_out(scale, tuning),
            x: ease_out(layout.half_width() - point.x, tuning),
            y,
            reset_offsets: false,
            hide_chrome: false,
        }
    } else {
        DoubleTapPlan {
            offset_scale: MIN_SCALE,
            scale: ease_out(MIN_SCALE, tuning),
            x: ease_out(0.0, tuning),
            y: Some(ease_out(0.0, tuning)),
            reset_offsets: true,
            hide_chrome: true,
        }
    }
}

/// Toggles header and footer visibility.
#[must_use]
pub fn single_tap(header_footer_visible: f32, tuning: &GalleryTuning) -> Timing {
    let to = if header_footer_visible > 0.0 { 0.0 } else { 1.0 };
    default_timing(to, tuning)
}
