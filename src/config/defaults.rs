// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the tuned values
//! used by the gallery engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom bounds and preset zoom levels
//! - **Gestures**: Swipe disambiguation thresholds and fling projection weights
//! - **Animation**: Durations and decay friction
//! - **Layout**: Pager spacing

// ==========================================================================
// Scale Defaults
// ==========================================================================

use crate::domain::gallery::scale_bounds;

/// Smallest committed zoom scale (image fits the screen width).
pub const MIN_SCALE: f32 = scale_bounds::MIN;

/// Largest committed zoom scale.
pub const MAX_SCALE: f32 = scale_bounds::MAX;

/// Scale reached by a double tap on an unzoomed photo.
pub const DOUBLE_TAP_SCALE: f32 = 2.0;

/// Rendered scale the photo shrinks to while being dismissed.
pub const DISMISS_SCALE: f32 = 0.6;

/// Fraction of the screen height used to damp the pull-down scale.
pub const PULL_DAMPING: f32 = 1.0 / 3.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum `|dx/dy|` ratio to confirm a page swipe on iOS.
pub const IOS_SWIPE_RATIO: f32 = 0.25;

/// Minimum `|dx/dy|` ratio to confirm a page swipe on Android.
/// Android reports coarser touch deltas, so the threshold is stricter.
pub const ANDROID_SWIPE_RATIO: f32 = 1.0;

/// Distance (logical px) within which the photo counts as lined up with an edge.
pub const EDGE_EPSILON_PX: f32 = 3.0;

/// Vertical travel (logical px) after which a drag can no longer become a page swipe.
pub const VERTICAL_LOCK_PX: f32 = 25.0;

/// Maximum distance (logical px) between both taps of a double tap.
pub const DOUBLE_TAP_SLOP_PX: f32 = 64.0;

/// Slack (logical px) when checking that a tall photo is scrolled to its top.
pub const DISMISS_TOP_SLACK_PX: f32 = 8.0;

/// Seconds of horizontal velocity added to the drag to project the fling end.
pub const HORIZONTAL_VELOCITY_WEIGHT: f32 = 0.3;

/// Seconds of vertical velocity added to the drag to project the fling end.
pub const VERTICAL_VELOCITY_WEIGHT: f32 = 0.1;

/// Vertical release velocity (px/s) above which a dismiss keeps flinging.
pub const DISMISS_FLING_VELOCITY: f32 = 1000.0;

/// Minimum pan distance (logical px) before the host recognizer activates.
pub const PAN_MIN_DISTANCE_PX: f32 = 10.0;

/// Maximum finger travel (logical px) allowed during a double tap.
pub const DOUBLE_TAP_MAX_DISTANCE_PX: f32 = 8.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of a page transition.
pub const PAGE_DURATION_MS: u64 = 200;

/// Duration of snapping back to a bound, zoom toggles and dismiss.
pub const SNAP_DURATION_MS: u64 = 200;

/// Duration used when no explicit duration is given.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Friction of momentum decay after a release (closer to 1 glides longer).
pub const DECAY_DECELERATION: f32 = 0.99;

/// Interval between animation frames for the async driver.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Horizontal gap between neighbouring pages.
pub const PAGE_MARGIN_PX: f32 = 32.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(DOUBLE_TAP_SCALE > MIN_SCALE);
    assert!(DOUBLE_TAP_SCALE <= MAX_SCALE);
    assert!(DISMISS_SCALE > 0.0);
    assert!(DISMISS_SCALE < MIN_SCALE);

    assert!(EDGE_EPSILON_PX > 0.0);
    assert!(VERTICAL_LOCK_PX > EDGE_EPSILON_PX);
    assert!(HORIZONTAL_VELOCITY_WEIGHT > 0.0);
    assert!(VERTICAL_VELOCITY_WEIGHT > 0.0);

    assert!(DECAY_DECELERATION > 0.0);
    assert!(DECAY_DECELERATION < 1.0);
    assert!(PAGE_DURATION_MS > 0);
    assert!(FRAME_INTERVAL_MS > 0);
};
