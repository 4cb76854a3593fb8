// SPDX-License-Identifier: MPL-2.0
//! Momentum decay for flings.
//!
//! Velocity decays exponentially from the release velocity:
//! `v(t) = v0 * exp(-(1 - deceleration) * t_ms * 0.1)`. Position is
//! integrated per frame with the step capped so a stalled frame cannot
//! teleport the value.

use std::time::Duration;

/// Scale applied to the elapsed milliseconds in the decay exponent.
const SLOPE_FACTOR: f32 = 0.1;

/// Speed (px/s) below which a decay is considered at rest.
pub const REST_VELOCITY: f32 = 1.0;

/// Largest integration step.
pub const MAX_STEP: Duration = Duration::from_millis(64);

/// Momentum decay parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    /// Release velocity in px/s.
    pub velocity: f32,
    /// Friction in (0, 1); values closer to 1 glide longer.
    pub deceleration: f32,
    /// Bounds the value stays within, stopping when it reaches one.
    pub clamp: Option<(f32, f32)>,
}

impl Decay {
    #[must_use]
    pub fn new(velocity: f32, deceleration: f32) -> Self {
        Self {
            velocity,
            deceleration,
            clamp: None,
        }
    }

    /// Keeps the value within `[lo, hi]`.
    #[must_use]
    pub fn clamped(mut self, lo: f32, hi: f32) -> Self {
        self.clamp = Some((lo.min(hi), lo.max(hi)));
        self
    }

    /// Velocity after `elapsed_ms` milliseconds.
    #[must_use]
    pub fn velocity_at(&self, elapsed_ms: f32) -> f32 {
        self.velocity * (-(1.0 - self.deceleration) * elapsed_ms * SLOPE_FACTOR).exp()
    }
}

/// Progress of a running decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DecayRun {
    pub params: Decay,
    pub elapsed_ms: f32,
    pub velocity: f32,
}

impl DecayRun {
    pub fn new(params: Decay) -> Self {
        Self {
            params,
            elapsed_ms: 0.0,
            velocity: params.velocity,
        }
    }

    /// Advances `value` by `dt`; returns the new value and whether the decay
    /// came to rest.
    pub fn step(&mut self, value: f32, dt: Duration) -> (f32, bool) {
        let step_ms = dt.min(MAX_STEP).as_secs_f32() * 1000.0;
        self.elapsed_ms += step_ms;
        self.velocity = self.params.velocity_at(self.elapsed_ms);

        let mut next = value + self.velocity * step_ms / 1000.0;
        let mut done = self.velocity.abs() < REST_VELOCITY;

        if let Some((lo, hi)) = self.params.clamp {
            if next <= lo && self.velocity <= 0.0 {
                next = lo;
                done = true;
            } else if next >= hi && self.velocity >= 0.0 {
                next = hi;
                done = true;
            }
            next = next.clamp(lo, hi);
        }

        (next, done)
    }
}
