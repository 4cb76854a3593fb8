// SPDX-License-Identifier: MPL-2.0
//! Timed interpolation towards a target value.

use super::easing::Easing;
use crate::config::DEFAULT_DURATION_MS;
use std::time::Duration;

/// Timed animation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Target value.
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
    /// Time to hold the start value before interpolating.
    pub delay: Duration,
}

impl Timing {
    /// Creates a timing to `to` with the default duration and curve.
    #[must_use]
    pub fn to(to: f32) -> Self {
        Self {
            to,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            easing: Easing::default(),
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Progress of a running timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimingRun {
    pub params: Timing,
    pub from: f32,
    pub elapsed: Duration,
}

impl TimingRun {
    pub fn new(params: Timing, from: f32) -> Self {
        Self {
            params,
            from,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances by `dt`; returns the new value and whether the target was reached.
    pub fn step(&mut self, dt: Duration) -> (f32, bool) {
        self.elapsed += dt;
        let Some(active) = self.elapsed.checked_sub(self.params.delay) else {
            return (self.from, false);
        };
        if active >= self.params.duration {
            return (self.params.to, true);
        }
        let fraction = active.as_secs_f32() / self.params.duration.as_secs_f32();
        let eased = self.params.easing.transform(fraction);
        (self.from + (self.params.to - self.from) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_timing_uses_in_out_quad_for_300ms() {
        let timing = Timing::to(5.0);
        assert_eq!(timing.duration, Duration::from_millis(300));
        assert_eq!(timing.easing, Easing::InOutQuad);
        assert_eq!(timing.delay, Duration::ZERO);
    }

    #[test]
    fn linear_timing_interpolates() {
        let params = Timing::to(100.0)
            .duration(Duration::from_millis(100))
            .easing(Easing::Linear);
        let mut run = TimingRun::new(params, 0.0);

        let (value, done) = run.step(Duration::from_millis(50));
        assert_abs_diff_eq!(value, 50.0, epsilon = 1e-3);
        assert!(!done);

        let (value, done) = run.step(Duration::from_millis(60));
        assert_abs_diff_eq!(value, 100.0);
        assert!(done);
    }

    #[test]
    fn delay_holds_start_value() {
        let params = Timing::to(1.0).delay(Duration::from_millis(100));
        let mut run = TimingRun::new(params, 0.0);
        let (value, done) = run.step(Duration::from_millis(80));
        assert_abs_diff_eq!(value, 0.0);
        assert!(!done);
    }

    #[test]
    fn zero_duration_finishes_on_first_step() {
        let mut run = TimingRun::new(Timing::to(3.0).duration(Duration::ZERO), 0.0);
        let (value, done) = run.step(Duration::ZERO);
        assert_abs_diff_eq!(value, 3.0);
        assert!(done);
    }
}
