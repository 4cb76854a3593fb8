// SPDX-License-Identifier: MPL-2.0
//! Animated scalar values.

use super::decay::{Decay, DecayRun};
use super::timing::{Timing, TimingRun};
use super::Animation;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Running {
    Timing(TimingRun),
    Decay(DecayRun),
}

/// A scalar that may be driven by one animation at a time.
///
/// An animation can carry a completion tag `C`. The tag is handed back by
/// [`AnimatedValue::advance`] when the animation finishes on its own, or by
/// [`AnimatedValue::cancel`] when it is interrupted, so the owner decides
/// what an interrupted transition means.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue<C = ()> {
    value: f32,
    running: Option<Running>,
    completion: Option<C>,
}

impl<C> AnimatedValue<C> {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            running: None,
            completion: None,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Jumps to `value`, stopping any running animation.
    ///
    /// A pending completion is discarded; call [`AnimatedValue::cancel`]
    /// first when it matters.
    pub fn set(&mut self, value: f32) {
        self.running = None;
        self.completion = None;
        self.value = value;
    }

    /// Starts `animation` from the current value, replacing any running one.
    pub fn animate(&mut self, animation: impl Into<Animation>) {
        self.completion = None;
        self.running = Some(match animation.into() {
            Animation::Timing(params) => Running::Timing(TimingRun::new(params, self.value)),
            Animation::Decay(params) => Running::Decay(DecayRun::new(params)),
        });
    }

    /// Starts `animation` and reports `tag` once it completes.
    pub fn animate_then(&mut self, animation: impl Into<Animation>, tag: C) {
        self.animate(animation);
        self.completion = Some(tag);
    }

    /// Stops the running animation where it is.
    ///
    /// Returns the completion tag of the interrupted animation, if any.
    pub fn cancel(&mut self) -> Option<C> {
        self.running = None;
        self.completion.take()
    }

    /// Advances the running animation by `dt`.
    ///
    /// Returns the completion tag when the animation finished this frame.
    pub fn advance(&mut self, dt: Duration) -> Option<C> {
        let running = self.running.as_mut()?;
        let (value, done) = match running {
            Running::Timing(run) => run.step(dt),
            Running::Decay(run) => run.step(self.value, dt),
        };
        self.value = value;
        if done {
            self.running = None;
            self.completion.take()
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Returns where a running timing will land.
    ///
    /// Decays have no fixed target and report `None`.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        match &self.running {
            Some(Running::Timing(run)) => Some(run.params.to),
            _ => None,
        }
    }

    /// Returns the value the owner should treat as final: the timing
    /// target when one is running, else the current value.
    #[must_use]
    pub fn resting(&self) -> f32 {
        self.target().unwrap_or(self.value)
    }
}

impl<C> Default for AnimatedValue<C> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<Timing> for Animation {
    fn from(params: Timing) -> Self {
        Animation::Timing(params)
    }
}

impl From<Decay> for Animation {
    fn from(params: Decay) -> Self {
        Animation::Decay(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use crate::test_utils::assert_abs_diff_eq;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn set_jumps_and_stops_animation() {
        let mut value: AnimatedValue = AnimatedValue::new(0.0);
        value.animate(Timing::to(10.0));
        value.set(3.0);

        assert!(!value.is_animating());
        assert_abs_diff_eq!(value.get(), 3.0);
        assert_eq!(value.advance(FRAME), None);
    }

    #[test]
    fn completion_is_reported_once_on_finish() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_then(
            Timing::to(1.0)
                .duration(Duration::from_millis(32))
                .easing(Easing::Linear),
            "done",
        );

        assert_eq!(value.target(), Some(1.0));
        assert_eq!(value.advance(FRAME), None);
        assert_eq!(value.advance(FRAME), Some("done"));
        assert_eq!(value.advance(FRAME), None);
        assert_abs_diff_eq!(value.get(), 1.0);
    }

    #[test]
    fn cancel_returns_interrupted_completion_and_keeps_value() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_then(Timing::to(100.0).easing(Easing::Linear), 7);
        value.advance(Duration::from_millis(150));
        let current = value.get();

        assert_eq!(value.cancel(), Some(7));
        assert_abs_diff_eq!(value.get(), current);
        assert_eq!(value.cancel(), None);
    }

    #[test]
    fn new_animation_drops_previous_completion() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_then(Timing::to(1.0), 1);
        value.animate(Timing::to(2.0).duration(Duration::ZERO));
        assert_eq!(value.advance(FRAME), None);
        assert_abs_diff_eq!(value.get(), 2.0);
    }

    #[test]
    fn decay_has_no_target() {
        let mut value: AnimatedValue = AnimatedValue::new(5.0);
        value.animate(Decay::new(500.0, 0.99));
        assert!(value.is_animating());
        assert_eq!(value.target(), None);
        assert_abs_diff_eq!(value.resting(), 5.0);
        value.advance(FRAME);
        assert!(value.get() > 5.0);
    }
}
