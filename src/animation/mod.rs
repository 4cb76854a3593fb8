// SPDX-License-Identifier: MPL-2.0
//! Frame-driven animation scheduler.
//!
//! The gallery drives every continuous value through an [`AnimatedValue`].
//! Two primitives cover all settle behavior:
//!
//! - [`Timing`]: eased interpolation to a target over a fixed duration
//! - [`Decay`]: momentum from a release velocity, optionally clamped
//!
//! Values advance only when their owner calls `advance` with the frame
//! delta, so the scheduler has no clock or thread of its own.

pub mod decay;
pub mod easing;
pub mod timing;
pub mod value;

pub use decay::Decay;
pub use easing::Easing;
pub use timing::Timing;
pub use value::AnimatedValue;

/// Either animation primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    Timing(Timing),
    Decay(Decay),
}
