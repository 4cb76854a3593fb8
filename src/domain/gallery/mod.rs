// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Value objects that are independent of any host UI toolkit.

pub mod newtypes;

pub use newtypes::{scale_bounds, HapticStyle, Overlay, ZoomScale};
