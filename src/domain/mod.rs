// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by the gesture engine,
//! the host port and the configuration layer.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery value objects ([`ZoomScale`](gallery::ZoomScale),
//!   [`HapticStyle`](gallery::HapticStyle), [`Overlay`](gallery::Overlay))

pub mod gallery;
