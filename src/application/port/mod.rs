// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The gallery engine talks to its embedding application only through these
//! traits, which use domain types exclusively.
//!
//! # Available Ports
//!
//! - [`host`]: Haptics, overlay visibility and selection notifications
//!
//! # Example
//!
//! ```
//! use chat_gallery::application::port::GalleryHost;
//! use chat_gallery::domain::gallery::{HapticStyle, Overlay};
//!
//! struct Shell;
//!
//! impl GalleryHost for Shell {
//!     fn trigger_haptic(&mut self, _style: HapticStyle) {}
//!     fn set_overlay(&mut self, overlay: Overlay) {
//!         println!("overlay: {overlay:?}");
//!     }
//! }
//! ```

pub mod host;

pub use host::{GalleryHost, RecordingHost};
