// SPDX-License-Identifier: MPL-2.0
//! Photo list handling.
//!
//! - [`photo`]: projection of chat messages into viewable photos
//! - [`navigator`]: active/selected index bookkeeping over that list

pub mod navigator;
pub mod photo;

pub use navigator::{NavigationInfo, PhotoNavigator};
pub use photo::{find_photo, project_photos, Attachment, Message, Photo, PhotoRequest, User};
