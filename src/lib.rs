// SPDX-License-Identifier: MPL-2.0
//! `chat_gallery` is a headless gesture and animation engine for the
//! full-screen photo gallery of a chat application.
//!
//! It turns pan, pinch and tap frames reported by a host toolkit into the
//! translation, scale and opacity values a renderer draws, pages between the
//! photos of a conversation, and pulls the gallery closed on a downward
//! fling. Rendering and haptics stay with the host behind
//! [`application::port::GalleryHost`].

#![doc(html_root_url = "https://docs.rs/chat_gallery/0.1.0")]

pub mod animation;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod media;
pub mod trace;

#[cfg(test)]
pub(crate) mod test_utils;
