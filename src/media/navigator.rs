// SPDX-License-Identifier: MPL-2.0
//! Photo navigation state.
//!
//! [`PhotoNavigator`] owns the projected photo list and the two index values
//! the gallery keeps apart: the authoritative `active_index` driving the
//! pager, and the `selected_index` mirror the render layer reads. The mirror
//! only moves at settle boundaries so per-frame touch deltas never force a
//! re-render of the image list.

use crate::media::photo::{find_photo, project_photos, Message, Photo, PhotoRequest};

/// Navigation state information for footer and counter chrome.
///
/// A snapshot of the navigator, so chrome never needs the photo list itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Render-visible position in the list (0-indexed).
    pub selected_index: usize,
    /// Total number of photos in the list.
    pub photo_count: usize,
    /// Whether there is a next photo to page to.
    pub has_next: bool,
    /// Whether there is a previous photo to page to.
    pub has_previous: bool,
}

/// Manages the photo list and the active/selected indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoNavigator {
    photos: Vec<Photo>,
    active_index: usize,
    selected_index: usize,
    request: Option<PhotoRequest>,
}

impl PhotoNavigator {
    /// Creates an empty navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the photo list with a fresh projection of `messages`.
    ///
    /// The last request is applied again so the viewer stays on the
    /// requested photo when it is still present. Otherwise both indices are
    /// clamped into the new list. Returns the resulting active index when a
    /// request matched.
    pub fn set_messages(&mut self, messages: &[Message]) -> Option<usize> {
        self.photos = project_photos(messages);
        log::debug!("photo list recomputed: {} photos", self.photos.len());

        let matched = self
            .request
            .as_ref()
            .and_then(|request| find_photo(&self.photos, request));

        match matched {
            Some(index) => self.commit(index),
            None => {
                let last = self.photos.len().saturating_sub(1);
                self.active_index = self.active_index.min(last);
                self.selected_index = self.selected_index.min(last);
            }
        }
        matched
    }

    /// Jumps to the requested photo.
    ///
    /// Returns the new active index, or `None` without touching any state
    /// when the photo is not in the list. The request is remembered either
    /// way so a later message update can satisfy it.
    pub fn request(&mut self, request: PhotoRequest) -> Option<usize> {
        let found = find_photo(&self.photos, &request);
        match found {
            Some(index) => {
                log::debug!(
                    "jump to photo {} of message {}",
                    index,
                    request.message_id
                );
                self.commit(index);
            }
            None => log::debug!(
                "requested photo not found in message {}",
                request.message_id
            ),
        }
        self.request = Some(request);
        found
    }

    /// Commits an index change at a settle boundary.
    ///
    /// Out-of-range indices are ignored.
    pub fn commit(&mut self, index: usize) {
        if index < self.photos.len() {
            self.active_index = index;
            self.selected_index = index;
        }
    }

    /// Returns the authoritative index driving the pager.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the index mirrored to the render layer.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Returns the projected photos.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Returns the photo at the active index.
    #[must_use]
    pub fn current(&self) -> Option<&Photo> {
        self.photos.get(self.active_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Returns whether a photo exists after the active one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.active_index + 1 < self.photos.len()
    }

    /// Returns whether a photo exists before the active one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.active_index > 0
    }

    /// Returns a snapshot for chrome rendering.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            selected_index: self.selected_index,
            photo_count: self.photos.len(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::photo::{Attachment, IMAGE_ATTACHMENT};

    fn messages(count: usize) -> Vec<Message> {
        (0..count)
            .map(|i| Message {
                id: format!("m{i}"),
                created_at: None,
                user: None,
                user_id: None,
                attachments: vec![Attachment {
                    kind: Some(IMAGE_ATTACHMENT.into()),
                    image_url: Some(format!("https://cdn/{i}.jpg?w=100")),
                    ..Attachment::default()
                }],
            })
            .collect()
    }

    #[test]
    fn new_navigator_is_empty() {
        let navigator = PhotoNavigator::new();
        assert!(navigator.is_empty());
        assert_eq!(navigator.info(), NavigationInfo::default());
        assert!(navigator.current().is_none());
    }

    #[test]
    fn request_seeds_both_indices() {
        let mut navigator = PhotoNavigator::new();
        navigator.set_messages(&messages(5));

        let index = navigator.request(PhotoRequest::new("m2", "https://cdn/2.jpg"));

        assert_eq!(index, Some(2));
        assert_eq!(navigator.active_index(), 2);
        assert_eq!(navigator.selected_index(), 2);
        assert!(navigator.has_next());
        assert!(navigator.has_previous());
    }

    #[test]
    fn unknown_request_leaves_index_unchanged() {
        let mut navigator = PhotoNavigator::new();
        navigator.set_messages(&messages(5));
        navigator.commit(3);

        assert_eq!(navigator.request(PhotoRequest::new("missing", "x.jpg")), None);
        assert_eq!(navigator.active_index(), 3);
    }

    #[test]
    fn late_messages_satisfy_pending_request() {
        let mut navigator = PhotoNavigator::new();
        assert_eq!(navigator.request(PhotoRequest::new("m4", "https://cdn/4.jpg")), None);

        assert_eq!(navigator.set_messages(&messages(5)), Some(4));
        assert_eq!(navigator.active_index(), 4);
    }

    #[test]
    fn shrinking_list_clamps_indices() {
        let mut navigator = PhotoNavigator::new();
        navigator.set_messages(&messages(5));
        navigator.commit(4);

        navigator.set_messages(&messages(2));

        assert_eq!(navigator.active_index(), 1);
        assert_eq!(navigator.selected_index(), 1);
        assert!(!navigator.has_next());
    }

    #[test]
    fn commit_ignores_out_of_range() {
        let mut navigator = PhotoNavigator::new();
        navigator.set_messages(&messages(3));
        navigator.commit(7);
        assert_eq!(navigator.active_index(), 0);
    }

    #[test]
    fn info_reports_bounds() {
        let mut navigator = PhotoNavigator::new();
        navigator.set_messages(&messages(3));
        navigator.commit(2);

        let info = navigator.info();
        assert_eq!(info.selected_index, 2);
        assert_eq!(info.photo_count, 3);
        assert!(!info.has_next);
        assert!(info.has_previous);
    }
}
