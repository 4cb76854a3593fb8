// SPDX-License-Identifier: MPL-2.0
//! Photo list projection.
//!
//! Derives the flat, index-addressable list of viewable photos from a chat
//! message collection. The projection is a pure function: it is recomputed
//! whenever the messages change and never patched in place.

use chrono::{DateTime, Utc};
use iced_core::Size;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attachment type carrying a viewable image.
pub const IMAGE_ATTACHMENT: &str = "image";

/// Author of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A file or link attached to a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_scrape_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_height: Option<u32>,
}

/// A chat message as delivered by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// One viewable image extracted from a message attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Unique, deterministic id derived from the message id and the uri.
    pub id: String,
    /// Full image url, or the thumbnail when no full image exists.
    pub uri: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Owning message, used for lookup only.
    pub message_id: String,
    pub user: Option<User>,
    pub user_id: Option<String>,
    pub thumb_url: Option<String>,
    pub original_width: Option<u32>,
    pub original_height: Option<u32>,
}

/// Request to show the photo of a given message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRequest {
    pub message_id: String,
    pub url: String,
}

impl PhotoRequest {
    #[must_use]
    pub fn new(message_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            url: url.into(),
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Attachment {
    /// Returns the url the gallery displays, if this attachment is a
    /// viewable image rather than a link preview.
    #[must_use]
    pub fn viewable_uri(&self) -> Option<&str> {
        if self.kind.as_deref() != Some(IMAGE_ATTACHMENT) {
            return None;
        }
        if non_empty(self.title_link.as_ref()).is_some()
            || non_empty(self.og_scrape_url.as_ref()).is_some()
        {
            return None;
        }
        non_empty(self.image_url.as_ref()).or_else(|| non_empty(self.thumb_url.as_ref()))
    }
}

/// Projects messages into the ordered list of viewable photos.
///
/// Photos follow message order, then attachment order. A uri repeated
/// within the same message gets an occurrence suffix so every id is unique.
#[must_use]
pub fn project_photos(messages: &[Message]) -> Vec<Photo> {
    let mut occurrences: HashMap<(&str, &str), usize> = HashMap::new();
    let mut photos = Vec::new();

    for message in messages {
        for attachment in &message.attachments {
            let Some(uri) = attachment.viewable_uri() else {
                continue;
            };

            let seen = occurrences.entry((message.id.as_str(), uri)).or_insert(0);
            let id = if *seen == 0 {
                format!("photoId-{}-{}", message.id, uri)
            } else {
                format!("photoId-{}-{}-{}", message.id, uri, seen)
            };
            *seen += 1;

            photos.push(Photo {
                id,
                uri: uri.to_string(),
                created_at: message.created_at,
                message_id: message.id.clone(),
                user: message.user.clone(),
                user_id: message
                    .user_id
                    .clone()
                    .or_else(|| message.user.as_ref().map(|user| user.id.clone())),
                thumb_url: non_empty(attachment.thumb_url.as_ref()).map(str::to_string),
                original_width: attachment.original_width,
                original_height: attachment.original_height,
            });
        }
    }

    photos
}

/// Strips the query string from a url.
#[must_use]
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// Finds the index of the requested photo, comparing urls without their
/// query strings.
#[must_use]
pub fn find_photo(photos: &[Photo], request: &PhotoRequest) -> Option<usize> {
    let wanted = strip_query(&request.url);
    photos
        .iter()
        .position(|photo| photo.message_id == request.message_id && strip_query(&photo.uri) == wanted)
}

/// Height of an image of the given size when fit to the screen width,
/// capped at the screen height.
///
/// Unknown or degenerate dimensions fall back to the screen height.
#[must_use]
pub fn fit_height(width: Option<u32>, height: Option<u32>, screen: Size) -> f32 {
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 && screen.width > 0.0 => {
            let natural = (h as f32 * screen.width / w as f32).floor();
            natural.min(screen.height)
        }
        _ => screen.height,
    }
}

impl Photo {
    /// Natural display height of this photo on the given screen.
    #[must_use]
    pub fn display_height(&self, screen: Size) -> f32 {
        fit_height(self.original_width, self.original_height, screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn image(url: &str) -> Attachment {
        Attachment {
            kind: Some(IMAGE_ATTACHMENT.to_string()),
            image_url: Some(url.to_string()),
            ..Attachment::default()
        }
    }

    fn message(id: &str, attachments: Vec<Attachment>) -> Message {
        Message {
            id: id.to_string(),
            created_at: None,
            user: None,
            user_id: Some("user-1".to_string()),
            attachments,
        }
    }

    #[test]
    fn keeps_only_viewable_images_in_message_order() {
        let messages = vec![
            message("m1", vec![image("a.png"), Attachment {
                kind: Some("file".into()),
                image_url: Some("doc.pdf".into()),
                ..Attachment::default()
            }]),
            message("m2", vec![
                Attachment {
                    title_link: Some("https://example.com".into()),
                    ..image("preview.png")
                },
                Attachment {
                    og_scrape_url: Some("https://example.com".into()),
                    ..image("scrape.png")
                },
                image("b.png"),
            ]),
        ];

        let photos = project_photos(&messages);
        let uris: Vec<_> = photos.iter().map(|p| p.uri.as_str()).collect();

        assert_eq!(uris, vec!["a.png", "b.png"]);
        assert_eq!(photos[0].id, "photoId-m1-a.png");
        assert_eq!(photos[1].message_id, "m2");
    }

    #[test]
    fn falls_back_to_thumbnail_and_treats_empty_as_missing() {
        let attachment = Attachment {
            kind: Some(IMAGE_ATTACHMENT.into()),
            image_url: Some(String::new()),
            thumb_url: Some("thumb.png".into()),
            title_link: Some(String::new()),
            ..Attachment::default()
        };
        let photos = project_photos(&[message("m1", vec![attachment])]);

        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].uri, "thumb.png");
    }

    #[test]
    fn attachment_without_any_url_is_skipped() {
        let attachment = Attachment {
            kind: Some(IMAGE_ATTACHMENT.into()),
            ..Attachment::default()
        };
        assert!(project_photos(&[message("m1", vec![attachment])]).is_empty());
    }

    #[test]
    fn duplicate_uris_within_a_message_get_unique_ids() {
        let photos = project_photos(&[message("m1", vec![image("a.png"), image("a.png")])]);

        assert_eq!(photos[0].id, "photoId-m1-a.png");
        assert_eq!(photos[1].id, "photoId-m1-a.png-1");
    }

    #[test]
    fn find_photo_ignores_query_strings() {
        let photos = project_photos(&[
            message("m1", vec![image("https://cdn/a.png?sig=1")]),
            message("m2", vec![image("https://cdn/a.png?sig=2")]),
        ]);

        let request = PhotoRequest::new("m2", "https://cdn/a.png?sig=other");
        assert_eq!(find_photo(&photos, &request), Some(1));
    }

    #[test]
    fn find_photo_returns_none_when_absent() {
        let photos = project_photos(&[message("m1", vec![image("a.png")])]);
        assert_eq!(find_photo(&photos, &PhotoRequest::new("m9", "a.png")), None);
        assert_eq!(find_photo(&photos, &PhotoRequest::new("m1", "b.png")), None);
    }

    #[test]
    fn display_height_fits_width_and_caps_at_screen() {
        let screen = Size::new(400.0, 800.0);
        assert_abs_diff_eq!(fit_height(Some(1000), Some(500), screen), 200.0);
        assert_abs_diff_eq!(fit_height(Some(300), Some(1000), screen), 800.0);
        assert_abs_diff_eq!(fit_height(Some(3), Some(1), screen), 133.0);
        assert_abs_diff_eq!(fit_height(None, Some(1), screen), 800.0);
        assert_abs_diff_eq!(fit_height(Some(0), Some(100), screen), 800.0);
    }

    #[test]
    fn user_id_falls_back_to_user() {
        let mut msg = message("m1", vec![image("a.png")]);
        msg.user_id = None;
        msg.user = Some(User {
            id: "u42".into(),
            name: None,
            image: None,
        });
        let photos = project_photos(&[msg]);
        assert_eq!(photos[0].user_id.as_deref(), Some("u42"));
    }
}
