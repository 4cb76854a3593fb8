// SPDX-License-Identifier: MPL-2.0
//! Recorded gesture traces.
//!
//! A trace is a TOML file describing a viewport, the chat messages, an
//! optional photo request and a list of steps. Replaying it through a
//! [`Gallery`] reproduces a touch session frame by frame, which is how
//! gesture tuning is checked without a device.
//!
//! ```toml
//! [viewport]
//! width = 390.0
//! height = 844.0
//!
//! [[messages]]
//! id = "m1"
//! attachments = [{ type = "image", image_url = "https://cdn/a.jpg" }]
//!
//! [[steps]]
//! kind = "show"
//!
//! [[steps]]
//! kind = "pan"
//! phase = "active"
//! x = -250.0
//!
//! [[steps]]
//! kind = "tick"
//! ms = 300
//! ```

use crate::application::port::GalleryHost;
use crate::config::Platform;
use crate::error::{Error, Result};
use crate::gallery::{
    Gallery, GalleryInput, GallerySnapshot, GesturePhase, PanEvent, PinchEvent, TapEvent,
};
use crate::media::photo::{Message, PhotoRequest};
use iced_core::{Point, Size, Vector};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Screen the trace was recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Overrides the configured platform profile.
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl Viewport {
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

fn one() -> usize {
    1
}

fn two() -> usize {
    2
}

fn unit_scale() -> f32 {
    1.0
}

fn active() -> GesturePhase {
    GesturePhase::Active
}

/// One recorded step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Pan {
        phase: GesturePhase,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        vx: f32,
        #[serde(default)]
        vy: f32,
        #[serde(default = "one")]
        pointers: usize,
    },
    Pinch {
        phase: GesturePhase,
        #[serde(default = "unit_scale")]
        scale: f32,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default = "two")]
        pointers: usize,
    },
    Tap {
        #[serde(default = "active")]
        phase: GesturePhase,
        x: f32,
        y: f32,
    },
    DoubleTap {
        #[serde(default = "active")]
        phase: GesturePhase,
        x: f32,
        y: f32,
    },
    /// Advances the animation clock.
    Tick { ms: u64 },
    Show,
    Hide,
    Request { message_id: String, url: String },
    ImageSize { uri: String, width: u32, height: u32 },
    Resize { width: f32, height: f32 },
}

/// What a step does to the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAction {
    Input(GalleryInput),
    Tick(Duration),
}

impl From<Step> for StepAction {
    fn from(step: Step) -> Self {
        let input = match step {
            Step::Pan {
                phase,
                x,
                y,
                vx,
                vy,
                pointers,
            } => GalleryInput::Pan(PanEvent {
                phase,
                translation: Vector::new(x, y),
                velocity: Vector::new(vx, vy),
                pointers,
            }),
            Step::Pinch {
                phase,
                scale,
                x,
                y,
                pointers,
            } => GalleryInput::Pinch(PinchEvent::new(phase, scale, Point::new(x, y), pointers)),
            Step::Tap { phase, x, y } => {
                GalleryInput::SingleTap(TapEvent::new(phase, Point::new(x, y)))
            }
            Step::DoubleTap { phase, x, y } => {
                GalleryInput::DoubleTap(TapEvent::new(phase, Point::new(x, y)))
            }
            Step::Tick { ms } => return StepAction::Tick(Duration::from_millis(ms)),
            Step::Show => GalleryInput::Show,
            Step::Hide => GalleryInput::Hide,
            Step::Request { message_id, url } => {
                GalleryInput::RequestPhoto(PhotoRequest::new(message_id, url))
            }
            Step::ImageSize { uri, width, height } => GalleryInput::ImageSize { uri, width, height },
            Step::Resize { width, height } => GalleryInput::Resize(Size::new(width, height)),
        };
        StepAction::Input(input)
    }
}

/// A parsed trace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trace {
    pub viewport: Viewport,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub request: Option<PhotoRequest>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Trace {
    /// Parses a trace from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::Trace(err.to_string()))
    }

    /// Reads and parses a trace file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Loads the messages and the request, then applies every step in
    /// order. `on_step` sees the snapshot after each step.
    pub fn replay<H: GalleryHost>(
        &self,
        gallery: &mut Gallery<H>,
        mut on_step: impl FnMut(usize, &Step, &GallerySnapshot),
    ) {
        gallery.set_screen_size(self.viewport.size());
        gallery.set_messages(&self.messages);
        if let Some(request) = &self.request {
            if gallery.request_photo(request.clone()).is_none() {
                log::warn!("trace requests a photo that is not in its messages");
            }
        }

        let frame = gallery.tuning().frame_interval;
        for (index, step) in self.steps.iter().enumerate() {
            match StepAction::from(step.clone()) {
                StepAction::Input(input) => gallery.handle(input),
                StepAction::Tick(duration) => tick_in_frames(gallery, duration, frame),
            }
            on_step(index, step, &gallery.snapshot());
        }
    }
}

/// Advances `duration` in frame-sized steps so decays integrate the same
/// way they do on a device.
fn tick_in_frames<H: GalleryHost>(gallery: &mut Gallery<H>, duration: Duration, frame: Duration) {
    let mut remaining = duration;
    while !remaining.is_zero() {
        let dt = remaining.min(frame);
        gallery.tick(dt);
        remaining -= dt;
    }
}
