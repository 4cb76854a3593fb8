// SPDX-License-Identifier: MPL-2.0
//! Events delivered by the host gesture recognizers.

use crate::media::photo::{Message, PhotoRequest};
use iced_core::{Point, Size, Vector};
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Began,
    Active,
    Ended,
}

/// A pan frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: GesturePhase,
    /// Accumulated drag since the pan began.
    pub translation: Vector,
    /// Drag velocity in px/s.
    pub velocity: Vector,
    pub pointers: usize,
}

impl PanEvent {
    #[must_use]
    pub fn began() -> Self {
        Self {
            phase: GesturePhase::Began,
            translation: Vector::ZERO,
            velocity: Vector::ZERO,
            pointers: 1,
        }
    }

    #[must_use]
    pub fn active(translation: Vector, velocity: Vector) -> Self {
        Self {
            phase: GesturePhase::Active,
            translation,
            velocity,
            pointers: 1,
        }
    }

    #[must_use]
    pub fn ended(translation: Vector, velocity: Vector) -> Self {
        Self {
            phase: GesturePhase::Ended,
            translation,
            velocity,
            pointers: 1,
        }
    }

    #[must_use]
    pub fn with_pointers(mut self, pointers: usize) -> Self {
        self.pointers = pointers;
        self
    }
}

/// A pinch frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchEvent {
    pub phase: GesturePhase,
    /// Scale reported by the platform since the pinch began.
    pub scale: f32,
    /// Center of the contact points in screen coordinates.
    pub focal: Point,
    pub pointers: usize,
}

impl PinchEvent {
    #[must_use]
    pub fn new(phase: GesturePhase, scale: f32, focal: Point, pointers: usize) -> Self {
        Self {
            phase,
            scale,
            focal,
            pointers,
        }
    }

    #[must_use]
    pub fn began(focal: Point, pointers: usize) -> Self {
        Self::new(GesturePhase::Began, 1.0, focal, pointers)
    }

    #[must_use]
    pub fn active(scale: f32, focal: Point, pointers: usize) -> Self {
        Self::new(GesturePhase::Active, scale, focal, pointers)
    }

    #[must_use]
    pub fn ended() -> Self {
        Self::new(GesturePhase::Ended, 1.0, Point::ORIGIN, 0)
    }
}

/// A tap frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub phase: GesturePhase,
    pub point: Point,
}

impl TapEvent {
    #[must_use]
    pub fn new(phase: GesturePhase, point: Point) -> Self {
        Self { phase, point }
    }
}

/// Everything the gallery reacts to, in one message type for the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryInput {
    Pan(PanEvent),
    Pinch(PinchEvent),
    SingleTap(TapEvent),
    DoubleTap(TapEvent),
    Show,
    Hide,
    SetMessages(Vec<Message>),
    RequestPhoto(PhotoRequest),
    ImageSize { uri: String, width: u32, height: u32 },
    Resize(Size),
}
