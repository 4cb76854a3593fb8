// SPDX-License-Identifier: MPL-2.0
//! Async frame driver.
//!
//! Runs a [`Gallery`] on its own task: inputs arrive over a channel, a frame
//! interval advances the animations, and every change is published as a
//! [`GallerySnapshot`] on a watch channel for the render layer.

use super::{Gallery, GalleryInput, GallerySnapshot};
use crate::application::port::GalleryHost;
use crate::error::{Error, Result};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Inputs queued before the driver applies back pressure.
const INPUT_CAPACITY: usize = 64;

/// Handle to a gallery running on a tokio task.
pub struct GalleryDriver<H: GalleryHost + Send + 'static> {
    inputs: mpsc::Sender<GalleryInput>,
    snapshots: watch::Receiver<GallerySnapshot>,
    task: JoinHandle<Gallery<H>>,
}

impl<H: GalleryHost + Send + 'static> GalleryDriver<H> {
    /// Moves `gallery` onto a new task ticking every `frame_interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(gallery: Gallery<H>, frame_interval: Duration) -> Self {
        let (inputs, receiver) = mpsc::channel(INPUT_CAPACITY);
        let (publisher, snapshots) = watch::channel(gallery.snapshot());
        let task = tokio::spawn(run(gallery, receiver, publisher, frame_interval));
        Self {
            inputs,
            snapshots,
            task,
        }
    }

    /// Returns a sender for feeding inputs from other tasks.
    ///
    /// The driver keeps running while any sender is alive.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<GalleryInput> {
        self.inputs.clone()
    }

    /// Queues one input.
    pub async fn send(&self, input: GalleryInput) -> Result<()> {
        self.inputs
            .send(input)
            .await
            .map_err(|_| Error::Driver("gallery task stopped".into()))
    }

    /// Returns a receiver of display snapshots.
    #[must_use]
    pub fn snapshots(&self) -> watch::Receiver<GallerySnapshot> {
        self.snapshots.clone()
    }

    /// Stops accepting inputs and waits for the task to hand the gallery
    /// back once every queued input has been applied.
    pub async fn finish(self) -> Result<Gallery<H>> {
        let Self { inputs, task, .. } = self;
        drop(inputs);
        task.await.map_err(|err| Error::Driver(err.to_string()))
    }
}

async fn run<H: GalleryHost>(
    mut gallery: Gallery<H>,
    mut inputs: mpsc::Receiver<GalleryInput>,
    publisher: watch::Sender<GallerySnapshot>,
    frame_interval: Duration,
) -> Gallery<H> {
    log::debug!("gallery driver started ({:?} frames)", frame_interval);

    let mut frames = time::interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    loop {
        tokio::select! {
            input = inputs.recv() => match input {
                Some(input) => gallery.handle(input),
                None => break,
            },
            now = frames.tick() => {
                let dt = now.saturating_duration_since(last_frame);
                last_frame = now;
                if !gallery.is_animating() {
                    continue;
                }
                gallery.tick(dt);
            }
        }
        publisher.send_replace(gallery.snapshot());
    }

    log::debug!("gallery driver stopped");
    gallery
}
