// SPDX-License-Identifier: MPL-2.0
//! Host port.
//!
//! The gallery never renders or plays haptics itself. Everything it needs
//! from the surrounding application goes through [`GalleryHost`].

use crate::domain::gallery::{HapticStyle, Overlay};

/// Services the embedding application provides to the gallery.
pub trait GalleryHost {
    /// Plays haptic feedback.
    fn trigger_haptic(&mut self, style: HapticStyle);

    /// Shows or closes an overlay. The gallery only ever closes itself
    /// with [`Overlay::None`].
    fn set_overlay(&mut self, overlay: Overlay);

    /// The render-visible photo changed.
    fn selected_index_changed(&mut self, index: usize, count: usize) {
        let _ = (index, count);
    }
}

impl<H: GalleryHost + ?Sized> GalleryHost for &mut H {
    fn trigger_haptic(&mut self, style: HapticStyle) {
        (**self).trigger_haptic(style);
    }

    fn set_overlay(&mut self, overlay: Overlay) {
        (**self).set_overlay(overlay);
    }

    fn selected_index_changed(&mut self, index: usize, count: usize) {
        (**self).selected_index_changed(index, count);
    }
}

/// Host that records every request, for tests and trace replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    pub haptics: Vec<HapticStyle>,
    pub overlays: Vec<Overlay>,
    /// `(index, count)` pairs in notification order.
    pub selections: Vec<(usize, usize)>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the gallery asked to be closed.
    #[must_use]
    pub fn closed(&self) -> bool {
        self.overlays.contains(&Overlay::None)
    }
}

impl GalleryHost for RecordingHost {
    fn trigger_haptic(&mut self, style: HapticStyle) {
        self.haptics.push(style);
    }

    fn set_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    fn selected_index_changed(&mut self, index: usize, count: usize) {
        self.selections.push((index, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl GalleryHost for Silent {
        fn trigger_haptic(&mut self, _style: HapticStyle) {}
        fn set_overlay(&mut self, _overlay: Overlay) {}
    }

    #[test]
    fn selection_notification_defaults_to_no_op() {
        let mut host = Silent;
        host.selected_index_changed(1, 2);
    }

    #[test]
    fn recording_host_collects_calls() {
        let mut host = RecordingHost::new();
        host.trigger_haptic(HapticStyle::ImpactLight);
        host.set_overlay(Overlay::None);
        host.selected_index_changed(3, 5);

        assert_eq!(host.haptics, vec![HapticStyle::ImpactLight]);
        assert!(host.closed());
        assert_eq!(host.selections, vec![(3, 5)]);
    }

    fn buzz<H: GalleryHost>(mut host: H) {
        host.trigger_haptic(HapticStyle::Selection);
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut host = RecordingHost::new();
        buzz(&mut host);
        assert_eq!(host.haptics, vec![HapticStyle::Selection]);
    }
}
