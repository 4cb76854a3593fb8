// SPDX-License-Identifier: MPL-2.0
//! Gesture coordinator for the photo gallery.
//!
//! [`Gallery`] owns the continuous [`GestureState`], the photo list and the
//! layout, and arbitrates between the pan, pinch and tap recognizers the
//! host toolkit runs. Gesture frames mutate state directly; animations only
//! move when [`Gallery::tick`] is called, and index changes are committed
//! only when a page transition completes.
//!
//! # Example
//!
//! ```
//! use chat_gallery::application::port::RecordingHost;
//! use chat_gallery::config::Config;
//! use chat_gallery::gallery::{Gallery, PanEvent};
//! use iced_core::{Size, Vector};
//! use std::time::Duration;
//!
//! let mut gallery = Gallery::new(RecordingHost::new(), Size::new(390.0, 844.0), &Config::default());
//! gallery.show();
//! gallery.on_pan(PanEvent::began());
//! gallery.on_pan(PanEvent::active(Vector::new(0.0, 40.0), Vector::ZERO));
//! gallery.on_pan(PanEvent::ended(Vector::new(0.0, 40.0), Vector::ZERO));
//! gallery.tick(Duration::from_millis(500));
//! assert_eq!(gallery.snapshot().translate, Vector::ZERO);
//! ```

pub mod driver;
pub mod events;
pub mod fingers;
pub mod layout;
mod pan;
mod pinch;
pub mod recognizer;
pub mod settle;
pub mod state;

pub use driver::GalleryDriver;
pub use events::{GalleryInput, GesturePhase, PanEvent, PinchEvent, TapEvent};
pub use fingers::{FingerPhase, FingerTransition};
pub use layout::Layout;
pub use recognizer::{GestureTopology, RecognizerHandle, RecognizerKind};
pub use state::{Completion, GestureState, PinchHandoff, SwipeDetermination, TouchTracking};

use crate::application::port::GalleryHost;
use crate::config::{Config, GalleryTuning, MIN_SCALE};
use crate::domain::gallery::Overlay;
use crate::media::navigator::{NavigationInfo, PhotoNavigator};
use crate::media::photo::{fit_height, Message, PhotoRequest};
use iced_core::{Point, Size, Vector};
use pinch::PinchFrame;
use settle::PagePlan;
use std::collections::HashMap;
use std::time::Duration;

/// Display values for the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySnapshot {
    /// Translation of the focused photo.
    pub translate: Vector,
    /// Scale the focused photo is rendered at.
    pub scale: f32,
    /// Zoom scale without the dismiss rubber band, always within `[1, 8]`.
    pub zoom: f32,
    pub offset_scale: f32,
    /// Offset of the whole pager.
    pub pager_offset: f32,
    pub overlay_opacity: f32,
    pub header_footer_visible: f32,
    pub active_index: usize,
    pub selected_index: usize,
    pub photo_count: usize,
    pub swipe: SwipeDetermination,
    pub pinch_active: bool,
    pub visible: bool,
    pub dismissing: bool,
    pub animating: bool,
}

/// Values header, footer and counter chrome bind to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeState {
    /// Toggled by single taps, 0 hidden to 1 shown.
    pub visibility: f32,
    /// Fades while the photo is pulled down.
    pub opacity: f32,
    pub navigation: NavigationInfo,
}

/// Data changes that arrived while a gesture owned the touch.
#[derive(Debug, Default)]
struct Deferred {
    messages: Option<Vec<Message>>,
    request: Option<PhotoRequest>,
}

impl Deferred {
    fn is_empty(&self) -> bool {
        self.messages.is_none() && self.request.is_none()
    }
}

/// The gallery engine.
pub struct Gallery<H: GalleryHost> {
    state: GestureState,
    navigator: PhotoNavigator,
    layout: Layout,
    tuning: GalleryTuning,
    topology: GestureTopology,
    host: H,
    /// Sizes reported by the host for photos without known dimensions.
    image_sizes: HashMap<String, (u32, u32)>,
    visible: bool,
    dismissing: bool,
    pan_active: bool,
    deferred: Deferred,
}

impl<H: GalleryHost> Gallery<H> {
    /// Creates a hidden gallery tuned by `config`.
    pub fn new(host: H, screen: Size, config: &Config) -> Self {
        Self::with_tuning(host, screen, config.tuning())
    }

    /// Creates a hidden gallery with resolved tuning values.
    pub fn with_tuning(host: H, screen: Size, tuning: GalleryTuning) -> Self {
        Self {
            state: GestureState::new(),
            navigator: PhotoNavigator::new(),
            layout: Layout::new(screen, tuning.page_margin),
            topology: GestureTopology::gallery(tuning.platform),
            tuning,
            host,
            image_sizes: HashMap::new(),
            visible: false,
            dismissing: false,
            pan_active: false,
            deferred: Deferred::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[must_use]
    pub fn navigator(&self) -> &PhotoNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn tuning(&self) -> &GalleryTuning {
        &self.tuning
    }

    #[must_use]
    pub fn topology(&self) -> &GestureTopology {
        &self.topology
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the gallery and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.dismissing
    }

    /// Whether a pan or pinch currently owns the touch.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.pan_active || self.state.touch.pinch_active
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    fn accepts_gestures(&self) -> bool {
        self.visible && !self.dismissing
    }

    fn owners(&self) -> Vec<RecognizerKind> {
        let mut owners = Vec::with_capacity(2);
        if self.pan_active {
            owners.push(RecognizerKind::Pan);
        }
        if self.state.touch.pinch_active {
            owners.push(RecognizerKind::Pinch);
        }
        owners
    }

    /// Handles a pan frame.
    pub fn on_pan(&mut self, event: PanEvent) {
        if !self.accepts_gestures() {
            log::trace!("pan ignored while hidden or dismissing");
            return;
        }
        match event.phase {
            GesturePhase::Began => {
                self.pan_active = true;
                if !self.state.touch.pinch_active {
                    self.commit_pending_page();
                }
                pan::begin(&mut self.state);
            }
            GesturePhase::Active => {
                if !pan::update(&mut self.state, &self.layout, &self.tuning, &event) {
                    log::trace!("pan frame ignored ({} pointers)", event.pointers);
                }
            }
            GesturePhase::Ended => {
                self.pan_active = false;
                self.finish_pan(&event);
                self.apply_deferred();
            }
        }
    }

    fn finish_pan(&mut self, event: &PanEvent) {
        let plan = pan::finish(
            &mut self.state,
            &self.layout,
            &self.tuning,
            event,
            self.navigator.active_index(),
            self.navigator.len(),
        );
        let Some(plan) = plan else {
            return;
        };
        if let Some(page) = plan.page {
            self.start_page(page);
        }
        if plan.dismiss.is_some() {
            log::debug!("dismissing gallery");
            self.dismissing = true;
        }
    }

    /// Handles a pinch frame.
    pub fn on_pinch(&mut self, event: PinchEvent) {
        if !self.accepts_gestures() {
            log::trace!("pinch ignored while hidden or dismissing");
            return;
        }
        match event.phase {
            GesturePhase::Began | GesturePhase::Active => {
                if !self.state.touch.pinch_active && event.pointers >= 2 {
                    self.commit_pending_page();
                }
                match pinch::frame(&mut self.state, &self.layout, &event) {
                    PinchFrame::Ignored => {
                        log::trace!("pinch frame ignored ({} pointers)", event.pointers);
                    }
                    PinchFrame::Began => log::trace!("pinch began"),
                    PinchFrame::Updated { haptic } => {
                        if let Some(style) = haptic {
                            self.host.trigger_haptic(style);
                        }
                    }
                }
            }
            GesturePhase::Ended => {
                pinch::finish(&mut self.state, &self.layout, &self.tuning);
                self.apply_deferred();
            }
        }
    }

    /// Handles a single tap: toggles header and footer.
    pub fn on_single_tap(&mut self, event: TapEvent) {
        if !self.accepts_gestures() || event.phase != GesturePhase::Active {
            return;
        }
        if !self.topology.may_fire(RecognizerKind::SingleTap, &self.owners()) {
            log::trace!("single tap rejected, touch is owned");
            return;
        }
        let visible = &mut self.state.header_footer_visible;
        visible.cancel();
        let toggle = settle::single_tap(visible.get(), &self.tuning);
        visible.animate(toggle);
    }

    /// Handles a double tap: zooms in around the tap or back out.
    pub fn on_double_tap(&mut self, event: TapEvent) {
        if !self.accepts_gestures() {
            return;
        }
        match event.phase {
            GesturePhase::Began => self.state.touch.tap_point = Some(event.point),
            GesturePhase::Active => {
                if !self.topology.may_fire(RecognizerKind::DoubleTap, &self.owners()) {
                    log::trace!("double tap rejected, touch is owned");
                    return;
                }
                let start = self.state.touch.tap_point.unwrap_or(event.point);
                if self.same_spot(start, event.point) {
                    self.toggle_zoom(event.point);
                }
            }
            GesturePhase::Ended => {}
        }
    }

    fn same_spot(&self, a: Point, b: Point) -> bool {
        let slop = self.tuning.double_tap_slop;
        (a.x - b.x).abs() < slop && (a.y - b.y).abs() < slop
    }

    fn toggle_zoom(&mut self, point: Point) {
        let state = &mut self.state;
        let at_rest = state.offset_scale == MIN_SCALE && state.touch.offset == Vector::ZERO;
        let plan = settle::double_tap(point, at_rest, &self.layout, &self.tuning);

        state.offset_scale = plan.offset_scale;
        state.scale.animate(plan.scale);
        state.translate_x.animate(plan.x);
        if let Some(y) = plan.y {
            state.translate_y.animate(y);
        }
        if plan.reset_offsets {
            state.touch.offset = Vector::ZERO;
        }
        if plan.hide_chrome && state.header_footer_visible.get() != 0.0 {
            state.header_footer_visible.cancel();
            state
                .header_footer_visible
                .animate(settle::single_tap(1.0, &self.tuning));
        }
    }

    // =========================================================================
    // Frames and page commits
    // =========================================================================

    /// Advances every animation by `dt` and runs the completions that fired.
    pub fn tick(&mut self, dt: Duration) {
        for completion in self.state.advance(dt) {
            self.complete(completion);
        }
    }

    fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::PageCommitted(index) => {
                self.commit_page(index);
                self.apply_deferred();
            }
            Completion::OverlayClosed => {
                log::debug!("gallery dismissed, closing overlay");
                self.host.set_overlay(Overlay::None);
            }
        }
    }

    fn start_page(&mut self, page: PagePlan) {
        self.commit_pending_page();
        log::debug!("paging {:?} to photo {}", page.turn, page.index);
        self.state
            .translation_x
            .animate_then(page.pager, Completion::PageCommitted(page.index));
    }

    /// Commits a page transition that is still in flight so the index and
    /// the pager never disagree once something else takes over.
    fn commit_pending_page(&mut self) {
        if let Some(Completion::PageCommitted(index)) = self.state.translation_x.cancel() {
            self.state.translation_x.set(self.layout.page_offset(index));
            self.commit_page(index);
        }
    }

    fn commit_page(&mut self, index: usize) {
        self.state.reset_movement();
        self.navigator.commit(index);
        self.refresh_image_height();
        log::debug!("committed photo {} of {}", index, self.navigator.len());
        self.host
            .selected_index_changed(self.navigator.selected_index(), self.navigator.len());
    }

    fn snap_pager(&mut self) {
        let offset = self.layout.page_offset(self.navigator.active_index());
        self.state.translation_x.set(offset);
    }

    fn refresh_image_height(&mut self) {
        let screen = self.layout.screen();
        let height = match self.navigator.current() {
            Some(photo) => match self.image_sizes.get(&photo.uri) {
                Some(&(width, height)) => fit_height(Some(width), Some(height), screen),
                None => photo.display_height(screen),
            },
            None => screen.height,
        };
        self.layout.set_image_height(height);
    }

    // =========================================================================
    // Visibility and data
    // =========================================================================

    /// Opens the gallery on the active photo.
    pub fn show(&mut self) {
        log::debug!("gallery shown on photo {}", self.navigator.active_index());
        self.visible = true;
        self.dismissing = false;
        self.state.overlay_opacity.set(1.0);
        self.snap_pager();
    }

    /// Hides the gallery and resets every touch and movement value at once,
    /// dropping in-flight animations without waiting for them.
    pub fn hide(&mut self) {
        log::debug!("gallery hidden");
        self.visible = false;
        self.dismissing = false;
        self.pan_active = false;
        self.state.cancel_all();
        self.state.reset_touch();
        self.state.reset_movement();
        self.state.touch.offset = Vector::ZERO;
        self.state.touch.tap_point = None;
        self.state.touch.handoff = PinchHandoff::NotPinched;
        self.state.header_footer_visible.set(1.0);
        self.snap_pager();
        self.apply_deferred();
    }

    /// Replaces the message collection and recomputes the photo list.
    ///
    /// While a pan or pinch owns the touch the new list is held back and
    /// applied once the gesture ends, so the index never moves under the
    /// finger.
    pub fn set_messages(&mut self, messages: &[Message]) {
        if self.is_gesture_active() {
            log::debug!("holding {} messages until the gesture ends", messages.len());
            self.deferred.messages = Some(messages.to_vec());
            return;
        }
        self.apply_messages(messages);
    }

    fn apply_messages(&mut self, messages: &[Message]) {
        self.commit_pending_page();
        let before = (self.navigator.active_index(), self.navigator.len());

        let matched = self.navigator.set_messages(messages);

        let after = (self.navigator.active_index(), self.navigator.len());
        if matched.is_some() || after.0 != before.0 {
            self.state.reset_touch();
            self.state.reset_movement();
        }
        self.snap_pager();
        self.refresh_image_height();
        if after != before {
            self.host.selected_index_changed(after.0, after.1);
        }
    }

    /// Jumps to the requested photo, starting fresh on it.
    ///
    /// Returns the new index, or `None` with nothing changed when the photo
    /// is not in the list. A request made while a gesture owns the touch is
    /// held until the gesture ends and also returns `None`.
    pub fn request_photo(&mut self, request: PhotoRequest) -> Option<usize> {
        if self.is_gesture_active() {
            log::debug!(
                "holding request for message {} until the gesture ends",
                request.message_id
            );
            self.deferred.request = Some(request);
            return None;
        }
        self.apply_request(request)
    }

    fn apply_request(&mut self, request: PhotoRequest) -> Option<usize> {
        self.commit_pending_page();
        let index = self.navigator.request(request)?;
        self.state.reset_touch();
        self.state.reset_movement();
        self.snap_pager();
        self.refresh_image_height();
        self.host.selected_index_changed(index, self.navigator.len());
        Some(index)
    }

    /// Applies the list and request held back during the last gesture once
    /// the touch is free and any page turn it started has committed.
    fn apply_deferred(&mut self) {
        if self.deferred.is_empty()
            || self.is_gesture_active()
            || self.state.translation_x.is_animating()
        {
            return;
        }
        let deferred = std::mem::take(&mut self.deferred);
        if let Some(messages) = deferred.messages {
            self.apply_messages(&messages);
        }
        if let Some(request) = deferred.request {
            if self.apply_request(request).is_none() {
                log::debug!("held photo request no longer matches the list");
            }
        }
    }

    /// Records the real size of an image once the host has loaded it.
    pub fn resolve_image_size(&mut self, uri: &str, width: u32, height: u32) {
        self.image_sizes.insert(uri.to_string(), (width, height));
        if self.navigator.current().is_some_and(|photo| photo.uri == uri) {
            self.refresh_image_height();
        }
    }

    /// Updates the screen size.
    pub fn set_screen_size(&mut self, screen: Size) {
        self.layout.set_screen(screen);
        self.refresh_image_height();
        if !self.state.translation_x.is_animating() {
            self.snap_pager();
        }
    }

    /// Dispatches any input.
    pub fn handle(&mut self, input: GalleryInput) {
        match input {
            GalleryInput::Pan(event) => self.on_pan(event),
            GalleryInput::Pinch(event) => self.on_pinch(event),
            GalleryInput::SingleTap(event) => self.on_single_tap(event),
            GalleryInput::DoubleTap(event) => self.on_double_tap(event),
            GalleryInput::Show => self.show(),
            GalleryInput::Hide => self.hide(),
            GalleryInput::SetMessages(messages) => self.set_messages(&messages),
            GalleryInput::RequestPhoto(request) => {
                self.request_photo(request);
            }
            GalleryInput::ImageSize { uri, width, height } => {
                self.resolve_image_size(&uri, width, height);
            }
            GalleryInput::Resize(screen) => self.set_screen_size(screen),
        }
    }

    // =========================================================================
    // Outputs
    // =========================================================================

    /// Current display values.
    #[must_use]
    pub fn snapshot(&self) -> GallerySnapshot {
        let state = &self.state;
        GallerySnapshot {
            translate: state.translate(),
            scale: state.effective_scale(),
            zoom: state.scale.get(),
            offset_scale: state.offset_scale,
            pager_offset: state.translation_x.get(),
            overlay_opacity: state.overlay_opacity.get(),
            header_footer_visible: state.header_footer_visible.get(),
            active_index: self.navigator.active_index(),
            selected_index: self.navigator.selected_index(),
            photo_count: self.navigator.len(),
            swipe: state.touch.swipe,
            pinch_active: state.touch.pinch_active,
            visible: self.visible,
            dismissing: self.dismissing,
            animating: state.is_animating(),
        }
    }

    /// Current chrome values.
    #[must_use]
    pub fn chrome(&self) -> ChromeState {
        ChromeState {
            visibility: self.state.header_footer_visible.get(),
            opacity: self
                .layout
                .header_footer_opacity(self.state.translate_y.get(), self.state.effective_scale()),
            navigation: self.navigator.info(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RecordingHost;
    use crate::domain::gallery::HapticStyle;
    use crate::media::photo::{Attachment, IMAGE_ATTACHMENT};
    use crate::test_utils::assert_abs_diff_eq;

    const FRAME: Duration = Duration::from_millis(16);

    fn messages(count: usize) -> Vec<Message> {
        (0..count)
            .map(|i| Message {
                id: format!("m{i}"),
                created_at: None,
                user: None,
                user_id: None,
                attachments: vec![Attachment {
                    kind: Some(IMAGE_ATTACHMENT.into()),
                    image_url: Some(format!("https://cdn/{i}.jpg")),
                    original_width: Some(400),
                    original_height: Some(300),
                    ..Attachment::default()
                }],
            })
            .collect()
    }

    fn gallery(count: usize) -> Gallery<RecordingHost> {
        let mut gallery = Gallery::new(
            RecordingHost::new(),
            Size::new(400.0, 800.0),
            &Config::default(),
        );
        gallery.set_messages(&messages(count));
        gallery.show();
        gallery
    }

    fn settle(gallery: &mut Gallery<RecordingHost>) {
        for _ in 0..600 {
            if !gallery.is_animating() {
                return;
            }
            gallery.tick(FRAME);
        }
    }

    #[test]
    fn starts_hidden_and_ignores_gestures() {
        let mut gallery = Gallery::new(
            RecordingHost::new(),
            Size::new(400.0, 800.0),
            &Config::default(),
        );
        gallery.on_pan(PanEvent::began());
        gallery.on_pan(PanEvent::active(Vector::new(0.0, 50.0), Vector::ZERO));
        assert!(!gallery.is_visible());
        assert_eq!(gallery.snapshot().translate, Vector::ZERO);
    }

    #[test]
    fn image_height_follows_photo_dimensions() {
        let gallery = gallery(3);
        assert_abs_diff_eq!(gallery.layout().image_height(), 300.0);
    }

    #[test]
    fn resolved_size_updates_current_photo_only() {
        let mut gallery = gallery(3);
        gallery.resolve_image_size("https://cdn/1.jpg", 100, 100);
        assert_abs_diff_eq!(gallery.layout().image_height(), 300.0);

        gallery.resolve_image_size("https://cdn/0.jpg", 200, 300);
        assert_abs_diff_eq!(gallery.layout().image_height(), 600.0);
    }

    #[test]
    fn swipe_pages_after_animation_completes() {
        let mut gallery = gallery(3);
        gallery.on_pan(PanEvent::began());
        gallery.on_pan(PanEvent::active(Vector::new(-250.0, 0.0), Vector::ZERO));
        gallery.on_pan(PanEvent::ended(Vector::new(-250.0, 0.0), Vector::ZERO));

        assert_eq!(gallery.snapshot().active_index, 0);
        settle(&mut gallery);

        let snapshot = gallery.snapshot();
        assert_eq!(snapshot.active_index, 1);
        assert_eq!(snapshot.selected_index, 1);
        assert_abs_diff_eq!(snapshot.pager_offset, -432.0);
        assert_eq!(snapshot.translate, Vector::ZERO);
        assert_eq!(gallery.host().selections.last(), Some(&(1, 3)));
    }

    #[test]
    fn new_pan_commits_page_in_flight() {
        let mut gallery = gallery(3);
        gallery.on_pan(PanEvent::began());
        gallery.on_pan(PanEvent::active(Vector::new(-250.0, 0.0), Vector::ZERO));
        gallery.on_pan(PanEvent::ended(Vector::new(-250.0, 0.0), Vector::ZERO));
        gallery.tick(FRAME);

        gallery.on_pan(PanEvent::began());

        let snapshot = gallery.snapshot();
        assert_eq!(snapshot.active_index, 1);
        assert_abs_diff_eq!(snapshot.pager_offset, -432.0);
    }

    #[test]
    fn single_tap_toggles_chrome() {
        let mut gallery = gallery(1);
        gallery.on_single_tap(TapEvent::new(GesturePhase::Active, Point::new(10.0, 10.0)));
        settle(&mut gallery);
        assert_abs_diff_eq!(gallery.chrome().visibility, 0.0);

        gallery.on_single_tap(TapEvent::new(GesturePhase::Active, Point::new(10.0, 10.0)));
        settle(&mut gallery);
        assert_abs_diff_eq!(gallery.chrome().visibility, 1.0);
    }

    #[test]
    fn taps_are_rejected_while_panning() {
        let mut gallery = gallery(1);
        gallery.on_pan(PanEvent::began());
        gallery.on_single_tap(TapEvent::new(GesturePhase::Active, Point::new(10.0, 10.0)));
        assert!(!gallery.is_animating());
        assert_abs_diff_eq!(gallery.chrome().visibility, 1.0);
    }

    #[test]
    fn pull_down_dismisses_and_closes_overlay() {
        let mut gallery = gallery(2);
        gallery.on_pan(PanEvent::began());
        gallery.on_pan(PanEvent::active(Vector::new(0.0, 300.0), Vector::ZERO));
        assert!(gallery.chrome().opacity < 1.0);
        gallery.on_pan(PanEvent::ended(Vector::new(0.0, 300.0), Vector::new(0.0, 1500.0)));

        assert!(gallery.is_dismissing());
        gallery.on_pan(PanEvent::began());
        gallery.on_pan(PanEvent::active(Vector::new(90.0, 0.0), Vector::ZERO));
        settle(&mut gallery);

        assert_eq!(gallery.host().overlays, vec![Overlay::None]);
        assert_abs_diff_eq!(gallery.snapshot().overlay_opacity, 0.0);
        assert_abs_diff_eq!(gallery.snapshot().scale, 0.6, epsilon = 1e-4);
    }

    #[test]
    fn hide_resets_everything_immediately() {
        let mut gallery = gallery(3);
        gallery.on_pinch(PinchEvent::began(Point::new(200.0, 400.0), 2));
        gallery.on_pinch(PinchEvent::active(3.0, Point::new(250.0, 420.0), 2));

        gallery.hide();

        let snapshot = gallery.snapshot();
        assert_eq!(snapshot.translate, Vector::ZERO);
        assert_abs_diff_eq!(snapshot.scale, 1.0);
        assert!(!snapshot.pinch_active);
        assert!(!snapshot.animating);
        assert!(!snapshot.visible);
    }

    #[test]
    fn pinch_haptics_reach_the_host() {
        let mut gallery = gallery(1);
        gallery.on_pinch(PinchEvent::began(Point::new(200.0, 400.0), 2));
        gallery.on_pinch(PinchEvent::active(9.0, Point::new(200.0, 400.0), 2));
        gallery.on_pinch(PinchEvent::active(10.0, Point::new(200.0, 400.0), 2));
        gallery.on_pinch(PinchEvent::ended());

        assert_eq!(gallery.host().haptics, vec![HapticStyle::ImpactLight]);
        assert_abs_diff_eq!(gallery.snapshot().offset_scale, 8.0);
    }

    /// `messages(3)` with an extra message in front.
    fn prepended() -> Vec<Message> {
        let mut first = messages(1).remove(0);
        first.id = "z".into();
        let mut list = vec![first];
        list.extend(messages(3));
        list
    }

    #[test]
    fn list_change_mid_pan_waits_for_release() {
        let mut gallery = gallery(3);
        gallery.request_photo(PhotoRequest::new("m0", "https://cdn/0.jpg"));
        gallery.on_pan(PanEvent::began());
        gallery.on_pan(PanEvent::active(Vector::new(0.0, -40.0), Vector::ZERO));
        let during = gallery.snapshot();

        gallery.set_messages(&prepended());

        assert_eq!(gallery.snapshot(), during);
        gallery.on_pan(PanEvent::active(Vector::new(0.0, -60.0), Vector::ZERO));
        assert_eq!(gallery.snapshot().active_index, 0);
        assert_eq!(gallery.snapshot().photo_count, 3);

        gallery.on_pan(PanEvent::ended(Vector::new(0.0, -60.0), Vector::ZERO));
        settle(&mut gallery);

        let snapshot = gallery.snapshot();
        assert_eq!(snapshot.active_index, 1);
        assert_eq!(snapshot.photo_count, 4);
        assert_eq!(snapshot.translate, Vector::ZERO);
        assert_abs_diff_eq!(snapshot.pager_offset, -432.0);
        assert_eq!(gallery.host().selections.last(), Some(&(1, 4)));
    }

    #[test]
    fn request_during_pinch_applies_after_release() {
        let mut gallery = gallery(3);
        gallery.on_pinch(PinchEvent::began(Point::new(200.0, 400.0), 2));
        gallery.on_pinch(PinchEvent::active(2.0, Point::new(150.0, 400.0), 2));

        assert_eq!(
            gallery.request_photo(PhotoRequest::new("m2", "https://cdn/2.jpg")),
            None
        );
        assert_eq!(gallery.snapshot().active_index, 0);
        assert!(gallery.snapshot().pinch_active);

        gallery.on_pinch(PinchEvent::ended());
        settle(&mut gallery);

        let snapshot = gallery.snapshot();
        assert_eq!(snapshot.active_index, 2);
        assert_abs_diff_eq!(snapshot.zoom, 1.0);
        assert_eq!(gallery.host().selections.last(), Some(&(2, 3)));
    }

    #[test]
    fn held_list_waits_for_page_turn_to_commit() {
        let mut gallery = gallery(3);
        gallery.on_pan(PanEvent::began());
        gallery.on_pan(PanEvent::active(Vector::new(-250.0, 0.0), Vector::ZERO));
        gallery.set_messages(&messages(5));
        gallery.on_pan(PanEvent::ended(Vector::new(-250.0, 0.0), Vector::ZERO));

        assert_eq!(gallery.snapshot().photo_count, 3);
        gallery.tick(FRAME);
        assert_eq!(gallery.snapshot().active_index, 0);

        settle(&mut gallery);

        let snapshot = gallery.snapshot();
        assert_eq!(snapshot.active_index, 1);
        assert_eq!(snapshot.photo_count, 5);
        assert_abs_diff_eq!(snapshot.pager_offset, -432.0);
        assert_eq!(gallery.host().selections.last(), Some(&(1, 5)));
    }

    #[test]
    fn hide_applies_held_list() {
        let mut gallery = gallery(3);
        gallery.on_pan(PanEvent::began());
        gallery.set_messages(&messages(1));
        assert_eq!(gallery.snapshot().photo_count, 3);

        gallery.hide();

        assert!(!gallery.is_gesture_active());
        assert_eq!(gallery.snapshot().photo_count, 1);
    }

    #[test]
    fn shrinking_list_clamps_and_notifies() {
        let mut gallery = gallery(5);
        gallery.request_photo(PhotoRequest::new("m4", "https://cdn/4.jpg"));

        gallery.set_messages(&messages(2));

        let snapshot = gallery.snapshot();
        assert_eq!(snapshot.active_index, 1);
        assert_eq!(snapshot.photo_count, 2);
        assert_abs_diff_eq!(snapshot.pager_offset, -432.0);
    }
}
