// SPDX-License-Identifier: MPL-2.0
//! Screen geometry and the bounds derived from it.
//!
//! All coordinates are left-to-right screen space: positive X moves the
//! photo right, positive Y moves it down, and page `i` of the pager rests at
//! `-(W + margin) * i`.

use iced_core::Size;

/// Screen size, current photo height and pager spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    screen: Size,
    image_height: f32,
    page_margin: f32,
}

impl Layout {
    /// Creates a layout whose photo fills the screen height until its real
    /// height is known.
    #[must_use]
    pub fn new(screen: Size, page_margin: f32) -> Self {
        Self {
            screen,
            image_height: screen.height,
            page_margin,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Updates the screen size. The photo height is capped to the new height.
    pub fn set_screen(&mut self, screen: Size) {
        self.screen = screen;
        self.image_height = self.image_height.min(screen.height);
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.screen.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.screen.height
    }

    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.screen.width / 2.0
    }

    #[must_use]
    pub fn half_height(&self) -> f32 {
        self.screen.height / 2.0
    }

    #[must_use]
    pub fn quarter_height(&self) -> f32 {
        self.screen.height / 4.0
    }

    /// Display height of the current photo at scale 1.
    #[must_use]
    pub fn image_height(&self) -> f32 {
        self.image_height
    }

    /// Sets the current photo height; unusable values fall back to the
    /// screen height.
    pub fn set_image_height(&mut self, height: f32) {
        self.image_height = if height.is_finite() && height > 0.0 {
            height.min(self.screen.height)
        } else {
            self.screen.height
        };
    }

    /// Largest horizontal translation that keeps the photo edges on or
    /// outside the screen edges.
    #[must_use]
    pub fn bound_x(&self, scale: f32) -> f32 {
        self.half_width() * (scale - 1.0)
    }

    /// Largest vertical translation that keeps a tall photo covering the
    /// screen. Negative while the scaled photo is shorter than the screen.
    #[must_use]
    pub fn bound_y(&self, scale: f32) -> f32 {
        (self.image_height / 2.0) * scale - self.half_height()
    }

    /// Scaled photo height.
    #[must_use]
    pub fn scaled_height(&self, scale: f32) -> f32 {
        self.image_height * scale
    }

    /// Whether the scaled photo is shorter than the screen.
    #[must_use]
    pub fn is_short(&self, scale: f32) -> bool {
        self.scaled_height(scale) < self.screen.height
    }

    /// Whether the scaled photo is taller than the screen.
    #[must_use]
    pub fn is_tall(&self, scale: f32) -> bool {
        self.scaled_height(scale) > self.screen.height
    }

    /// Resting pager offset of page `index`.
    #[must_use]
    pub fn page_offset(&self, index: usize) -> f32 {
        -(self.screen.width + self.page_margin) * index as f32
    }

    /// Header and footer opacity while a photo is dragged down.
    ///
    /// Fades over a quarter of the screen once the photo is pulled past its
    /// resting top edge.
    #[must_use]
    pub fn header_footer_opacity(&self, translate_y: f32, scale: f32) -> f32 {
        let past_top = if self.is_short(scale) && translate_y > 0.0 {
            translate_y
        } else if self.is_tall(scale) && translate_y > self.bound_y(scale) {
            translate_y - self.bound_y(scale)
        } else {
            return 1.0;
        };
        (1.0 - past_top / self.quarter_height()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn layout() -> Layout {
        Layout::new(Size::new(400.0, 800.0), 32.0)
    }

    #[test]
    fn image_height_defaults_to_screen_height() {
        assert_abs_diff_eq!(layout().image_height(), 800.0);
    }

    #[test]
    fn bounds_grow_with_scale() {
        let mut layout = layout();
        layout.set_image_height(300.0);

        assert_abs_diff_eq!(layout.bound_x(1.0), 0.0);
        assert_abs_diff_eq!(layout.bound_x(3.0), 400.0);
        assert_abs_diff_eq!(layout.bound_y(2.0), -100.0);
        assert_abs_diff_eq!(layout.bound_y(4.0), 200.0);
        assert!(layout.is_short(2.0));
        assert!(layout.is_tall(4.0));
    }

    #[test]
    fn page_offsets_include_margin() {
        assert_abs_diff_eq!(layout().page_offset(0), 0.0);
        assert_abs_diff_eq!(layout().page_offset(3), -1296.0);
    }

    #[test]
    fn invalid_image_height_falls_back() {
        let mut layout = layout();
        layout.set_image_height(f32::NAN);
        assert_abs_diff_eq!(layout.image_height(), 800.0);
        layout.set_image_height(-5.0);
        assert_abs_diff_eq!(layout.image_height(), 800.0);
        layout.set_image_height(2000.0);
        assert_abs_diff_eq!(layout.image_height(), 800.0);
    }

    #[test]
    fn header_footer_fades_when_short_photo_is_pulled_down() {
        let mut layout = layout();
        layout.set_image_height(400.0);

        assert_abs_diff_eq!(layout.header_footer_opacity(0.0, 1.0), 1.0);
        assert_abs_diff_eq!(layout.header_footer_opacity(100.0, 1.0), 0.5);
        assert_abs_diff_eq!(layout.header_footer_opacity(500.0, 1.0), 0.0);
        assert_abs_diff_eq!(layout.header_footer_opacity(-100.0, 1.0), 1.0);
    }

    #[test]
    fn header_footer_fades_past_top_bound_of_tall_photo() {
        let mut layout = layout();
        layout.set_image_height(800.0);

        // bound_y(2) = 400
        assert_abs_diff_eq!(layout.header_footer_opacity(300.0, 2.0), 1.0);
        assert_abs_diff_eq!(layout.header_footer_opacity(500.0, 2.0), 0.5);
    }
}
