// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for gallery values, ensuring they are always within
//! valid ranges, plus the small enums exchanged with the host.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Zoom scale bounds (1x to 8x).
pub mod scale_bounds {
    /// Minimum zoom scale, the photo fits the screen width.
    pub const MIN: f32 = 1.0;
    /// Maximum zoom scale.
    pub const MAX: f32 = 8.0;
    /// Default zoom scale.
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale factor, guaranteed to be within valid range (1x–8x).
///
/// Every pinch frame writes through this type so the committed scale can
/// never leave its bounds, whatever scale the platform reports.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new zoom scale, clamping the value to the valid range.
    ///
    /// NaN falls back to the minimum.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self(scale_bounds::MIN);
        }
        Self(scale.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX
    }

    /// Returns whether the scale is strictly between both bounds.
    #[must_use]
    pub fn is_inside(self) -> bool {
        !self.is_min() && !self.is_max()
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// HapticStyle
// =============================================================================

/// Feedback intensity requested from the host haptics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticStyle {
    ImpactLight,
    ImpactMedium,
    ImpactHeavy,
    Selection,
}

// =============================================================================
// Overlay
// =============================================================================

/// Overlay the host should display on top of the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overlay {
    /// No overlay, the gallery is closed.
    #[default]
    None,
    Gallery,
    Alert,
    Message,
}
