// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery configuration, including loading and saving
//! tuning values to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[gestures]` - Platform profile, swipe thresholds and fling projection weights
//! - `[animation]` - Durations and decay friction
//! - `[layout]` - Pager spacing and scale presets
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `CHAT_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use chat_gallery::config::{self, Platform};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gestures.platform = Platform::Android;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ChatGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CHAT_GALLERY_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// Touch reporting profile of the host platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

impl Platform {
    /// Default `|dx/dy|` ratio required before a drag counts as a page swipe.
    #[must_use]
    pub fn default_swipe_ratio(self) -> f32 {
        match self {
            Platform::Ios => IOS_SWIPE_RATIO,
            Platform::Android => ANDROID_SWIPE_RATIO,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Gesture disambiguation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GesturesConfig {
    /// Platform profile used for platform-tuned thresholds.
    pub platform: Platform,

    /// Overrides the platform swipe ratio when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_ratio: Option<f32>,

    /// Edge alignment tolerance in logical pixels.
    pub edge_epsilon_px: f32,

    /// Vertical travel that rules out a page swipe.
    pub vertical_lock_px: f32,

    /// Maximum distance between both taps of a double tap.
    pub double_tap_slop_px: f32,

    /// Horizontal fling projection weight (seconds of velocity).
    pub horizontal_velocity_weight: f32,

    /// Vertical fling projection weight (seconds of velocity).
    pub vertical_velocity_weight: f32,

    /// Vertical velocity above which a dismiss continues as a fling.
    pub dismiss_fling_velocity: f32,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            swipe_ratio: None,
            edge_epsilon_px: EDGE_EPSILON_PX,
            vertical_lock_px: VERTICAL_LOCK_PX,
            double_tap_slop_px: DOUBLE_TAP_SLOP_PX,
            horizontal_velocity_weight: HORIZONTAL_VELOCITY_WEIGHT,
            vertical_velocity_weight: VERTICAL_VELOCITY_WEIGHT,
            dismiss_fling_velocity: DISMISS_FLING_VELOCITY,
        }
    }
}

/// Animation timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Page transition duration in milliseconds.
    pub page_duration_ms: u64,

    /// Bound snapping, zoom toggle and dismiss duration in milliseconds.
    pub snap_duration_ms: u64,

    /// Fallback duration in milliseconds.
    pub default_duration_ms: u64,

    /// Momentum decay friction, strictly between 0 and 1.
    pub decay_deceleration: f32,

    /// Frame interval of the async driver in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            page_duration_ms: PAGE_DURATION_MS,
            snap_duration_ms: SNAP_DURATION_MS,
            default_duration_ms: DEFAULT_DURATION_MS,
            decay_deceleration: DECAY_DECELERATION,
            frame_interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

/// Pager and zoom preset settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between neighbouring pages.
    pub page_margin_px: f32,

    /// Scale reached by a double tap.
    pub double_tap_scale: f32,

    /// Rendered scale while a photo is dismissed.
    pub dismiss_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_margin_px: PAGE_MARGIN_PX,
            double_tap_scale: DOUBLE_TAP_SCALE,
            dismiss_scale: DISMISS_SCALE,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Gallery configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Gesture disambiguation settings.
    #[serde(default)]
    pub gestures: GesturesConfig,

    /// Animation timing settings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Pager and zoom preset settings.
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Resolves the configuration into the values the engine reads every frame.
    ///
    /// Out-of-range values are logged and fall back to their defaults.
    #[must_use]
    pub fn tuning(&self) -> GalleryTuning {
        let gestures = &self.gestures;
        let animation = &self.animation;
        let layout = &self.layout;

        let swipe_ratio = match gestures.swipe_ratio {
            Some(ratio) => checked(
                "swipe_ratio",
                ratio,
                non_negative,
                gestures.platform.default_swipe_ratio(),
            ),
            None => gestures.platform.default_swipe_ratio(),
        };

        GalleryTuning {
            platform: gestures.platform,
            swipe_ratio,
            edge_epsilon: checked(
                "edge_epsilon_px",
                gestures.edge_epsilon_px,
                positive,
                EDGE_EPSILON_PX,
            ),
            vertical_lock: checked(
                "vertical_lock_px",
                gestures.vertical_lock_px,
                positive,
                VERTICAL_LOCK_PX,
            ),
            double_tap_slop: checked(
                "double_tap_slop_px",
                gestures.double_tap_slop_px,
                positive,
                DOUBLE_TAP_SLOP_PX,
            ),
            horizontal_velocity_weight: checked(
                "horizontal_velocity_weight",
                gestures.horizontal_velocity_weight,
                non_negative,
                HORIZONTAL_VELOCITY_WEIGHT,
            ),
            vertical_velocity_weight: checked(
                "vertical_velocity_weight",
                gestures.vertical_velocity_weight,
                non_negative,
                VERTICAL_VELOCITY_WEIGHT,
            ),
            dismiss_fling_velocity: checked(
                "dismiss_fling_velocity",
                gestures.dismiss_fling_velocity,
                positive,
                DISMISS_FLING_VELOCITY,
            ),
            page_duration: checked_millis(
                "page_duration_ms",
                animation.page_duration_ms,
                PAGE_DURATION_MS,
            ),
            snap_duration: checked_millis(
                "snap_duration_ms",
                animation.snap_duration_ms,
                SNAP_DURATION_MS,
            ),
            default_duration: checked_millis(
                "default_duration_ms",
                animation.default_duration_ms,
                DEFAULT_DURATION_MS,
            ),
            decay_deceleration: checked(
                "decay_deceleration",
                animation.decay_deceleration,
                |value| value > 0.0 && value < 1.0,
                DECAY_DECELERATION,
            ),
            frame_interval: checked_millis(
                "frame_interval_ms",
                animation.frame_interval_ms,
                FRAME_INTERVAL_MS,
            ),
            page_margin: checked(
                "page_margin_px",
                layout.page_margin_px,
                non_negative,
                PAGE_MARGIN_PX,
            ),
            double_tap_scale: checked(
                "double_tap_scale",
                layout.double_tap_scale,
                |value| (MIN_SCALE..=MAX_SCALE).contains(&value),
                DOUBLE_TAP_SCALE,
            ),
            dismiss_scale: checked("dismiss_scale", layout.dismiss_scale, positive, DISMISS_SCALE),
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Returns `value` when `valid` accepts it, else logs and returns `fallback`.
fn checked(name: &str, value: f32, valid: impl Fn(f32) -> bool, fallback: f32) -> f32 {
    if valid(value) {
        value
    } else {
        log::warn!("{} {} out of range, using {}", name, value, fallback);
        fallback
    }
}

fn checked_millis(name: &str, millis: u64, fallback: u64) -> Duration {
    if millis > 0 {
        Duration::from_millis(millis)
    } else {
        log::warn!("{} must be positive, using {}", name, fallback);
        Duration::from_millis(fallback)
    }
}

/// Resolved tuning values read by the gesture handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryTuning {
    pub platform: Platform,
    pub swipe_ratio: f32,
    pub edge_epsilon: f32,
    pub vertical_lock: f32,
    pub double_tap_slop: f32,
    pub horizontal_velocity_weight: f32,
    pub vertical_velocity_weight: f32,
    pub dismiss_fling_velocity: f32,
    pub page_duration: Duration,
    pub snap_duration: Duration,
    pub default_duration: Duration,
    pub decay_deceleration: f32,
    pub frame_interval: Duration,
    pub page_margin: f32,
    pub double_tap_scale: f32,
    pub dismiss_scale: f32,
}

impl Default for GalleryTuning {
    fn default() -> Self {
        Config::default().tuning()
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        });
    dir.map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    let warning = format!("{}; using default settings", err);
                    log::warn!("failed to load {}: {}", path.display(), warning);
                    return (Config::default(), Some(warning));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads the configuration from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
///
/// # Errors
///
/// Returns an error if no config directory can be resolved or the file
/// cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no configuration directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let mut config = Config::default();
        config.gestures.platform = Platform::Android;
        config.animation.page_duration_ms = 250;
        config.layout.page_margin_px = 16.0;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let loaded: Config =
            toml::from_str("[gestures]\nplatform = \"android\"\n").expect("partial config parses");

        assert_eq!(loaded.gestures.platform, Platform::Android);
        assert_eq!(loaded.gestures.edge_epsilon_px, EDGE_EPSILON_PX);
        assert_eq!(loaded.animation, AnimationConfig::default());
        assert_eq!(loaded.layout, LayoutConfig::default());
    }

    #[test]
    fn invalid_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn tuning_uses_platform_swipe_ratio() {
        let mut config = Config::default();
        assert_abs_diff_eq!(config.tuning().swipe_ratio, IOS_SWIPE_RATIO);

        config.gestures.platform = Platform::Android;
        assert_abs_diff_eq!(config.tuning().swipe_ratio, ANDROID_SWIPE_RATIO);

        config.gestures.swipe_ratio = Some(0.5);
        assert_abs_diff_eq!(config.tuning().swipe_ratio, 0.5);
    }

    #[test]
    fn tuning_rejects_out_of_range_values() {
        let mut config = Config::default();
        config.animation.decay_deceleration = 1.5;
        config.layout.double_tap_scale = 20.0;
        config.gestures.edge_epsilon_px = -1.0;

        let tuning = config.tuning();

        assert_abs_diff_eq!(tuning.decay_deceleration, DECAY_DECELERATION);
        assert_abs_diff_eq!(tuning.double_tap_scale, DOUBLE_TAP_SCALE);
        assert_abs_diff_eq!(tuning.edge_epsilon, EDGE_EPSILON_PX);
    }

    #[test]
    fn tuning_replaces_non_finite_values() {
        let config: Config = toml::from_str(
            "[gestures]\nhorizontal_velocity_weight = nan\nvertical_velocity_weight = -0.5\n\
             dismiss_fling_velocity = inf\nswipe_ratio = nan\n\
             [animation]\npage_duration_ms = 0\nframe_interval_ms = 0\n\
             [layout]\npage_margin_px = -4.0\n",
        )
        .expect("Failed to parse config");

        let tuning = config.tuning();

        assert_abs_diff_eq!(tuning.horizontal_velocity_weight, HORIZONTAL_VELOCITY_WEIGHT);
        assert_abs_diff_eq!(tuning.vertical_velocity_weight, VERTICAL_VELOCITY_WEIGHT);
        assert_abs_diff_eq!(tuning.dismiss_fling_velocity, DISMISS_FLING_VELOCITY);
        assert_abs_diff_eq!(tuning.swipe_ratio, IOS_SWIPE_RATIO);
        assert_eq!(tuning.page_duration, Duration::from_millis(PAGE_DURATION_MS));
        assert_eq!(tuning.frame_interval, Duration::from_millis(FRAME_INTERVAL_MS));
        assert_abs_diff_eq!(tuning.page_margin, PAGE_MARGIN_PX);
    }

    #[test]
    fn tuning_keeps_zero_weights_and_margin() {
        let mut config = Config::default();
        config.gestures.horizontal_velocity_weight = 0.0;
        config.layout.page_margin_px = 0.0;

        let tuning = config.tuning();

        assert_abs_diff_eq!(tuning.horizontal_velocity_weight, 0.0);
        assert_abs_diff_eq!(tuning.page_margin, 0.0);
    }

    #[test]
    fn default_tuning_matches_constants() {
        let tuning = GalleryTuning::default();
        assert_eq!(tuning.page_duration, Duration::from_millis(PAGE_DURATION_MS));
        assert_abs_diff_eq!(tuning.page_margin, PAGE_MARGIN_PX);
        assert_abs_diff_eq!(tuning.horizontal_velocity_weight, 0.3);
        assert_abs_diff_eq!(tuning.vertical_velocity_weight, 0.1);
    }
}
