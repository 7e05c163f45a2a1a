// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[ribbon]` - Camera tile placement, geometry and animation timings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `MEDIA_RIBBON_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use media_ribbon::config::{self, Config};
//! use media_ribbon::ribbon::CameraPosition;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Pin the camera tile at the end of the strip
//! config.ribbon.camera_position = CameraPosition::Last;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ribbon::{CameraPosition, Insets, Settings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Ribbon placement, geometry and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RibbonConfig {
    /// Where the camera tile is pinned.
    pub camera_position: CameraPosition,

    /// Whether the camera tile is shown at startup.
    pub camera_visible: bool,

    /// Total ribbon height in logical pixels.
    pub height: f32,

    /// Space kept free above the tiles.
    pub inset_top: f32,

    /// Space kept free below the tiles.
    pub inset_bottom: f32,

    /// Horizontal gap between tiles.
    pub spacing: f32,

    /// Insert/delete/reload transition duration in milliseconds.
    pub transition_ms: u64,

    /// Animated scroll duration in milliseconds.
    pub scroll_ms: u64,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            camera_position: CameraPosition::default(),
            camera_visible: true,
            height: DEFAULT_RIBBON_HEIGHT,
            inset_top: DEFAULT_INSET,
            inset_bottom: DEFAULT_INSET,
            spacing: DEFAULT_TILE_SPACING,
            transition_ms: DEFAULT_TRANSITION_MS,
            scroll_ms: DEFAULT_SCROLL_MS,
        }
    }
}

impl RibbonConfig {
    /// Converts the persisted values into ribbon settings, clamping anything
    /// a hand-edited file could push out of range.
    #[must_use]
    pub fn to_settings(&self) -> Settings {
        let height = clamp_or_default(
            self.height,
            MIN_RIBBON_HEIGHT,
            MAX_RIBBON_HEIGHT,
            DEFAULT_RIBBON_HEIGHT,
        );
        let inset_top = clamp_or_default(self.inset_top, 0.0, MAX_INSET, DEFAULT_INSET);
        let inset_bottom = clamp_or_default(self.inset_bottom, 0.0, MAX_INSET, DEFAULT_INSET);

        // Insets may never swallow the whole ribbon.
        let insets = if inset_top + inset_bottom >= height {
            Insets::default()
        } else {
            Insets {
                top: inset_top,
                bottom: inset_bottom,
            }
        };

        Settings {
            camera_position: self.camera_position,
            camera_visible: self.camera_visible,
            height,
            insets,
            spacing: clamp_or_default(self.spacing, 0.0, MAX_TILE_SPACING, DEFAULT_TILE_SPACING),
            transition: Duration::from_millis(self.transition_ms.min(MAX_ANIMATION_MS)),
            scroll_duration: Duration::from_millis(self.scroll_ms.min(MAX_ANIMATION_MS)),
        }
    }
}

fn clamp_or_default(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Root configuration persisted to `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ribbon: RibbonConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
