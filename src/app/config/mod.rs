// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[display]` - Tile size, on-screen scale, sheet preview
//! - `[character]` - The pausable character animation
//! - `[walker]` - The directional walker, its companion and per-direction sheets
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `SPRITE_CYCLER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Validation
//!
//! Display values are clamped like any other preference. Animation values
//! are not: a non-positive frame count or frame rate is reported as an
//! [`AnimationError`] by the accessor that builds the animation.
//!
//! # Examples
//!
//! ```no_run
//! use sprite_cycler::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.character.fps = Some(12.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::animation::{AnimationConfig, TileSize};
use crate::domain::error::AnimationError;
use crate::domain::ui::DisplayScale;
use crate::error::{Error, Result, SheetError};
use crate::media::{BuiltinSheet, Direction, SheetSource};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Display settings shared by every animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Frame width in pixels.
    #[serde(default = "default_tile_width", skip_serializing_if = "Option::is_none")]
    pub tile_width: Option<u32>,

    /// Frame height in pixels.
    #[serde(default = "default_tile_height", skip_serializing_if = "Option::is_none")]
    pub tile_height: Option<u32>,

    /// On-screen magnification (1x to 8x).
    #[serde(default = "default_scale", skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,

    /// Whether the full character sheet is shown under the animations.
    #[serde(default = "default_show_sheet", skip_serializing_if = "Option::is_none")]
    pub show_sheet: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
            scale: default_scale(),
            show_sheet: default_show_sheet(),
        }
    }
}

/// The pausable character animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterConfig {
    /// Sprite sheet file. The built-in character is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<PathBuf>,

    /// Frames in the sheet.
    #[serde(
        default = "default_character_frames",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_count: Option<i64>,

    /// Animation speed.
    #[serde(default = "default_character_fps", skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,

    /// Whether the animation plays at start-up.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            sheet: None,
            frame_count: default_character_frames(),
            fps: default_character_fps(),
            autoplay: default_autoplay(),
        }
    }
}

impl CharacterConfig {
    /// Validated animation settings.
    pub fn animation(&self) -> std::result::Result<AnimationConfig, AnimationError> {
        AnimationConfig::new(
            self.frame_count.unwrap_or(DEFAULT_CHARACTER_FRAMES),
            self.fps.unwrap_or(DEFAULT_CHARACTER_FPS),
        )
    }

    #[must_use]
    pub fn source(&self) -> SheetSource {
        SheetSource::file_or(self.sheet.as_deref(), BuiltinSheet::Character)
    }
}

/// One sheet file per walking direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WalkerSheets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<PathBuf>,
}

impl WalkerSheets {
    /// Sheet for `direction`, falling back to the built-in walker.
    #[must_use]
    pub fn source(&self, direction: Direction) -> SheetSource {
        let path = match direction {
            Direction::Up => self.up.as_deref(),
            Direction::Down => self.down.as_deref(),
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        };
        SheetSource::file_or(path, BuiltinSheet::Walker(direction))
    }
}

/// The directional walker and the companion sprite animated next to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalkerConfig {
    /// Frames in each direction's sheet.
    #[serde(default = "default_walker_frames", skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<i64>,

    /// Animation speed, shared with the companion.
    #[serde(default = "default_walker_fps", skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,

    /// Direction shown at start-up.
    #[serde(default)]
    pub direction: Direction,

    /// Frames in the companion sheet.
    #[serde(
        default = "default_companion_frames",
        skip_serializing_if = "Option::is_none"
    )]
    pub companion_frame_count: Option<i64>,

    /// Companion sheet file. The built-in companion is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion_sheet: Option<PathBuf>,

    #[serde(default)]
    pub sheets: WalkerSheets,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            frame_count: default_walker_frames(),
            fps: default_walker_fps(),
            direction: Direction::default(),
            companion_frame_count: default_companion_frames(),
            companion_sheet: None,
            sheets: WalkerSheets::default(),
        }
    }
}

impl WalkerConfig {
    /// Validated walker animation settings.
    pub fn animation(&self) -> std::result::Result<AnimationConfig, AnimationError> {
        AnimationConfig::new(
            self.frame_count.unwrap_or(DEFAULT_WALKER_FRAMES),
            self.fps.unwrap_or(DEFAULT_WALKER_FPS),
        )
    }

    /// Validated companion animation settings.
    pub fn companion_animation(&self) -> std::result::Result<AnimationConfig, AnimationError> {
        AnimationConfig::new(
            self.companion_frame_count
                .unwrap_or(DEFAULT_COMPANION_FRAMES),
            self.fps.unwrap_or(DEFAULT_WALKER_FPS),
        )
    }

    #[must_use]
    pub fn companion_source(&self) -> SheetSource {
        SheetSource::file_or(self.companion_sheet.as_deref(), BuiltinSheet::Companion)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub character: CharacterConfig,

    #[serde(default)]
    pub walker: WalkerConfig,
}

impl Config {
    /// Tile size shared by every sheet.
    pub fn tile(&self) -> std::result::Result<TileSize, SheetError> {
        let width = self.display.tile_width.unwrap_or(DEFAULT_TILE_WIDTH);
        let height = self.display.tile_height.unwrap_or(DEFAULT_TILE_HEIGHT);
        TileSize::new(width, height).ok_or(SheetError::InvalidTileSize { width, height })
    }

    #[must_use]
    pub fn scale(&self) -> DisplayScale {
        DisplayScale::new(self.display.scale.unwrap_or(DEFAULT_SCALE))
    }

    #[must_use]
    pub fn show_sheet(&self) -> bool {
        self.display.show_sheet.unwrap_or(true)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_tile_width() -> Option<u32> {
    Some(DEFAULT_TILE_WIDTH)
}

fn default_tile_height() -> Option<u32> {
    Some(DEFAULT_TILE_HEIGHT)
}

fn default_scale() -> Option<f32> {
    Some(DEFAULT_SCALE)
}

fn default_show_sheet() -> Option<bool> {
    Some(true)
}

fn default_character_frames() -> Option<i64> {
    Some(DEFAULT_CHARACTER_FRAMES)
}

fn default_character_fps() -> Option<f64> {
    Some(DEFAULT_CHARACTER_FPS)
}

fn default_autoplay() -> Option<bool> {
    Some(true)
}

fn default_walker_frames() -> Option<i64> {
    Some(DEFAULT_WALKER_FRAMES)
}

fn default_walker_fps() -> Option<f64> {
    Some(DEFAULT_WALKER_FPS)
}

fn default_companion_frames() -> Option<i64> {
    Some(DEFAULT_COMPANION_FRAMES)
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    log::warn!("using default settings, {} is invalid: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
