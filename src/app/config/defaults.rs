// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Tile**: Frame size shared by every sheet
//! - **Character**: The pausable single-sheet animation
//! - **Walker**: The directional animation and its companion
//! - **Headless**: Terminal runner defaults

use crate::domain::ui::newtypes::scale_bounds;

// ==========================================================================
// Tile Defaults
// ==========================================================================

/// Default frame width in pixels.
pub const DEFAULT_TILE_WIDTH: u32 = 64;

/// Default frame height in pixels.
pub const DEFAULT_TILE_HEIGHT: u32 = 64;

/// Default on-screen magnification of a tile.
pub const DEFAULT_SCALE: f32 = scale_bounds::DEFAULT;

// ==========================================================================
// Character Defaults
// ==========================================================================

/// Frames in the character sheet.
pub const DEFAULT_CHARACTER_FRAMES: i64 = 7;

/// Character animation speed.
pub const DEFAULT_CHARACTER_FPS: f64 = 8.0;

// ==========================================================================
// Walker Defaults
// ==========================================================================

/// Frames in each directional walker sheet.
pub const DEFAULT_WALKER_FRAMES: i64 = 8;

/// Walker animation speed.
pub const DEFAULT_WALKER_FPS: f64 = 8.0;

/// Frames in the companion sheet shown next to the walker.
pub const DEFAULT_COMPANION_FRAMES: i64 = 8;

// ==========================================================================
// Headless Defaults
// ==========================================================================

/// Ticks printed by `--headless` when `--ticks` is absent.
pub const DEFAULT_HEADLESS_TICKS: u32 = 16;
