// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Integer-friendly display scale bounds (1x to 8x).
pub mod scale_bounds {
    /// Minimum display scale.
    pub const MIN: f32 = 1.0;
    /// Maximum display scale.
    pub const MAX: f32 = 8.0;
    /// Default display scale.
    pub const DEFAULT: f32 = 2.0;
}

// =============================================================================
// DisplayScale
// =============================================================================

/// Magnification applied to a sprite tile on screen, guaranteed to be
/// within the valid range (1x–8x).
///
/// Pixel art only stays crisp under nearest-neighbor sampling, so the
/// scale is a plain multiplier on the tile size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale(f32);

impl DisplayScale {
    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// NaN falls back to the default scale.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self(scale.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scales a pixel length for display.
    #[must_use]
    pub fn apply(self, pixels: u32) -> f32 {
        pixels as f32 * self.0
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}
