// SPDX-License-Identifier: MPL-2.0
//! Frame cycling newtypes.
//!
//! This module provides type-safe wrappers for animation values. Unlike the
//! UI newtypes these never clamp: an invalid frame count or frame rate is a
//! configuration error and is rejected at construction.

use crate::domain::error::AnimationError;
use std::fmt;
use std::time::Duration;

// =============================================================================
// FrameCount
// =============================================================================

/// Number of frames in a sprite sheet, guaranteed to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCount(u32);

impl FrameCount {
    /// Creates a frame count, rejecting zero, negative and oversized values.
    pub fn new(count: i64) -> Result<Self, AnimationError> {
        u32::try_from(count)
            .ok()
            .filter(|&c| c > 0)
            .map(Self)
            .ok_or(AnimationError::InvalidFrameCount(count))
    }

    /// Returns the count as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

// =============================================================================
// FramesPerSecond
// =============================================================================

/// Shortest tick interval an animation will run at.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Longest tick interval an animation will run at.
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Animation frame rate, guaranteed to be positive and finite.
///
/// Any such rate is accepted, but its tick interval is bounded to
/// [`MIN_TICK_INTERVAL`]..=[`MAX_TICK_INTERVAL`]: rates above 1000 fps tick
/// every millisecond and rates below one frame per day tick once a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramesPerSecond(f64);

impl FramesPerSecond {
    /// Creates a frame rate, rejecting non-positive and non-finite values.
    pub fn new(fps: f64) -> Result<Self, AnimationError> {
        if fps.is_finite() && fps > 0.0 {
            Ok(Self(fps))
        } else {
            Err(AnimationError::InvalidFrameRate(fps))
        }
    }

    /// Returns the rate as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Time between two consecutive ticks (`1 / fps` seconds), bounded to
    /// [`MIN_TICK_INTERVAL`]..=[`MAX_TICK_INTERVAL`].
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.0)
            .unwrap_or(MAX_TICK_INTERVAL)
            .clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL)
    }
}

// =============================================================================
// AnimationConfig
// =============================================================================

/// Immutable configuration of one animation session.
///
/// The frame count is the modulus applied on every tick; the frame rate
/// fixes the tick interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    frame_count: FrameCount,
    frames_per_second: FramesPerSecond,
}

impl AnimationConfig {
    /// Validates raw values and builds a configuration.
    pub fn new(frame_count: i64, frames_per_second: f64) -> Result<Self, AnimationError> {
        Ok(Self {
            frame_count: FrameCount::new(frame_count)?,
            frames_per_second: FramesPerSecond::new(frames_per_second)?,
        })
    }

    /// Builds a configuration from already validated parts.
    #[must_use]
    pub fn from_parts(frame_count: FrameCount, frames_per_second: FramesPerSecond) -> Self {
        Self {
            frame_count,
            frames_per_second,
        }
    }

    #[must_use]
    pub fn frame_count(self) -> FrameCount {
        self.frame_count
    }

    #[must_use]
    pub fn frames_per_second(self) -> FramesPerSecond {
        self.frames_per_second
    }

    /// Tick interval derived from the frame rate.
    #[must_use]
    pub fn interval(self) -> Duration {
        self.frames_per_second.interval()
    }
}

// =============================================================================
// FrameIndex
// =============================================================================

/// Zero-based position of the displayed frame within a sheet.
///
/// Only [`FrameIndex::next`] moves an index forward, and it always wraps
/// modulo the frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct FrameIndex(u32);

impl FrameIndex {
    /// The first frame of every sheet.
    pub const ZERO: Self = Self(0);

    /// Returns `index` if it lies in `[0, count)`.
    #[must_use]
    pub fn new(index: u32, count: FrameCount) -> Option<Self> {
        (index < count.value()).then_some(Self(index))
    }

    /// Returns the raw index.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// The frame shown after this one: `(index + 1) mod count`.
    #[must_use]
    pub fn next(self, count: FrameCount) -> Self {
        Self((self.0 % count.value() + 1) % count.value())
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// TileSize
// =============================================================================

/// Default tile edge in pixels.
pub const DEFAULT_TILE_EDGE: u32 = 64;

/// Size of a single frame in a sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    width: u32,
    height: u32,
}

impl TileSize {
    /// Creates a tile size, rejecting zero dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_TILE_EDGE,
            height: DEFAULT_TILE_EDGE,
        }
    }
}

// =============================================================================
// TimerId
// =============================================================================

/// Identity of one timer session.
///
/// Each start of a cycler mints a new id, so a tick delivered by a timer
/// that has since been cancelled can always be told apart from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the id minted after this one.
    #[must_use]
    pub fn successor(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_rejects_non_positive_values() {
        assert_eq!(FrameCount::new(0), Err(AnimationError::InvalidFrameCount(0)));
        assert_eq!(
            FrameCount::new(-7),
            Err(AnimationError::InvalidFrameCount(-7))
        );
        assert!(FrameCount::new(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(FrameCount::new(7).map(FrameCount::value), Ok(7));
    }

    #[test]
    fn frame_rate_rejects_non_positive_and_non_finite() {
        assert!(FramesPerSecond::new(0.0).is_err());
        assert!(FramesPerSecond::new(-8.0).is_err());
        assert!(FramesPerSecond::new(f64::NAN).is_err());
        assert!(FramesPerSecond::new(f64::INFINITY).is_err());
        assert!(FramesPerSecond::new(8.0).is_ok());
    }

    #[test]
    fn eight_fps_ticks_every_125_ms() {
        let config = AnimationConfig::new(7, 8.0).expect("valid config");
        assert_eq!(config.interval(), Duration::from_millis(125));
    }

    #[test]
    fn extreme_rates_tick_within_bounds() {
        let fast = FramesPerSecond::new(1e300).expect("valid rate");
        assert_eq!(fast.interval(), MIN_TICK_INTERVAL);

        let slow = FramesPerSecond::new(1e-300).expect("valid rate");
        assert_eq!(slow.interval(), MAX_TICK_INTERVAL);

        let tiny = FramesPerSecond::new(f64::MIN_POSITIVE).expect("valid rate");
        assert_eq!(tiny.interval(), MAX_TICK_INTERVAL);

        let thousand = FramesPerSecond::new(1000.0).expect("valid rate");
        assert_eq!(thousand.interval(), Duration::from_millis(1));
    }

    #[test]
    fn config_reports_first_invalid_field() {
        assert_eq!(
            AnimationConfig::new(0, 0.0),
            Err(AnimationError::InvalidFrameCount(0))
        );
        assert_eq!(
            AnimationConfig::new(8, -1.0),
            Err(AnimationError::InvalidFrameRate(-1.0))
        );
    }

    #[test]
    fn next_wraps_after_last_frame() {
        let count = FrameCount::new(8).expect("valid count");
        let last = FrameIndex::new(7, count).expect("in range");
        assert_eq!(last.next(count), FrameIndex::ZERO);
    }

    #[test]
    fn n_steps_return_to_zero_for_every_count() {
        for n in 1..=32 {
            let count = FrameCount::new(n).expect("valid count");
            let mut index = FrameIndex::ZERO;
            for step in 1..=n {
                index = index.next(count);
                assert!(index.value() < count.value());
                if step < n {
                    assert_ne!(index, FrameIndex::ZERO, "n={n} step={step}");
                }
            }
            assert_eq!(index, FrameIndex::ZERO, "n={n}");
        }
    }

    #[test]
    fn single_frame_sheet_stays_on_zero() {
        let count = FrameCount::new(1).expect("valid count");
        assert_eq!(FrameIndex::ZERO.next(count), FrameIndex::ZERO);
    }

    #[test]
    fn index_outside_count_is_rejected() {
        let count = FrameCount::new(7).expect("valid count");
        assert!(FrameIndex::new(7, count).is_none());
        assert!(FrameIndex::new(6, count).is_some());
    }

    #[test]
    fn tile_size_rejects_zero_dimensions() {
        assert!(TileSize::new(0, 64).is_none());
        assert!(TileSize::new(64, 0).is_none());
        assert_eq!(TileSize::default(), TileSize::new(64, 64).expect("valid"));
    }

    #[test]
    fn timer_ids_are_distinct_in_sequence() {
        let first = TimerId::new(1);
        assert_ne!(first, first.successor());
        assert_eq!(first.successor().value(), 2);
    }
}
