// SPDX-License-Identifier: MPL-2.0
//! Frame cycling errors.

use std::fmt;

/// Configuration and lifecycle errors raised by frame cycling.
///
/// Invalid frame counts and frame rates are fatal for the animation that
/// requested them: no partial or degraded animation is ever built.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Frame count is zero, negative, or does not fit in a `u32`.
    InvalidFrameCount(i64),

    /// Frame rate is zero, negative, NaN or infinite.
    InvalidFrameRate(f64),

    /// The cycler was torn down and cannot be started again.
    TornDown,
}

impl AnimationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AnimationError::InvalidFrameCount(_) => "error-animation-frame-count",
            AnimationError::InvalidFrameRate(_) => "error-animation-frame-rate",
            AnimationError::TornDown => "error-animation-torn-down",
        }
    }

    /// Returns true for errors caused by a bad animation configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AnimationError::InvalidFrameCount(_) | AnimationError::InvalidFrameRate(_)
        )
    }
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::InvalidFrameCount(count) => {
                write!(f, "Frame count must be positive, got {}", count)
            }
            AnimationError::InvalidFrameRate(fps) => {
                write!(f, "Frames per second must be positive, got {}", fps)
            }
            AnimationError::TornDown => write!(f, "Animation was torn down"),
        }
    }
}

impl std::error::Error for AnimationError {}
