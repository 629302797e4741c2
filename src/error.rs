// SPDX-License-Identifier: MPL-2.0
pub use crate::domain::error::AnimationError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Sheet(SheetError),
    Animation(AnimationError),
}

/// Sprite sheet loading failures, reported to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetError {
    /// The image could not be decoded.
    Decode(String),

    /// The sheet is smaller than `frames` tiles laid out in one row.
    TooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },

    /// Tile width or height is zero.
    InvalidTileSize { width: u32, height: u32 },

    /// A viewport region points at a frame the loaded sheet does not hold.
    MissingFrame { frame: u32, offset_x: u64 },
}

impl SheetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SheetError::Decode(_) => "error-sheet-decode",
            SheetError::TooSmall { .. } => "error-sheet-too-small",
            SheetError::InvalidTileSize { .. } => "error-sheet-tile-size",
            SheetError::MissingFrame { .. } => "error-sheet-missing-frame",
        }
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Decode(msg) => write!(f, "Failed to decode sprite sheet: {}", msg),
            SheetError::TooSmall {
                width,
                height,
                required_width,
                required_height,
            } => write!(
                f,
                "Sprite sheet is {}x{}, needs at least {}x{}",
                width, height, required_width, required_height
            ),
            SheetError::InvalidTileSize { width, height } => {
                write!(f, "Invalid tile size {}x{}", width, height)
            }
            SheetError::MissingFrame { frame, offset_x } => {
                write!(f, "No tile for frame {} at x={}", frame, offset_x)
            }
        }
    }
}

impl Error {
    /// Returns the i18n message key used to present this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Sheet(e) => e.i18n_key(),
            Error::Animation(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Sheet(e) => write!(f, "Sheet Error: {}", e),
            Error::Animation(e) => write!(f, "Animation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AnimationError> for Error {
    fn from(err: AnimationError) -> Self {
        Error::Animation(err)
    }
}

impl From<SheetError> for Error {
    fn from(err: SheetError) -> Self {
        Error::Sheet(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Sheet(SheetError::Decode(other.to_string())),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
