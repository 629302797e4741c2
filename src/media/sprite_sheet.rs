// SPDX-License-Identifier: MPL-2.0
//! Sprite sheet loading and frame lookup.
//!
//! A sheet is decoded once, checked against the configured tile size and
//! frame count, and pre-sliced into one image handle per frame. Rendering a
//! frame is then a lookup keyed by the viewport region.

use super::builtin;
use crate::animation::Region;
use crate::domain::animation::{FrameCount, TileSize};
use crate::error::{Result, SheetError};
use iced::widget::image;
use image_rs::{imageops, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Facing of the directional walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the i18n message key for this direction's button.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Direction::Up => "direction-up",
            Direction::Down => "direction-down",
            Direction::Left => "direction-left",
            Direction::Right => "direction-right",
        }
    }
}

/// Sheets generated in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinSheet {
    Character,
    Companion,
    Walker(Direction),
}

/// Where a sheet comes from. Identifies the sheet being displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SheetSource {
    Builtin(BuiltinSheet),
    File(PathBuf),
}

impl SheetSource {
    /// Uses `path` when configured, otherwise the given built-in sheet.
    #[must_use]
    pub fn file_or(path: Option<&Path>, fallback: BuiltinSheet) -> Self {
        match path {
            Some(path) => SheetSource::File(path.to_path_buf()),
            None => SheetSource::Builtin(fallback),
        }
    }
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSource::Builtin(BuiltinSheet::Character) => write!(f, "builtin:character"),
            SheetSource::Builtin(BuiltinSheet::Companion) => write!(f, "builtin:companion"),
            SheetSource::Builtin(BuiltinSheet::Walker(direction)) => {
                write!(f, "builtin:walker-{:?}", direction)
            }
            SheetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A decoded sheet, sliced into frames.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    source: SheetSource,
    tile: TileSize,
    width: u32,
    height: u32,
    full: image::Handle,
    frames: Vec<image::Handle>,
}

impl SpriteSheet {
    /// Decodes `source` and slices its first `frames` tiles.
    ///
    /// # Errors
    ///
    /// - [`crate::error::Error::Io`] if the file cannot be read
    /// - [`SheetError::Decode`] if the bytes are not a supported image
    /// - [`SheetError::TooSmall`] if the sheet cannot hold every frame
    pub fn load(source: &SheetSource, tile: TileSize, frames: FrameCount) -> Result<Self> {
        let pixels = match source {
            SheetSource::Builtin(sheet) => builtin::render(*sheet, tile, frames),
            SheetSource::File(path) => {
                let bytes = fs::read(path)?;
                image_rs::load_from_memory(&bytes)?.to_rgba8()
            }
        };
        let sheet = Self::from_rgba(source.clone(), pixels, tile, frames)?;
        log::info!(
            "loaded sprite sheet {} ({}x{}, {} frames)",
            sheet.source,
            sheet.width,
            sheet.height,
            sheet.frame_count()
        );
        Ok(sheet)
    }

    /// Slices already decoded pixels.
    pub fn from_rgba(
        source: SheetSource,
        pixels: RgbaImage,
        tile: TileSize,
        frames: FrameCount,
    ) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        let required_width = tile.width().saturating_mul(frames.value());
        let required_height = tile.height();
        if width < required_width || height < required_height {
            return Err(SheetError::TooSmall {
                width,
                height,
                required_width,
                required_height,
            }
            .into());
        }

        let frames = (0..frames.value())
            .map(|slot| {
                let tile_pixels =
                    imageops::crop_imm(&pixels, slot * tile.width(), 0, tile.width(), tile.height())
                        .to_image();
                image::Handle::from_rgba(tile.width(), tile.height(), tile_pixels.into_raw())
            })
            .collect();
        let full = image::Handle::from_rgba(width, height, pixels.into_raw());

        Ok(Self {
            source,
            tile,
            width,
            height,
            full,
            frames,
        })
    }

    /// Handle for the tile a viewport region designates.
    ///
    /// Returns `None` for regions of another sheet or another tile size.
    #[must_use]
    pub fn frame(&self, region: &Region<'_, SheetSource>) -> Option<&image::Handle> {
        if *region.resource != self.source
            || region.width != self.tile.width()
            || region.height != self.tile.height()
        {
            return None;
        }
        let slot = region.frame_slot()?;
        self.frames.get(usize::try_from(slot).ok()?)
    }

    #[must_use]
    pub fn source(&self) -> &SheetSource {
        &self.source
    }

    #[must_use]
    pub fn tile(&self) -> TileSize {
        self.tile
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Dimensions of the whole sheet.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Handle for the whole sheet.
    #[must_use]
    pub fn full(&self) -> &image::Handle {
        &self.full
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Viewport;
    use crate::domain::animation::FrameIndex;
    use crate::error::Error;
    use image_rs::Rgba;
    use tempfile::tempdir;

    fn frames(n: i64) -> FrameCount {
        FrameCount::new(n).expect("valid count")
    }

    #[test]
    fn builtin_sheet_slices_every_frame() {
        let source = SheetSource::Builtin(BuiltinSheet::Character);
        let sheet = SpriteSheet::load(&source, TileSize::default(), frames(7))
            .expect("builtin sheet should load");
        assert_eq!(sheet.frame_count(), 7);
        assert_eq!(sheet.dimensions(), (448, 64));
    }

    #[test]
    fn png_file_loads_and_frames_resolve_from_regions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("walk.png");
        RgbaImage::from_pixel(8 * 64, 64, Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("failed to write temporary png");

        let source = SheetSource::File(path);
        let sheet = SpriteSheet::load(&source, TileSize::default(), frames(8))
            .expect("png sheet should load");

        let viewport = Viewport::default();
        let count = frames(8);
        for slot in 0..8 {
            let frame = FrameIndex::new(slot, count).expect("in range");
            assert!(sheet.frame(&viewport.region(&source, frame)).is_some());
        }
    }

    #[test]
    fn regions_of_another_sheet_are_rejected() {
        let source = SheetSource::Builtin(BuiltinSheet::Companion);
        let sheet = SpriteSheet::load(&source, TileSize::default(), frames(4)).expect("load");
        let other = SheetSource::Builtin(BuiltinSheet::Character);
        let region = Viewport::default().region(&other, FrameIndex::ZERO);
        assert!(sheet.frame(&region).is_none());
    }

    #[test]
    fn narrow_sheet_is_too_small() {
        let pixels = RgbaImage::new(128, 64);
        let source = SheetSource::Builtin(BuiltinSheet::Character);
        match SpriteSheet::from_rgba(source, pixels, TileSize::default(), frames(7)) {
            Err(Error::Sheet(SheetError::TooSmall { required_width, .. })) => {
                assert_eq!(required_width, 448);
            }
            other => panic!("expected TooSmall, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = SheetSource::File(temp_dir.path().join("missing.png"));
        match SpriteSheet::load(&source, TileSize::default(), frames(7)) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_bytes_return_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"not a png").expect("failed to write invalid data");
        match SpriteSheet::load(&SheetSource::File(path), TileSize::default(), frames(7)) {
            Err(Error::Sheet(SheetError::Decode(message))) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn file_or_prefers_configured_path() {
        let path = PathBuf::from("/tmp/up.png");
        assert_eq!(
            SheetSource::file_or(Some(&path), BuiltinSheet::Walker(Direction::Up)),
            SheetSource::File(path)
        );
        assert_eq!(
            SheetSource::file_or(None, BuiltinSheet::Walker(Direction::Up)),
            SheetSource::Builtin(BuiltinSheet::Walker(Direction::Up))
        );
    }
}
