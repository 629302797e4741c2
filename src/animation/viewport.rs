// SPDX-License-Identifier: MPL-2.0
//! Fixed-size window onto a sprite sheet.
//!
//! Frames sit side by side in the first row of a sheet, so the visible
//! region for frame `i` starts `i * tile.width` pixels from the left edge.
//! Mapping is a pure function of its inputs: no state, no timer.

use crate::domain::animation::{FrameIndex, TileSize};

/// Region of a sheet to display, in sheet pixel coordinates.
///
/// Offsets are 64-bit so every `frame * tile width` product is exact.
#[derive(Debug, PartialEq, Eq)]
pub struct Region<'a, R: ?Sized> {
    pub resource: &'a R,
    pub offset_x: u64,
    pub offset_y: u64,
    pub width: u32,
    pub height: u32,
}

impl<R: ?Sized> Clone for Region<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for Region<'_, R> {}

impl<R: ?Sized> Region<'_, R> {
    /// Frame slot this region designates, if it is tile aligned on the
    /// first row.
    #[must_use]
    pub fn frame_slot(&self) -> Option<u32> {
        let width = u64::from(self.width);
        if width == 0 || self.offset_y != 0 || self.offset_x % width != 0 {
            return None;
        }
        u32::try_from(self.offset_x / width).ok()
    }
}

/// Maps `(resource, frame)` to the region of the sheet to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    tile: TileSize,
}

impl Viewport {
    #[must_use]
    pub fn new(tile: TileSize) -> Self {
        Self { tile }
    }

    #[must_use]
    pub fn tile(&self) -> TileSize {
        self.tile
    }

    /// Region of `resource` showing `frame`.
    ///
    /// Offsets are positive distances into the sheet; a CSS-style
    /// background position would be their negation.
    #[must_use]
    pub fn region<'a, R: ?Sized>(&self, resource: &'a R, frame: FrameIndex) -> Region<'a, R> {
        Region {
            resource,
            offset_x: u64::from(frame.value()) * u64::from(self.tile.width()),
            offset_y: 0,
            width: self.tile.width(),
            height: self.tile.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animation::FrameCount;

    #[test]
    fn first_frame_starts_at_origin() {
        let viewport = Viewport::default();
        let region = viewport.region("sheet.png", FrameIndex::ZERO);
        assert_eq!(region.offset_x, 0);
        assert_eq!(region.offset_y, 0);
        assert_eq!((region.width, region.height), (64, 64));
        assert_eq!(region.resource, "sheet.png");
    }

    #[test]
    fn offsets_match_the_seven_frame_table() {
        let viewport = Viewport::default();
        let count = FrameCount::new(7).expect("valid count");
        let offsets: Vec<u64> = (0..7)
            .filter_map(|i| FrameIndex::new(i, count))
            .map(|frame| viewport.region("sheet", frame).offset_x)
            .collect();
        assert_eq!(offsets, vec![0, 64, 128, 192, 256, 320, 384]);
    }

    #[test]
    fn non_square_tiles_use_width_for_offset() {
        let viewport = Viewport::new(TileSize::new(32, 48).expect("valid tile"));
        let count = FrameCount::new(4).expect("valid count");
        let frame = FrameIndex::new(3, count).expect("in range");
        let region = viewport.region(&(), frame);
        assert_eq!(region.offset_x, 96);
        assert_eq!(region.height, 48);
    }

    #[test]
    fn frame_slot_inverts_region() {
        let viewport = Viewport::default();
        let count = FrameCount::new(8).expect("valid count");
        let frame = FrameIndex::new(5, count).expect("in range");
        assert_eq!(viewport.region("s", frame).frame_slot(), Some(5));

        let misaligned = Region {
            resource: "s",
            offset_x: 70,
            offset_y: 0,
            width: 64,
            height: 64,
        };
        assert_eq!(misaligned.frame_slot(), None);
    }

    #[test]
    fn offsets_past_u32_range_stay_exact() {
        let viewport = Viewport::default();
        let count = FrameCount::new(100_000_000).expect("valid count");
        let frame = FrameIndex::new(67_108_864, count).expect("in range");
        let region = viewport.region("s", frame);
        assert_eq!(region.offset_x, 67_108_864 * 64);
        assert!(region.offset_x > u64::from(u32::MAX));
        assert_eq!(region.frame_slot(), Some(67_108_864));

        let widest = TileSize::new(u32::MAX, 1).expect("valid tile");
        let most = FrameCount::new(i64::from(u32::MAX)).expect("valid count");
        let last = FrameIndex::new(u32::MAX - 1, most).expect("in range");
        let region = Viewport::new(widest).region("s", last);
        assert_eq!(region.offset_x, u64::from(u32::MAX - 1) * u64::from(u32::MAX));
        assert_eq!(region.frame_slot(), Some(u32::MAX - 1));
    }
}
