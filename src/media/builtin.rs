// SPDX-License-Identifier: MPL-2.0
//! Procedural sprite sheets used when no sheet file is configured.
//!
//! Each sheet is one row of `frames` tiles on a transparent background,
//! drawn with hard edges only so it stays readable under nearest-neighbor
//! scaling.

use super::sprite_sheet::{BuiltinSheet, Direction};
use crate::domain::animation::{FrameCount, TileSize};
use image_rs::{Rgba, RgbaImage};
use std::f32::consts::TAU;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const OUTLINE: Rgba<u8> = Rgba([24, 20, 37, 255]);
const EYE: Rgba<u8> = Rgba([250, 250, 250, 255]);
const CHARACTER_BODY: Rgba<u8> = Rgba([155, 89, 182, 255]);
const CHARACTER_HEAD: Rgba<u8> = Rgba([236, 72, 153, 255]);
const COMPANION_GEM: Rgba<u8> = Rgba([241, 196, 15, 255]);
const COMPANION_CORE: Rgba<u8> = Rgba([255, 244, 180, 255]);

/// Renders `sheet` as `frames` tiles of size `tile`.
pub fn render(sheet: BuiltinSheet, tile: TileSize, frames: FrameCount) -> RgbaImage {
    let count = frames.value();
    let mut image = RgbaImage::from_pixel(tile.width() * count, tile.height(), TRANSPARENT);
    for frame in 0..count {
        let phase = frame as f32 / count as f32 * TAU;
        let mut canvas = Tile {
            image: &mut image,
            origin_x: i64::from(frame * tile.width()),
            width: i64::from(tile.width()),
            height: i64::from(tile.height()),
        };
        match sheet {
            BuiltinSheet::Character => draw_character(&mut canvas, phase),
            BuiltinSheet::Companion => draw_companion(&mut canvas, phase),
            BuiltinSheet::Walker(direction) => draw_walker(&mut canvas, phase, direction),
        }
    }
    image
}

/// Drawing surface clipped to one tile of the sheet.
struct Tile<'a> {
    image: &'a mut RgbaImage,
    origin_x: i64,
    width: i64,
    height: i64,
}

impl Tile<'_> {
    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        // In bounds: both coordinates fit the sheet dimensions.
        self.image
            .put_pixel((self.origin_x + x) as u32, y as u32, color);
    }

    fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgba<u8>) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    /// Filled rectangle with a one pixel outline.
    fn block(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgba<u8>) {
        self.fill_rect(x, y, w, h, OUTLINE);
        self.fill_rect(x + 1, y + 1, w - 2, h - 2, color);
    }

    /// Scales a length given in 1/64ths of the tile width.
    fn sx(&self, units: i64) -> i64 {
        (self.width * units / 64).max(1)
    }

    /// Scales a length given in 1/64ths of the tile height.
    fn sy(&self, units: i64) -> i64 {
        (self.height * units / 64).max(1)
    }
}

fn draw_character(tile: &mut Tile<'_>, phase: f32) {
    let bob = (phase.sin() * tile.sy(4) as f32).round() as i64;
    let (x, w) = (tile.sx(22), tile.sx(20));

    tile.block(x, tile.sy(14) + bob, w, tile.sy(16), CHARACTER_HEAD);
    tile.block(x - tile.sx(2), tile.sy(30) + bob, w + tile.sx(4), tile.sy(20), CHARACTER_BODY);
    tile.fill_rect(x + tile.sx(5), tile.sy(20) + bob, tile.sx(3), tile.sy(3), EYE);
    tile.fill_rect(x + tile.sx(12), tile.sy(20) + bob, tile.sx(3), tile.sy(3), EYE);

    let feet_y = tile.sy(50) + bob;
    tile.fill_rect(x, feet_y, tile.sx(6), tile.sy(6) - bob, OUTLINE);
    tile.fill_rect(x + w - tile.sx(6), feet_y, tile.sx(6), tile.sy(6) - bob, OUTLINE);
}

fn draw_companion(tile: &mut Tile<'_>, phase: f32) {
    let (cx, cy) = (tile.width / 2, tile.height / 2);
    let base = tile.sx(12) as f32;
    let radius = (base + phase.sin() * base / 3.0).round() as i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let distance = dx.abs() + dy.abs();
            let color = match distance {
                d if d == radius => OUTLINE,
                d if d * 3 < radius => COMPANION_CORE,
                d if d < radius => COMPANION_GEM,
                _ => continue,
            };
            tile.put(cx + dx, cy + dy, color);
        }
    }
}

fn draw_walker(tile: &mut Tile<'_>, phase: f32, direction: Direction) {
    let body = walker_color(direction);
    let stride = (phase.sin() * tile.sx(6) as f32).round() as i64;
    let bob = (phase.cos().abs() * tile.sy(2) as f32).round() as i64;
    let (x, w) = (tile.sx(20), tile.sx(24));
    let top = tile.sy(12) - bob;

    tile.block(x, top, w, tile.sy(18), body);
    tile.block(x - tile.sx(2), top + tile.sy(18), w + tile.sx(4), tile.sy(20), body);

    let eye = tile.sx(3);
    let eye_y = top + tile.sy(7);
    match direction {
        Direction::Down => {
            tile.fill_rect(x + tile.sx(6), eye_y, eye, eye, EYE);
            tile.fill_rect(x + w - tile.sx(9), eye_y, eye, eye, EYE);
        }
        Direction::Left => tile.fill_rect(x + tile.sx(3), eye_y, eye, eye, EYE),
        Direction::Right => tile.fill_rect(x + w - tile.sx(6), eye_y, eye, eye, EYE),
        Direction::Up => {}
    }

    let legs_y = top + tile.sy(38);
    let leg_w = tile.sx(6);
    let leg_h = tile.sy(12);
    match direction {
        Direction::Left | Direction::Right => {
            let center = x + w / 2 - leg_w / 2;
            tile.fill_rect(center + stride, legs_y, leg_w, leg_h, OUTLINE);
            tile.fill_rect(center - stride, legs_y, leg_w, leg_h, OUTLINE);
        }
        Direction::Up | Direction::Down => {
            let lift = stride.abs() / 2;
            let (left_lift, right_lift) = if stride >= 0 { (lift, 0) } else { (0, lift) };
            tile.fill_rect(x + tile.sx(3), legs_y - left_lift, leg_w, leg_h, OUTLINE);
            tile.fill_rect(x + w - tile.sx(9), legs_y - right_lift, leg_w, leg_h, OUTLINE);
        }
    }
}

fn walker_color(direction: Direction) -> Rgba<u8> {
    match direction {
        Direction::Up => Rgba([46, 204, 113, 255]),
        Direction::Down => Rgba([39, 174, 96, 255]),
        Direction::Left => Rgba([26, 188, 156, 255]),
        Direction::Right => Rgba([22, 160, 133, 255]),
    }
}
