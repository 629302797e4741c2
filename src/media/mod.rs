// SPDX-License-Identifier: MPL-2.0
//! Sprite sheet media: decoding files with the `image` crate, generating the
//! built-in sheets, and slicing both into per-frame handles.

mod builtin;
pub mod sprite_sheet;

pub use sprite_sheet::{BuiltinSheet, Direction, SheetSource, SpriteSheet};
