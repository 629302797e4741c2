// SPDX-License-Identifier: MPL-2.0
//! Frame cycling domain types.
//!
//! This module contains the value objects shared by the frame cycler, the
//! viewport mapping and the timers that drive them. None of them know about
//! a GUI toolkit or an async runtime.

pub mod newtypes;
pub mod phase;

// Re-export commonly used types
pub use newtypes::{
    AnimationConfig, FrameCount, FrameIndex, FramesPerSecond, TileSize, TimerId,
    MAX_TICK_INTERVAL, MIN_TICK_INTERVAL,
};
pub use phase::Phase;
