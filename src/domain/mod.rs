// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core animation logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`animation`]: Frame cycling types ([`AnimationConfig`](animation::AnimationConfig),
//!   [`FrameIndex`](animation::FrameIndex), [`TileSize`](animation::TileSize),
//!   [`Phase`](animation::Phase))
//! - [`error`]: Domain error types ([`AnimationError`](error::AnimationError))
//! - [`ui`]: UI value objects ([`DisplayScale`](ui::newtypes::DisplayScale))

pub mod animation;
pub mod error;
pub mod ui;
