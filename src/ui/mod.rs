// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! application state through a view context and return elements generic over
//! the caller's message type.
//!
//! - [`sprite_panel`] - Frame boxes, sheet preview and panel chrome
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod sprite_panel;
pub mod theming;
