// SPDX-License-Identifier: MPL-2.0
//! `sprite_cycler` animates sprite sheets with timer-driven frame cycling,
//! built with the Iced GUI framework.
//!
//! A [`animation::FrameCycler`] advances a frame index on a fixed cadence and
//! owns the single timer allowed to do so. A [`animation::Viewport`] maps the
//! index to the region of the sheet to display. The demo application wires
//! three cyclers (pausable, always-on and reset-on-change) into one window.

#![doc(html_root_url = "https://docs.rs/sprite_cycler/0.1.0")]

pub mod animation;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod headless;
pub mod i18n;
pub mod media;
pub mod ui;
