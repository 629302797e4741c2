// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::animation::TimerId;
use crate::error::Error;
use crate::media::{Direction, SheetSource, SpriteSheet};

/// The animations shown by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatorId {
    Character,
    Companion,
    Walker,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A frame timer fired.
    Tick { animator: AnimatorId, timer: TimerId },
    /// Pause/Resume button of the character panel.
    TogglePlayback,
    /// A direction button of the walker panel.
    SelectDirection(Direction),
    /// A sprite sheet finished decoding.
    SheetLoaded {
        source: SheetSource,
        result: Result<SpriteSheet, Error>,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SPRITE_CYCLER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
