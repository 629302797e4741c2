// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::animator::{Animator, SheetCache, SheetState};
use super::config::WalkerSheets;
use super::{AnimatorId, Message};
use crate::domain::animation::TimerId;
use crate::error::Error;
use crate::media::{Direction, SheetSource, SpriteSheet};
use iced::{window, Task};

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub character: &'a mut Animator,
    pub companion: &'a mut Animator,
    pub walker: &'a mut Animator<SheetSource>,
    pub walker_sheets: &'a WalkerSheets,
    pub direction: &'a mut Direction,
    pub is_playing: &'a mut bool,
    pub sheets: &'a mut SheetCache,
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, animator: AnimatorId, timer: TimerId) -> Task<Message> {
    match animator {
        AnimatorId::Character => ctx.character.tick(timer),
        AnimatorId::Companion => ctx.companion.tick(timer),
        AnimatorId::Walker => ctx.walker.tick(timer),
    };
    Task::none()
}

pub fn handle_toggle_playback(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.is_playing = !*ctx.is_playing;
    ctx.character.set_playing(*ctx.is_playing);
    Task::none()
}

pub fn handle_select_direction(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    *ctx.direction = direction;
    if ctx.walker.show(ctx.walker_sheets.source(direction)) {
        log::debug!("walker now facing {:?}", direction);
    }
    Task::none()
}

pub fn handle_sheet_loaded(
    ctx: &mut UpdateContext<'_>,
    source: SheetSource,
    result: Result<SpriteSheet, Error>,
) -> Task<Message> {
    let state = match result {
        Ok(sheet) => SheetState::Ready(sheet),
        Err(err) => {
            log::error!("failed to load sprite sheet {}: {}", source, err);
            SheetState::Failed(err)
        }
    };
    ctx.sheets.insert(source, state);
    Task::none()
}

/// Tears every animation down, then closes the window.
pub fn handle_window_close_requested(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
) -> Task<Message> {
    ctx.character.teardown();
    ctx.companion.teardown();
    ctx.walker.teardown();
    log::info!("animations stopped, closing window");
    window::close(id)
}
