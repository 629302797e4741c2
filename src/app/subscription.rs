// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.

use super::animator::Animator;
use super::{AnimatorId, Message};
use iced::{event, Subscription};

/// Routes window close requests so animations can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}

/// Frame timer of one animator, tagged with its id.
///
/// Timer ids are only unique per cycler, so the animator id is part of the
/// subscription identity. An idle or disabled animator subscribes to nothing.
pub fn create_animation_subscription<K>(
    id: AnimatorId,
    animator: &Animator<K>,
) -> Subscription<Message> {
    animator
        .subscription()
        .with(id)
        .map(|(animator, timer)| Message::Tick { animator, timer })
}
