// SPDX-License-Identifier: MPL-2.0
//! One animated sprite on screen: a frame cycler plus the sheet it shows.
//!
//! An animator whose settings are invalid keeps the error instead of a
//! cycler. It never ticks and its panel shows the error message.

use crate::animation::{CyclerOptions, FrameCycler, Viewport};
use crate::domain::animation::{FrameCount, FrameIndex, TimerId};
use crate::error::Error;
use crate::media::{SheetSource, SpriteSheet};
use crate::ui::sprite_panel::FrameContent;
use iced::Subscription;
use std::collections::HashMap;

/// Load state of one sprite sheet.
#[derive(Debug, Clone)]
pub enum SheetState {
    Loading,
    Ready(SpriteSheet),
    Failed(Error),
}

/// Sheets by source, shared by every animator.
pub type SheetCache = HashMap<SheetSource, SheetState>;

#[derive(Debug)]
pub struct Animator<K = ()> {
    name: &'static str,
    cycler: Result<FrameCycler<K>, Error>,
    source: SheetSource,
}

impl<K: PartialEq> Animator<K> {
    pub fn new(
        name: &'static str,
        options: Result<CyclerOptions<K>, Error>,
        source: SheetSource,
    ) -> Self {
        if let Err(err) = &options {
            log::error!("{} animation disabled: {}", name, err);
        }
        Self {
            name,
            cycler: options.map(FrameCycler::new),
            source,
        }
    }

    /// Mounts the animation: rewinds and starts ticking unless paused.
    pub fn activate(&mut self, playing: bool) {
        if let Ok(cycler) = &mut self.cycler {
            if let Err(err) = cycler.activate(playing) {
                log::warn!("cannot activate {} animation: {}", self.name, err);
            }
        }
    }

    /// Forwards the playback flag to a pausable cycler.
    pub fn set_playing(&mut self, playing: bool) {
        if let Ok(cycler) = &mut self.cycler {
            if let Err(err) = cycler.set_playing(playing) {
                log::warn!("cannot change {} playback: {}", self.name, err);
            }
        }
    }

    pub fn tick(&mut self, timer: TimerId) -> Option<FrameIndex> {
        self.cycler.as_mut().ok()?.tick(timer)
    }

    pub fn teardown(&mut self) {
        if let Ok(cycler) = &mut self.cycler {
            cycler.teardown();
        }
    }
}

impl Animator<SheetSource> {
    /// Switches to another sheet. A new source rewinds to frame 0.
    pub fn show(&mut self, source: SheetSource) -> bool {
        self.source = source.clone();
        match &mut self.cycler {
            Ok(cycler) => cycler.set_resource(source),
            Err(_) => false,
        }
    }
}

impl<K> Animator<K> {
    #[must_use]
    pub fn cycler(&self) -> Option<&FrameCycler<K>> {
        self.cycler.as_ref().ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.cycler.as_ref().err()
    }

    #[must_use]
    pub fn source(&self) -> &SheetSource {
        &self.source
    }

    #[must_use]
    pub fn frame_count(&self) -> Option<FrameCount> {
        self.cycler().map(|cycler| cycler.config().frame_count())
    }

    pub fn subscription(&self) -> Subscription<TimerId> {
        match &self.cycler {
            Ok(cycler) => cycler.subscription(),
            Err(_) => Subscription::none(),
        }
    }

    /// What the panel should draw right now.
    #[must_use]
    pub fn content<'a>(&'a self, sheets: &'a SheetCache, viewport: Viewport) -> FrameContent<'a> {
        let cycler = match &self.cycler {
            Ok(cycler) => cycler,
            Err(err) => return FrameContent::Failed(err),
        };
        match sheets.get(&self.source) {
            None | Some(SheetState::Loading) => FrameContent::Loading,
            Some(SheetState::Failed(err)) => FrameContent::Failed(err),
            Some(SheetState::Ready(sheet)) => FrameContent::Frame {
                sheet,
                region: viewport.region(&self.source, cycler.frame()),
                index: cycler.frame(),
                count: cycler.config().frame_count(),
            },
        }
    }
}
