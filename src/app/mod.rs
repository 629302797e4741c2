// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the sprite animations.
//!
//! The `App` struct wires together localization, configuration, the sheet
//! cache and three animators: the pausable character, the always-on
//! companion and the directional walker. Window close tears every animator
//! down before the window goes away.

mod animator;
pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use animator::{Animator, SheetCache, SheetState};
pub use message::{AnimatorId, Flags, Message};

use crate::animation::{CyclerOptions, Viewport};
use crate::domain::animation::{FrameCount, TileSize};
use crate::domain::ui::DisplayScale;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{Direction, SheetSource, SpriteSheet};
use crate::ui::theming::AppTheme;
use config::{Config, WalkerSheets};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    viewport: Viewport,
    scale: DisplayScale,
    show_sheet: bool,
    character: Animator,
    companion: Animator,
    walker: Animator<SheetSource>,
    walker_sheets: WalkerSheets,
    direction: Direction,
    /// Playback flag of the character panel.
    is_playing: bool,
    sheets: SheetCache,
    /// i18n key of a startup warning shown above the panels.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("direction", &self.direction)
            .field("is_playing", &self.is_playing)
            .field("sheets", &self.sheets.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
///
/// Close requests are delivered as messages so the animations are torn
/// down before the window is closed.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, warning) = config::load();
        Self::from_config(&config, flags.lang, warning)
    }

    /// Builds the application from an already loaded configuration, starts
    /// the animations and queues every sheet for decoding.
    pub fn from_config(
        config: &Config,
        lang: Option<String>,
        warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(lang, config);
        let tile = config.tile().map_err(Error::from);
        let direction = config.walker.direction;
        let walker_sheets = config.walker.sheets.clone();
        let walker_source = walker_sheets.source(direction);

        let character = Animator::new(
            "character",
            with_tile(&tile, config.character.animation()).map(CyclerOptions::pausable),
            config.character.source(),
        );
        let companion = Animator::new(
            "companion",
            with_tile(&tile, config.walker.companion_animation()).map(CyclerOptions::always_on),
            config.walker.companion_source(),
        );
        let walker = Animator::new(
            "walker",
            with_tile(&tile, config.walker.animation())
                .map(|animation| CyclerOptions::reset_on_change(animation, walker_source.clone())),
            walker_source,
        );

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            viewport: Viewport::new(tile.clone().unwrap_or_default()),
            scale: config.scale(),
            show_sheet: config.show_sheet(),
            character,
            companion,
            walker,
            walker_sheets,
            direction,
            is_playing: config.character.autoplay.unwrap_or(true),
            sheets: SheetCache::new(),
            warning,
        };

        app.character.activate(app.is_playing);
        app.companion.activate(true);
        app.walker.activate(true);

        let task = app.load_sheets();
        (app, task)
    }

    /// Queues decoding of every sheet an animator can show.
    fn load_sheets(&mut self) -> Task<Message> {
        let tile = self.viewport.tile();
        let mut requests = Vec::new();
        if let Some(frames) = self.character.frame_count() {
            requests.push((self.character.source().clone(), frames));
        }
        if let Some(frames) = self.companion.frame_count() {
            requests.push((self.companion.source().clone(), frames));
        }
        if let Some(frames) = self.walker.frame_count() {
            for direction in Direction::ALL {
                requests.push((self.walker_sheets.source(direction), frames));
            }
        }

        let mut tasks = Vec::new();
        for (source, frames) in requests {
            if self.sheets.contains_key(&source) {
                continue;
            }
            self.sheets.insert(source.clone(), SheetState::Loading);
            tasks.push(load_sheet_task(source, tile, frames));
        }
        Task::batch(tasks)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_animation_subscription(AnimatorId::Character, &self.character),
            subscription::create_animation_subscription(AnimatorId::Companion, &self.companion),
            subscription::create_animation_subscription(AnimatorId::Walker, &self.walker),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            character: &mut self.character,
            companion: &mut self.companion,
            walker: &mut self.walker,
            walker_sheets: &self.walker_sheets,
            direction: &mut self.direction,
            is_playing: &mut self.is_playing,
            sheets: &mut self.sheets,
        };

        match message {
            Message::Tick { animator, timer } => update::handle_tick(&mut ctx, animator, timer),
            Message::TogglePlayback => update::handle_toggle_playback(&mut ctx),
            Message::SelectDirection(direction) => {
                update::handle_select_direction(&mut ctx, direction)
            }
            Message::SheetLoaded { source, result } => {
                update::handle_sheet_loaded(&mut ctx, source, result)
            }
            Message::WindowCloseRequested(id) => update::handle_window_close_requested(&mut ctx, id),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            viewport: self.viewport,
            scale: self.scale,
            show_sheet: self.show_sheet,
            character: &self.character,
            companion: &self.companion,
            walker: &self.walker,
            direction: self.direction,
            is_playing: self.is_playing,
            sheets: &self.sheets,
            warning: self.warning.as_deref(),
        })
    }

    #[must_use]
    pub fn character(&self) -> &Animator {
        &self.character
    }

    #[must_use]
    pub fn companion(&self) -> &Animator {
        &self.companion
    }

    #[must_use]
    pub fn walker(&self) -> &Animator<SheetSource> {
        &self.walker
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn sheets(&self) -> &SheetCache {
        &self.sheets
    }
}

/// Combines tile and animation validation: either error disables the panel.
fn with_tile<T, E: Into<Error>>(
    tile: &Result<TileSize, Error>,
    animation: Result<T, E>,
) -> Result<T, Error> {
    let animation = animation.map_err(Into::into)?;
    tile.as_ref().map_err(Clone::clone)?;
    Ok(animation)
}

fn load_sheet_task(source: SheetSource, tile: TileSize, frames: FrameCount) -> Task<Message> {
    let request = source.clone();
    Task::perform(
        async move { SpriteSheet::load(&request, tile, frames) },
        move |result| Message::SheetLoaded { source, result },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animation::TimerId;
    use crate::media::BuiltinSheet;

    fn app() -> App {
        App::from_config(&Config::default(), Some("en-US".to_string()), None).0
    }

    fn running_timer<K>(animator: &Animator<K>) -> TimerId {
        animator
            .cycler()
            .and_then(|cycler| cycler.phase().timer())
            .expect("animator should be running")
    }

    fn tick(app: &mut App, animator: AnimatorId, timer: TimerId, times: usize) {
        for _ in 0..times {
            let _ = app.update(Message::Tick { animator, timer });
        }
    }

    #[test]
    fn boot_starts_all_animations_and_queues_sheets() {
        let app = app();
        assert!(app.is_playing());
        assert!(app.character().cycler().is_some_and(|c| c.is_running()));
        assert!(app.companion().cycler().is_some_and(|c| c.is_running()));
        assert!(app.walker().cycler().is_some_and(|c| c.is_running()));
        // character, companion and four walker directions
        assert_eq!(app.sheets().len(), 6);
        assert!(app
            .sheets()
            .values()
            .all(|state| matches!(state, SheetState::Loading)));
    }

    #[test]
    fn autoplay_off_starts_character_paused() {
        let mut config = Config::default();
        config.character.autoplay = Some(false);
        let (app, _) = App::from_config(&config, None, None);
        assert!(!app.is_playing());
        assert!(!app.character().cycler().is_some_and(|c| c.is_running()));
        assert!(app.companion().cycler().is_some_and(|c| c.is_running()));
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let mut app = app();
        let timer = running_timer(app.character());
        tick(&mut app, AnimatorId::Character, timer, 3);

        let _ = app.update(Message::TogglePlayback);
        assert!(!app.is_playing());
        tick(&mut app, AnimatorId::Character, timer, 10);
        assert_eq!(app.character().cycler().map(|c| c.frame().value()), Some(3));

        let _ = app.update(Message::TogglePlayback);
        let resumed = running_timer(app.character());
        assert_ne!(resumed, timer);
        tick(&mut app, AnimatorId::Character, resumed, 1);
        assert_eq!(app.character().cycler().map(|c| c.frame().value()), Some(4));
    }

    #[test]
    fn ticks_only_advance_their_own_animator() {
        let mut app = app();
        let companion = running_timer(app.companion());
        tick(&mut app, AnimatorId::Companion, companion, 2);
        assert_eq!(app.companion().cycler().map(|c| c.frame().value()), Some(2));
        assert_eq!(app.character().cycler().map(|c| c.frame().value()), Some(0));
        assert_eq!(app.walker().cycler().map(|c| c.frame().value()), Some(0));
    }

    #[test]
    fn direction_change_resets_only_the_walker() {
        let mut app = app();
        let walker = running_timer(app.walker());
        let companion = running_timer(app.companion());
        tick(&mut app, AnimatorId::Walker, walker, 5);
        tick(&mut app, AnimatorId::Companion, companion, 5);

        let _ = app.update(Message::SelectDirection(Direction::Left));
        assert_eq!(app.direction(), Direction::Left);
        assert_eq!(
            app.walker().source(),
            &SheetSource::Builtin(BuiltinSheet::Walker(Direction::Left))
        );
        assert_eq!(app.walker().cycler().map(|c| c.frame().value()), Some(0));
        assert_eq!(app.companion().cycler().map(|c| c.frame().value()), Some(5));
        assert_eq!(running_timer(app.walker()), walker);
    }

    #[test]
    fn same_direction_keeps_the_frame() {
        let mut app = app();
        let walker = running_timer(app.walker());
        tick(&mut app, AnimatorId::Walker, walker, 3);
        let _ = app.update(Message::SelectDirection(Direction::Down));
        assert_eq!(app.walker().cycler().map(|c| c.frame().value()), Some(3));
    }

    #[test]
    fn loaded_sheets_replace_loading_state() {
        let mut app = app();
        let source = SheetSource::Builtin(BuiltinSheet::Character);
        let count = FrameCount::new(7).expect("valid count");
        let result = SpriteSheet::load(&source, TileSize::default(), count);
        let _ = app.update(Message::SheetLoaded {
            source: source.clone(),
            result,
        });
        assert!(matches!(
            app.sheets().get(&source),
            Some(SheetState::Ready(_))
        ));
    }

    #[test]
    fn invalid_frame_count_disables_only_that_panel() {
        let mut config = Config::default();
        config.character.frame_count = Some(0);
        let (app, _) = App::from_config(&config, None, None);
        assert!(app.character().error().is_some());
        assert!(app.walker().cycler().is_some_and(|c| c.is_running()));
        // the character sheet is never requested
        assert_eq!(app.sheets().len(), 5);
    }

    #[test]
    fn invalid_tile_disables_every_panel() {
        let mut config = Config::default();
        config.display.tile_height = Some(0);
        let (app, _) = App::from_config(&config, None, None);
        assert!(app.character().error().is_some());
        assert!(app.companion().error().is_some());
        assert!(app.walker().error().is_some());
        assert!(app.sheets().is_empty());
    }

    #[test]
    fn close_request_tears_everything_down() {
        let mut app = app();
        let character = running_timer(app.character());
        let walker = running_timer(app.walker());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(app
            .character()
            .cycler()
            .is_some_and(|c| c.phase().is_torn_down()));
        tick(&mut app, AnimatorId::Character, character, 3);
        tick(&mut app, AnimatorId::Walker, walker, 3);
        assert_eq!(app.character().cycler().map(|c| c.frame().value()), Some(0));
        assert_eq!(app.walker().cycler().map(|c| c.frame().value()), Some(0));

        let _ = app.update(Message::TogglePlayback);
        assert!(!app.character().cycler().is_some_and(|c| c.is_running()));
    }
}
