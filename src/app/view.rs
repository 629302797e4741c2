// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::animator::{Animator, SheetCache, SheetState};
use super::Message;
use crate::animation::Viewport;
use crate::domain::ui::DisplayScale;
use crate::i18n::fluent::I18n;
use crate::media::{Direction, SheetSource};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sprite_panel::{self, FrameView};
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::widget::{button, column, container, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub viewport: Viewport,
    pub scale: DisplayScale,
    pub show_sheet: bool,
    pub character: &'a Animator,
    pub companion: &'a Animator,
    pub walker: &'a Animator<SheetSource>,
    pub direction: Direction,
    pub is_playing: bool,
    pub sheets: &'a SheetCache,
    pub warning: Option<&'a str>,
}

/// Renders the character, walker and sheet panels with the footer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    content = content.push(
        text(ctx.i18n.tr("window-title"))
            .size(typography::TITLE_LG)
            .color(ctx.colors.text_primary),
    );

    if let Some(key) = ctx.warning {
        content = content.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY)
                .color(ctx.colors.error),
        );
    }

    content = content.push(
        row![view_character(&ctx), view_walker(&ctx)]
            .spacing(spacing::LG)
            .align_y(Alignment::Start),
    );

    if ctx.show_sheet {
        if let Some(panel) = view_sheet(&ctx) {
            content = content.push(panel);
        }
    }

    content = content.push(
        text(ctx.i18n.tr_with_args(
            "footer-text",
            &[("version", FluentValue::from(env!("CARGO_PKG_VERSION")))],
        ))
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary),
    );

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn frame_view<'a, K>(
    ctx: &ViewContext<'a>,
    animator: &'a Animator<K>,
    label: Option<String>,
) -> Element<'a, Message> {
    sprite_panel::frame(FrameView {
        i18n: ctx.i18n,
        colors: ctx.colors,
        label,
        content: animator.content(ctx.sheets, ctx.viewport),
        tile: ctx.viewport.tile(),
        scale: ctx.scale,
    })
}

fn view_character<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (label_key, state_key) = if ctx.is_playing {
        ("playback-pause", "playback-state-playing")
    } else {
        ("playback-resume", "playback-state-paused")
    };
    let toggle = button(text(ctx.i18n.tr(label_key)).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe(
            ctx.character
                .cycler()
                .map(|_| Message::TogglePlayback),
        );

    let body = column![
        frame_view(ctx, ctx.character, None),
        text(ctx.i18n.tr(state_key))
            .size(typography::CAPTION)
            .color(ctx.colors.text_secondary),
        toggle,
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    sprite_panel::panel(ctx.i18n.tr("panel-character-title"), body, ctx.colors)
}

fn view_walker<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sprites = row![
        frame_view(ctx, ctx.companion, Some(ctx.i18n.tr("companion-label"))),
        frame_view(ctx, ctx.walker, Some(ctx.i18n.tr("walker-label"))),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Start);

    let buttons = Direction::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |buttons, direction| {
            let style = if direction == ctx.direction {
                button::primary
            } else {
                button::secondary
            };
            buttons.push(
                button(
                    container(text(ctx.i18n.tr(direction.i18n_key())).size(typography::BODY))
                        .center_x(Length::Fill),
                )
                .width(Length::Fixed(sizing::DIRECTION_BUTTON_WIDTH))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(style)
                .on_press(Message::SelectDirection(direction)),
            )
        });

    let body = column![sprites, buttons]
        .spacing(spacing::MD)
        .align_x(Alignment::Center);

    sprite_panel::panel(ctx.i18n.tr("panel-walker-title"), body, ctx.colors)
}

fn view_sheet<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    match ctx.sheets.get(ctx.character.source()) {
        Some(SheetState::Ready(sheet)) => Some(sprite_panel::panel(
            ctx.i18n.tr("panel-sheet-title"),
            sprite_panel::sheet_preview(sheet, ctx.scale),
            ctx.colors,
        )),
        _ => None,
    }
}
