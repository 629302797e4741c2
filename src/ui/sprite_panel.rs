// SPDX-License-Identifier: MPL-2.0
//! Widgets that show sprite frames through a viewport region.
//!
//! Frames are drawn at a fixed size of `tile * scale` with nearest-neighbor
//! filtering, so pixel art stays crisp at any integer scale.

use crate::animation::Region;
use crate::domain::animation::{FrameCount, FrameIndex, TileSize};
use crate::domain::ui::DisplayScale;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{SheetSource, SpriteSheet};
use crate::ui::design_tokens::{border, radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::widget::image::FilterMethod;
use iced::widget::{column, container, image, text, Column};
use iced::{Alignment, Background, Border, ContentFit, Element, Length, Theme};

/// What a frame box currently shows.
#[derive(Debug, Clone, Copy)]
pub enum FrameContent<'a> {
    /// The sheet is still being decoded.
    Loading,
    /// The sheet or its animation settings are unusable.
    Failed(&'a Error),
    Frame {
        sheet: &'a SpriteSheet,
        region: Region<'a, SheetSource>,
        index: FrameIndex,
        count: FrameCount,
    },
}

/// Context required to render one animated frame.
pub struct FrameView<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub label: Option<String>,
    pub content: FrameContent<'a>,
    pub tile: TileSize,
    pub scale: DisplayScale,
}

/// Renders a frame box with an optional label above it and the frame
/// indicator below it.
pub fn frame<'a, Message: 'a>(ctx: FrameView<'a>) -> Element<'a, Message> {
    let width = ctx.scale.apply(ctx.tile.width());
    let height = ctx.scale.apply(ctx.tile.height());
    let colors = ctx.colors;

    let (body, caption): (Element<'a, Message>, Option<String>) = match ctx.content {
        FrameContent::Loading => (
            text(ctx.i18n.tr("sheet-loading"))
                .size(typography::CAPTION)
                .color(colors.text_secondary)
                .into(),
            None,
        ),
        FrameContent::Failed(error) => (
            text(ctx.i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .color(colors.error)
                .into(),
            None,
        ),
        FrameContent::Frame {
            sheet,
            region,
            index,
            count,
        } => {
            let caption = ctx.i18n.tr_with_args(
                "frame-indicator",
                &[
                    ("frame", FluentValue::from(index.value() + 1)),
                    ("count", FluentValue::from(count.value())),
                ],
            );
            let body: Element<'a, Message> = match sheet.frame(&region) {
                Some(handle) => image(handle.clone())
                    .filter_method(FilterMethod::Nearest)
                    .content_fit(ContentFit::Fill)
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .into(),
                None => text("").into(),
            };
            (body, Some(caption))
        }
    };

    let backdrop = colors.sprite_backdrop;
    let frame_box = container(body)
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(backdrop)),
            ..container::Style::default()
        });

    let mut content = Column::new().spacing(spacing::XXS).align_x(Alignment::Center);
    if let Some(label) = ctx.label {
        content = content.push(
            text(label)
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    }
    content = content.push(frame_box);
    if let Some(caption) = caption {
        content = content.push(
            text(caption)
                .size(typography::CAPTION)
                .color(colors.text_secondary),
        );
    }
    content.into()
}

/// Renders a whole sheet at display scale.
pub fn sheet_preview<'a, Message: 'a>(
    sheet: &'a SpriteSheet,
    scale: DisplayScale,
) -> Element<'a, Message> {
    let (width, height) = sheet.dimensions();
    image(sheet.full().clone())
        .filter_method(FilterMethod::Nearest)
        .content_fit(ContentFit::Fill)
        .width(Length::Fixed(scale.apply(width)))
        .height(Length::Fixed(scale.apply(height)))
        .into()
}

/// Titled, bordered panel around `body`.
pub fn panel<'a, Message: 'a>(
    title: String,
    body: impl Into<Element<'a, Message>>,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let surface = colors.surface_secondary;
    let outline = colors.border;
    let heading = text(title)
        .size(typography::TITLE_SM)
        .color(colors.text_primary);

    container(
        column![heading, body.into()]
            .spacing(spacing::SM)
            .align_x(Alignment::Center),
    )
    .padding(spacing::MD)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: outline,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    })
    .into()
}
