//! Loading, error, and empty placeholders shown in place of a table.

use crate::appearance::Palette;
use crate::widget::{self, action_button, icon};
use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;

/// Centered spinner shown while a fetch is pending.
pub fn loading_state<'a, Message: 'a>(
    frame: usize,
    palette: &'a Palette,
) -> Element<'a, Message> {
    container(
        column![
            widget::spinner(frame, palette),
            Space::with_height(8),
            text("Loading...").size(13).color(palette.text_muted),
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}

/// Fetch failure with a retry button re-issuing the same fetch.
pub fn error_state<'a, Message: Clone + 'a>(
    message: &'a str,
    retry: Message,
    palette: &'a Palette,
) -> Element<'a, Message> {
    container(
        column![
            icon(Icon::CircleX).size(24).color(palette.danger_light),
            Space::with_height(8),
            text(message).size(13).color(palette.text_secondary),
            Space::with_height(12),
            action_button("Retry", retry, palette),
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}

/// Nothing to show; explains where records come from.
pub fn empty_state<'a, Message: 'a>(
    glyph: Icon,
    title: &'a str,
    description: &'a str,
    palette: &'a Palette,
) -> Element<'a, Message> {
    container(
        column![
            icon(glyph).size(24).color(palette.text_muted),
            Space::with_height(8),
            text(title).size(15).color(palette.text),
            Space::with_height(4),
            text(description).size(12).color(palette.text_muted),
        ]
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}
