//! Reusable widget builders for gantry.
//!
//! Generic, palette-aware widget functions used across screens.

pub mod placeholder;
pub mod status_badge;

pub use placeholder::{empty_state, error_state, loading_state};
pub use status_badge::{priority_badge, status_badge};

use crate::appearance::{
    CORNER_RADIUS, CORNER_RADIUS_LARGE, CORNER_RADIUS_SMALL, PADDING_LARGE, Palette,
};
use iced::border::Radius;
use iced::widget::{Text, button, column, container, horizontal_space, row, text};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Shadow, Theme, Vector};
use lucide_icons::Icon;

/// Font for lucide icons
pub const LUCIDE_FONT: Font = Font::with_name("lucide");

/// Resolve a current value to its entry in a static option list, so
/// pick-lists with `&'static str` options can show the selection.
pub fn selected_option(options: &'static [&'static str], value: &str) -> Option<&'static str> {
    options.iter().copied().find(|o| o.eq_ignore_ascii_case(value))
}

/// Spinner animation frames (braille pattern)
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the current spinner character for the given frame
pub fn spinner_char(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Create a composable icon widget
pub fn icon(icon: Icon) -> Text<'static> {
    let icon_char: char = icon.into();
    Text::new(icon_char.to_string()).font(LUCIDE_FONT).size(16.0)
}

/// Renders an animated spinner element
pub fn spinner<'a, Message: 'a>(frame: usize, palette: &'a Palette) -> Element<'a, Message> {
    text(spinner_char(frame))
        .size(14)
        .color(palette.accent)
        .font(Font::MONOSPACE)
        .into()
}

/// Card container with shadow and border, used for table surfaces.
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    palette: &Palette,
) -> Element<'a, Message> {
    let bg = palette.surface;
    let border_color = palette.border;

    container(content)
        .padding(PADDING_LARGE)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS_LARGE),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        })
        .into()
}

/// Icon button (small, icon-only) for toolbars.
pub fn icon_button<Message: Clone + 'static>(
    lucide_icon: Icon,
    msg: Message,
    palette: &Palette,
) -> Element<'static, Message> {
    let text_color = palette.text_secondary;
    let hover_bg = palette.card_hover;

    button(container(icon(lucide_icon).size(14).color(text_color)).padding(Padding::from([6, 10])))
        .on_press(msg)
        .style(move |_, status| {
            let bg = match status {
                button::Status::Hovered => hover_bg,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}

/// Labeled secondary button with a subtle border.
pub fn action_button<'a, Message: Clone + 'a>(
    label: &'a str,
    msg: Message,
    palette: &Palette,
) -> Element<'a, Message> {
    let text_color = palette.text;
    let bg_normal = palette.card;
    let bg_hover = palette.card_hover;
    let border_normal = palette.border;
    let border_hover = palette.accent;

    button(container(text(label).size(12).color(text_color)).padding(Padding::from([6, 14])))
        .on_press(msg)
        .style(move |_: &Theme, status| {
            let (bg, border) = match status {
                button::Status::Hovered => (bg_hover, border_hover),
                _ => (bg_normal, border_normal),
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    color: border,
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS_SMALL),
                },
                ..Default::default()
            }
        })
        .into()
}

/// Filled primary button. Omitting `msg` renders it disabled.
pub fn primary_button<'a, Message: Clone + 'a>(
    label: &'a str,
    msg: Option<Message>,
    palette: &Palette,
) -> Element<'a, Message> {
    let accent = palette.accent;
    let muted = palette.card;
    let enabled = msg.is_some();

    let mut btn = button(
        container(text(label).size(12).color(Color::WHITE)).padding(Padding::from([6, 14])),
    )
    .style(move |_: &Theme, status| {
        let bg = if !enabled {
            muted
        } else {
            match status {
                button::Status::Hovered => crate::appearance::lighten(accent, 0.08),
                _ => accent,
            }
        };
        button::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: bg,
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS_SMALL),
            },
            text_color: Color::WHITE,
            ..Default::default()
        }
    });
    if let Some(msg) = msg {
        btn = btn.on_press(msg);
    }
    btn.into()
}

/// Section header: title + description on the left, trailing on the right.
pub fn section_header<'a, Message: 'a>(
    title: &'a str,
    description: &'a str,
    trailing: impl Into<Element<'a, Message>>,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let heading = column![
        text(title).size(20).color(palette.text).font(Font::MONOSPACE),
        text(description).size(12).color(palette.text_secondary),
    ]
    .spacing(4);

    row![heading, horizontal_space(), trailing.into()]
        .align_y(iced::Alignment::Center)
        .into()
}

/// Fixed-proportion table cell.
pub fn table_cell<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    portion: u16,
) -> Element<'a, Message> {
    container(content)
        .width(Length::FillPortion(portion))
        .padding(Padding::from([10, 8]))
        .into()
}

/// Muted header cell for table column titles.
pub fn table_header_cell<'a, Message: 'a>(
    label: &'a str,
    portion: u16,
    palette: &'a Palette,
) -> Element<'a, Message> {
    container(text(label).size(11).color(palette.text_muted))
        .width(Length::FillPortion(portion))
        .padding(Padding::from([6, 8]))
        .into()
}

/// Tab button for the header tab row.
pub fn tab_button<'a, Message: Clone + 'a>(
    label: &'a str,
    active: bool,
    msg: Message,
    palette: &Palette,
) -> Element<'a, Message> {
    let text_color = if active { palette.text } else { palette.text_muted };
    let accent = palette.accent;
    let bg_hover = palette.card_hover;

    button(container(text(label).size(13).color(text_color)).padding(Padding::from([8, 18])))
        .on_press(msg)
        .style(move |_: &Theme, status| {
            let bg = if active {
                bg_hover
            } else {
                match status {
                    button::Status::Hovered => bg_hover,
                    _ => Color::TRANSPARENT,
                }
            };
            button::Style {
                background: Some(Background::Color(bg)),
                border: Border {
                    color: if active { accent } else { Color::TRANSPARENT },
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS),
                },
                ..Default::default()
            }
        })
        .into()
}
