//! Status and priority badges.
//!
//! Thin wrappers over the [`StatusCategory`] mapping: the category decides
//! the color, the raw string is what gets rendered.

use crate::appearance::{CORNER_RADIUS_SMALL, Palette};
use gantry_types::StatusCategory;
use iced::border::Radius;
use iced::widget::{container, text};
use iced::{Background, Border, Color, Element, Padding};

/// Badge colored by the status → category mapping.
pub fn status_badge<'a, Message: 'a>(
    status: &'a str,
    palette: &'a Palette,
) -> Element<'a, Message> {
    badge(status, StatusCategory::of_status(status), palette)
}

/// Badge colored by the priority → category mapping.
pub fn priority_badge<'a, Message: 'a>(
    priority: &'a str,
    palette: &'a Palette,
) -> Element<'a, Message> {
    badge(priority, StatusCategory::of_priority(priority), palette)
}

fn badge<'a, Message: 'a>(
    label: &'a str,
    category: StatusCategory,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let color = category_color(category, palette);

    container(text(label).size(11).color(color))
        .padding(Padding::from([2, 8]))
        .style(move |_| container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..color })),
            border: Border {
                color: Color { a: 0.4, ..color },
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS_SMALL),
            },
            ..Default::default()
        })
        .into()
}

fn category_color(category: StatusCategory, palette: &Palette) -> Color {
    match category {
        StatusCategory::Success => palette.success_light,
        StatusCategory::Warning => palette.warning_light,
        StatusCategory::Danger => palette.danger_light,
        StatusCategory::Neutral => palette.text_secondary,
    }
}
