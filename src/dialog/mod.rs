//! Modal action dialogs.
//!
//! Each dialog is a form struct with its own event enum and a pure
//! `update` method, so the state machine is testable without a UI
//! harness. The `view` functions render the forms as centered cards; the
//! app stacks them over the current screen with a backdrop.

pub mod assign;
pub mod complete;

pub use assign::AssignTaskForm;
pub use complete::CompleteTaskForm;

use crate::appearance::{CORNER_RADIUS_LARGE, Palette};
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Element, Length};

/// Shared dialog chrome: fixed-width card on the surface color.
fn dialog_card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    width: f32,
    palette: &Palette,
) -> Element<'a, Message> {
    let bg = palette.surface;
    let border_color = palette.border;

    container(container(content).padding(24).width(width))
        .width(Length::Shrink)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS_LARGE),
            },
            ..Default::default()
        })
        .into()
}
