//! Connect screen shown until the orchestrator client is ready.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length};

use crate::appearance::Palette;
use crate::message::Message;
use crate::widget;

pub enum ConnectState<'a> {
    Initializing { spinner_frame: usize },
    Failed { error: &'a str },
}

pub fn view<'a>(state: ConnectState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state {
        ConnectState::Initializing { spinner_frame } => column![
            widget::spinner(spinner_frame, palette),
            Space::with_height(12),
            text("Connecting to orchestrator...")
                .size(15)
                .color(palette.text),
            Space::with_height(4),
            text("Acquiring a session with the platform API")
                .size(12)
                .color(palette.text_muted),
        ]
        .align_x(Alignment::Center)
        .into(),
        ConnectState::Failed { error } => column![
            text("Connection failed").size(18).color(palette.text),
            Space::with_height(8),
            text(error).size(13).color(palette.danger_light),
            Space::with_height(16),
            widget::action_button("Retry", Message::Initialize, palette),
        ]
        .align_x(Alignment::Center)
        .into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
