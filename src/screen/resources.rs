//! Resources tab - the processes and assets sections stacked in one
//! scrollable view.

use iced::widget::{Space, column, scrollable};
use iced::{Element, Length};

use crate::appearance::Palette;
use crate::message::Message;
use crate::screen::{assets, processes};

pub struct ResourcesScreenState<'a> {
    pub processes: processes::ProcessesSectionState<'a>,
    pub assets: assets::AssetsSectionState<'a>,
}

pub fn view<'a>(state: ResourcesScreenState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    scrollable(
        column![
            processes::view(state.processes, palette),
            Space::with_height(32),
            assets::view(state.assets, palette),
        ]
        .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
