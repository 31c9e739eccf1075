//! Processes section - filterable table of automation processes with a
//! start action per row.

use gantry_types::{Process, ResourceFilter};
use iced::widget::{Column, Space, column, horizontal_rule, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;

use crate::appearance::Palette;
use crate::message::Message;
use crate::widget::{self, icon};

const STATUS_OPTIONS: &[&str] = &["all", "Available", "Running", "Failed"];
const FOLDER_OPTIONS: &[&str] = &["all", "default", "production", "development"];

pub struct ProcessesSectionState<'a> {
    pub processes: &'a [Process],
    pub filter: &'a ResourceFilter,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub starting: bool,
    pub spinner_frame: usize,
}

pub fn view<'a>(state: ProcessesSectionState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = widget::section_header(
        "Processes",
        "Manage and execute automation processes",
        widget::icon_button(Icon::RefreshCw, Message::RefreshProcesses, palette),
        palette,
    );

    let body: Element<'a, Message> = if state.loading {
        widget::loading_state(state.spinner_frame, palette)
    } else if let Some(error) = state.error {
        widget::error_state(error, Message::RefreshProcesses, palette)
    } else if state.processes.is_empty() {
        widget::empty_state(
            Icon::Package,
            "No processes found",
            "Publish processes to the orchestrator to see them here.",
            palette,
        )
    } else {
        column![
            view_toolbar(state.filter, palette),
            Space::with_height(12),
            view_table(&state, palette),
        ]
        .into()
    };

    column![header, Space::with_height(12), body].into()
}

fn view_toolbar<'a>(filter: &'a ResourceFilter, palette: &'a Palette) -> Element<'a, Message> {
    let current_status = widget::selected_option(STATUS_OPTIONS, &filter.status);
    let filter_for_status = filter.clone();
    let status_filter = pick_list(STATUS_OPTIONS, current_status, move |selected| {
        Message::ProcessFilterChanged(ResourceFilter {
            status: selected.to_string(),
            ..filter_for_status.clone()
        })
    })
    .placeholder("Status")
    .padding(8)
    .text_size(12);

    let current_folder = widget::selected_option(FOLDER_OPTIONS, &filter.folder);
    let filter_for_folder = filter.clone();
    let folder_filter = pick_list(FOLDER_OPTIONS, current_folder, move |selected| {
        Message::ProcessFilterChanged(ResourceFilter {
            folder: selected.to_string(),
            ..filter_for_folder.clone()
        })
    })
    .placeholder("Folder")
    .padding(8)
    .text_size(12);

    let filter_for_search = filter.clone();
    let search_input = text_input("Search processes...", &filter.search)
        .on_input(move |search| {
            Message::ProcessFilterChanged(ResourceFilter {
                search,
                ..filter_for_search.clone()
            })
        })
        .padding(8)
        .size(12)
        .width(Length::Fixed(220.0));

    row![status_filter, folder_filter, search_input]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn view_table<'a>(state: &ProcessesSectionState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = row![
        widget::table_header_cell("Name", 3, palette),
        widget::table_header_cell("Version", 1, palette),
        widget::table_header_cell("Status", 1, palette),
        widget::table_header_cell("Last Modified", 2, palette),
        widget::table_header_cell("Folder", 1, palette),
        widget::table_header_cell("Actions", 1, palette),
    ];

    let mut rows = Column::new().push(header).push(horizontal_rule(1));
    for process in state.filter.apply(state.processes) {
        rows = rows.push(view_row(process, state.starting, palette));
        rows = rows.push(horizontal_rule(1));
    }

    widget::card(rows, palette)
}

fn view_row<'a>(
    process: &'a Process,
    starting: bool,
    palette: &'a Palette,
) -> Element<'a, Message> {
    let mut name = column![text(&process.name).size(13).color(palette.text)].spacing(2);
    if let Some(description) = &process.description {
        name = name.push(text(description).size(11).color(palette.text_muted));
    }

    let start_msg = (!starting).then(|| Message::StartProcess {
        key: process.key.clone(),
        folder_id: process.folder_id_or_default(),
    });

    row![
        widget::table_cell(name, 3),
        widget::table_cell(
            text(process.version_or_default()).size(12).color(palette.text_secondary),
            1
        ),
        widget::table_cell(widget::status_badge(process.effective_status(), palette), 1),
        widget::table_cell(
            text(crate::util::date_format::format_timestamp(
                process.last_modified_time.as_deref(),
                "Never",
            ))
            .size(12)
            .color(palette.text_muted),
            2
        ),
        widget::table_cell(
            text(process.folder_or_default()).size(12).color(palette.text_muted),
            1
        ),
        widget::table_cell(
            row![
                icon(Icon::Play).size(12).color(palette.text_secondary),
                Space::with_width(4),
                widget::primary_button("Start", start_msg, palette),
            ]
            .align_y(Alignment::Center),
            1
        ),
    ]
    .align_y(Alignment::Center)
    .into()
}
