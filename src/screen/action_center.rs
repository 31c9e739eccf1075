//! Action center - filterable task table with assignment and completion
//! row actions.

use gantry_types::{Task, TaskFilter};
use iced::widget::{Column, Space, column, horizontal_rule, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use lucide_icons::Icon;

use crate::appearance::Palette;
use crate::message::Message;
use crate::widget::{self, icon};

const STATUS_OPTIONS: &[&str] = &["all", "Pending", "InProgress", "Completed"];
const PRIORITY_OPTIONS: &[&str] = &["all", "Critical", "High", "Medium", "Low"];
const ASSIGNMENT_OPTIONS: &[&str] = &["all", "assigned", "unassigned"];

pub struct ActionCenterState<'a> {
    pub tasks: &'a [Task],
    pub filter: &'a TaskFilter,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub mutating: bool,
    pub spinner_frame: usize,
}

pub fn view<'a>(state: ActionCenterState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = widget::section_header(
        "Action Center",
        "Human tasks awaiting assignment and completion",
        widget::icon_button(Icon::RefreshCw, Message::RefreshTasks, palette),
        palette,
    );

    let body: Element<'a, Message> = if state.loading {
        widget::loading_state(state.spinner_frame, palette)
    } else if let Some(error) = state.error {
        widget::error_state(error, Message::RefreshTasks, palette)
    } else if state.tasks.is_empty() {
        widget::empty_state(
            Icon::CircleCheck,
            "No tasks found",
            "Tasks from the platform's action queue will appear here when available.",
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

fn view_toolbar<'a>(filter: &'a TaskFilter, palette: &'a Palette) -> Element<'a, Message> {
    let current_status = widget::selected_option(STATUS_OPTIONS, &filter.status);
    let filter_for_status = filter.clone();
    let status_filter = pick_list(STATUS_OPTIONS, current_status, move |selected| {
        Message::TaskFilterChanged(TaskFilter {
            status: selected.to_string(),
            ..filter_for_status.clone()
        })
    })
    .placeholder("Status")
    .padding(8)
    .text_size(12);

    let current_priority = widget::selected_option(PRIORITY_OPTIONS, &filter.priority);
    let filter_for_priority = filter.clone();
    let priority_filter = pick_list(PRIORITY_OPTIONS, current_priority, move |selected| {
        Message::TaskFilterChanged(TaskFilter {
            priority: selected.to_string(),
            ..filter_for_priority.clone()
        })
    })
    .placeholder("Priority")
    .padding(8)
    .text_size(12);

    let current_assignment = widget::selected_option(ASSIGNMENT_OPTIONS, &filter.assignment);
    let filter_for_assignment = filter.clone();
    let assignment_filter = pick_list(ASSIGNMENT_OPTIONS, current_assignment, move |selected| {
        Message::TaskFilterChanged(TaskFilter {
            assignment: selected.to_string(),
            ..filter_for_assignment.clone()
        })
    })
    .placeholder("Assignment")
    .padding(8)
    .text_size(12);

    let filter_for_search = filter.clone();
    let search_input = text_input("Search tasks...", &filter.search)
        .on_input(move |search| {
            Message::TaskFilterChanged(TaskFilter {
                search,
                ..filter_for_search.clone()
            })
        })
        .padding(8)
        .size(12)
        .width(Length::Fixed(220.0));

    row![status_filter, priority_filter, assignment_filter, search_input]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn view_table<'a>(state: &ActionCenterState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = row![
        widget::table_header_cell("Task", 3, palette),
        widget::table_header_cell("Status", 1, palette),
        widget::table_header_cell("Priority", 1, palette),
        widget::table_header_cell("Assignee", 2, palette),
        widget::table_header_cell("Due Date", 2, palette),
        widget::table_header_cell("Actions", 2, palette),
    ];

    let mut rows = Column::new().push(header).push(horizontal_rule(1));
    for task in state.filter.apply(state.tasks) {
        rows = rows.push(view_row(task, state.mutating, palette));
        rows = rows.push(horizontal_rule(1));
    }

    widget::card(rows, palette)
}

fn view_row<'a>(task: &'a Task, mutating: bool, palette: &'a Palette) -> Element<'a, Message> {
    let status = task.effective_status();

    let title_line = row![
        icon(status_glyph(status)).size(12).color(palette.text_secondary),
        Space::with_width(6),
        text(task.display_title()).size(13).color(palette.text),
    ]
    .align_y(Alignment::Center);

    let mut title = column![title_line].spacing(2);
    if let Some(description) = &task.description {
        title = title.push(text(description).size(11).color(palette.text_muted));
    }

    let assignee: Element<'a, Message> = if task.is_assigned() {
        text(task.effective_assignee()).size(12).color(palette.text_secondary).into()
    } else {
        text("Unassigned").size(12).color(palette.text_muted).into()
    };

    let assign_msg = (!mutating).then(|| Message::OpenAssignDialog(task.clone()));
    let assign_btn = match assign_msg {
        Some(msg) => widget::action_button("Assign", msg, palette),
        None => widget::primary_button("Assign", None, palette),
    };

    let complete_msg =
        (!mutating && !task.is_completed()).then(|| Message::OpenCompleteDialog(task.clone()));

    row![
        widget::table_cell(title, 3),
        widget::table_cell(widget::status_badge(status, palette), 1),
        widget::table_cell(
            widget::priority_badge(task.effective_priority(), palette),
            1
        ),
        widget::table_cell(assignee, 2),
        widget::table_cell(
            text(crate::util::date_format::format_date(
                task.due_date.as_deref(),
                "No due date",
            ))
            .size(12)
            .color(palette.text_muted),
            2
        ),
        widget::table_cell(
            row![
                assign_btn,
                Space::with_width(6),
                widget::primary_button("Complete", complete_msg, palette),
            ]
            .align_y(Alignment::Center),
            2
        ),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn status_glyph(status: &str) -> Icon {
    match status.to_lowercase().as_str() {
        "completed" => Icon::CircleCheck,
        "inprogress" | "in progress" => Icon::CircleDashed,
        _ => Icon::Clock,
    }
}
