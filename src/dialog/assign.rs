//! Task assignment dialog.
//!
//! The assignment target comes from one of two sources: a roster
//! pick-list or a freeform identifier field; the active toggle decides
//! which one supplies the target. Submission produces nothing until the
//! resolved target is non-empty after trimming.

use gantry_types::{AssignTask, Task};
use iced::widget::{Space, column, horizontal_space, pick_list, row, text, text_input};
use iced::{Alignment, Element};

use crate::appearance::Palette;
use crate::message::Message;
use crate::widget::{self, icon};
use lucide_icons::Icon;

/// Events internal to the assignment dialog.
#[derive(Debug, Clone)]
pub enum Event {
    UseRoster,
    UseCustom,
    RosterSelected(String),
    CustomChanged(String),
    ReasonChanged(String),
}

/// Form state while a task is open for assignment.
#[derive(Debug, Clone)]
pub struct AssignTaskForm {
    pub task: Task,
    pub use_custom: bool,
    pub selected: Option<String>,
    pub custom: String,
    pub reason: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl AssignTaskForm {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            use_custom: false,
            selected: None,
            custom: String::new(),
            reason: String::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::UseRoster => self.use_custom = false,
            Event::UseCustom => self.use_custom = true,
            Event::RosterSelected(user) => self.selected = Some(user),
            Event::CustomChanged(value) => self.custom = value,
            Event::ReasonChanged(value) => self.reason = value,
        }
    }

    /// Assignment request for the current state, or `None` when the
    /// resolved target is empty after trimming. The reason is optional
    /// and blank input normalizes to absent.
    pub fn request(&self) -> Option<AssignTask> {
        let target = if self.use_custom {
            self.custom.as_str()
        } else {
            self.selected.as_deref().unwrap_or("")
        };
        let target = target.trim();
        if target.is_empty() {
            return None;
        }

        let reason = self.reason.trim();
        Some(AssignTask {
            task_id: self.task.id.clone(),
            user_name_or_email: target.to_string(),
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        })
    }
}

pub fn view<'a>(
    form: &'a AssignTaskForm,
    roster: &'a [String],
    palette: &'a Palette,
) -> Element<'a, Message> {
    let header = row![
        icon(Icon::UserPlus).size(18).color(palette.text),
        Space::with_width(8),
        text("Assign Task").size(18).color(palette.text),
    ]
    .align_y(Alignment::Center);

    let subtitle = text(format!("Assign \"{}\" to a user", form.task.display_title()))
        .size(13)
        .color(palette.text_secondary);

    let source_toggle = row![
        widget::tab_button(
            "Select from list",
            !form.use_custom,
            Message::AssignDialog(Event::UseRoster),
            palette,
        ),
        Space::with_width(8),
        widget::tab_button(
            "Enter custom user",
            form.use_custom,
            Message::AssignDialog(Event::UseCustom),
            palette,
        ),
    ];

    let target_field: Element<'a, Message> = if form.use_custom {
        text_input("Enter username or email", &form.custom)
            .on_input(|value| Message::AssignDialog(Event::CustomChanged(value)))
            .padding(10)
            .size(13)
            .into()
    } else {
        pick_list(roster, form.selected.clone(), |user| {
            Message::AssignDialog(Event::RosterSelected(user))
        })
        .placeholder("Select a user")
        .padding(10)
        .text_size(13)
        .width(iced::Length::Fill)
        .into()
    };

    let reason_field = column![
        text("Assignment reason (optional)").size(12).color(palette.text_secondary),
        Space::with_height(6),
        text_input("Enter reason for assignment...", &form.reason)
            .on_input(|value| Message::AssignDialog(Event::ReasonChanged(value)))
            .padding(10)
            .size(13),
    ];

    let error_line: Element<'a, Message> = match &form.error {
        Some(error) => text(error).size(12).color(palette.danger_light).into(),
        None => Space::with_height(0).into(),
    };

    let submit_label = if form.submitting { "Assigning..." } else { "Assign Task" };
    let submit_msg = (!form.submitting && form.request().is_some()).then_some(Message::SubmitAssign);

    let footer = row![
        horizontal_space(),
        widget::action_button("Cancel", Message::CloseAssignDialog, palette),
        Space::with_width(8),
        widget::primary_button(submit_label, submit_msg, palette),
    ]
    .align_y(Alignment::Center);

    let content = column![
        header,
        Space::with_height(4),
        subtitle,
        Space::with_height(16),
        source_toggle,
        Space::with_height(10),
        target_field,
        Space::with_height(16),
        reason_field,
        Space::with_height(12),
        error_line,
        Space::with_height(8),
        footer,
    ];

    super::dialog_card(content, 420.0, palette)
}
