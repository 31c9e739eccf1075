//! Task completion dialog.
//!
//! The action set and the dynamic field set both derive from the task's
//! type: app and form tasks carry an approval flow (decision, amount,
//! urgent flag), everything else a plain result selector. Submission is
//! blocked until an action has been chosen.

use chrono::{DateTime, Utc};
use gantry_types::{CompleteTask, CompletionAction, Task, TaskType};
use iced::widget::{Space, checkbox, column, horizontal_space, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use serde_json::{Map, json};

use crate::appearance::Palette;
use crate::message::Message;
use crate::widget::{self, icon};
use lucide_icons::Icon;

/// Result options for external tasks.
const RESULT_OPTIONS: &[&str] = &["success", "failed", "partial"];

/// Decision options for app/form tasks.
const DECISION_OPTIONS: &[&str] = &["approved", "rejected", "needs-review"];

/// Events internal to the completion dialog.
#[derive(Debug, Clone)]
pub enum Event {
    ActionSelected(CompletionAction),
    ResultSelected(String),
    DecisionSelected(String),
    AmountChanged(String),
    UrgentToggled(bool),
    CommentsChanged(String),
}

/// Form state while a task is open for completion.
#[derive(Debug, Clone)]
pub struct CompleteTaskForm {
    pub task: Task,
    pub action: Option<CompletionAction>,
    pub result: Option<String>,
    pub decision: Option<String>,
    pub amount: String,
    pub urgent: bool,
    pub comments: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CompleteTaskForm {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            action: None,
            result: None,
            decision: None,
            amount: String::new(),
            urgent: false,
            comments: String::new(),
            submitting: false,
            error: None,
        }
    }

    /// Action set offered for this task, a pure function of its type.
    pub fn available_actions(&self) -> &'static [CompletionAction] {
        CompletionAction::available_for(self.task.type_enum())
    }

    pub fn update(&mut self, event: Event) {
        match event {
            Event::ActionSelected(action) => self.action = Some(action),
            Event::ResultSelected(result) => self.result = Some(result),
            Event::DecisionSelected(decision) => self.decision = Some(decision),
            Event::AmountChanged(value) => {
                // Numeric field: keep digits and a decimal point only.
                self.amount = value
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
            }
            Event::UrgentToggled(urgent) => self.urgent = urgent,
            Event::CommentsChanged(value) => self.comments = value,
        }
    }

    /// Completion request for the current state, or `None` while no
    /// action is selected. The payload unions the collected dynamic
    /// fields with a trimmed-optional comment and the completion
    /// timestamp.
    pub fn payload(&self, completed_at: DateTime<Utc>) -> Option<CompleteTask> {
        let action = self.action?;

        let mut data = Map::new();
        match self.task.type_enum() {
            TaskType::External => {
                if let Some(result) = &self.result {
                    data.insert("result".to_string(), json!(result));
                }
            }
            TaskType::App | TaskType::Form => {
                if let Some(decision) = &self.decision {
                    data.insert("decision".to_string(), json!(decision));
                }
                if let Ok(amount) = self.amount.trim().parse::<f64>() {
                    data.insert("amount".to_string(), json!(amount));
                }
                data.insert("urgent".to_string(), json!(self.urgent));
            }
        }

        let comments = self.comments.trim();
        if !comments.is_empty() {
            data.insert("comments".to_string(), json!(comments));
        }
        data.insert("completedAt".to_string(), json!(completed_at.to_rfc3339()));

        Some(CompleteTask {
            task_id: self.task.id.clone(),
            task_type: self.task.type_enum(),
            action,
            data,
            folder_id: self.task.folder_id_or_default(),
        })
    }
}

pub fn view<'a>(form: &'a CompleteTaskForm, palette: &'a Palette) -> Element<'a, Message> {
    let header = row![
        icon(Icon::CircleCheck).size(18).color(palette.text),
        Space::with_width(8),
        text("Complete Task").size(18).color(palette.text),
    ]
    .align_y(Alignment::Center);

    let subtitle = text(format!(
        "Complete \"{}\" with the required information",
        form.task.display_title()
    ))
    .size(13)
    .color(palette.text_secondary);

    let mut actions = column![text("Action").size(12).color(palette.text_secondary)].spacing(6);
    for action in form.available_actions() {
        let active = form.action == Some(*action);
        actions = actions.push(widget::tab_button(
            action.label(),
            active,
            Message::CompleteDialog(Event::ActionSelected(*action)),
            palette,
        ));
    }

    let detail: Element<'a, Message> = if form.action.is_some() {
        column![
            dynamic_fields(form, palette),
            Space::with_height(14),
            text("Comments").size(12).color(palette.text_secondary),
            Space::with_height(6),
            text_input("Add any additional comments...", &form.comments)
                .on_input(|value| Message::CompleteDialog(Event::CommentsChanged(value)))
                .padding(10)
                .size(13),
        ]
        .into()
    } else {
        Space::with_height(0).into()
    };

    let error_line: Element<'a, Message> = match &form.error {
        Some(error) => text(error).size(12).color(palette.danger_light).into(),
        None => Space::with_height(0).into(),
    };

    let submit_label = if form.submitting { "Completing..." } else { "Complete Task" };
    let submit_msg =
        (!form.submitting && form.action.is_some()).then_some(Message::SubmitComplete);

    let footer = row![
        horizontal_space(),
        widget::action_button("Cancel", Message::CloseCompleteDialog, palette),
        Space::with_width(8),
        widget::primary_button(submit_label, submit_msg, palette),
    ]
    .align_y(Alignment::Center);

    let content = column![
        header,
        Space::with_height(4),
        subtitle,
        Space::with_height(16),
        actions,
        Space::with_height(14),
        detail,
        Space::with_height(12),
        error_line,
        Space::with_height(8),
        footer,
    ];

    super::dialog_card(content, 460.0, palette)
}

/// Field set revealed once an action is selected, dependent on task type.
fn dynamic_fields<'a>(form: &'a CompleteTaskForm, palette: &'a Palette) -> Element<'a, Message> {
    match form.task.type_enum() {
        TaskType::External => column![
            text("Task Result").size(12).color(palette.text_secondary),
            Space::with_height(6),
            pick_list(
                RESULT_OPTIONS,
                widget::selected_option(RESULT_OPTIONS, form.result.as_deref().unwrap_or("")),
                |result| {
                    Message::CompleteDialog(Event::ResultSelected(result.to_string()))
                },
            )
            .placeholder("Select result")
            .padding(10)
            .text_size(13)
            .width(Length::Fill),
        ]
        .into(),
        TaskType::App | TaskType::Form => column![
            text("Decision").size(12).color(palette.text_secondary),
            Space::with_height(6),
            pick_list(
                DECISION_OPTIONS,
                widget::selected_option(DECISION_OPTIONS, form.decision.as_deref().unwrap_or("")),
                |decision| {
                    Message::CompleteDialog(Event::DecisionSelected(decision.to_string()))
                },
            )
            .placeholder("Select decision")
            .padding(10)
            .text_size(13)
            .width(Length::Fill),
            Space::with_height(14),
            text("Amount (if applicable)").size(12).color(palette.text_secondary),
            Space::with_height(6),
            text_input("Enter amount", &form.amount)
                .on_input(|value| Message::CompleteDialog(Event::AmountChanged(value)))
                .padding(10)
                .size(13),
            Space::with_height(14),
            checkbox("Mark as urgent", form.urgent)
                .on_toggle(|urgent| Message::CompleteDialog(Event::UrgentToggled(urgent)))
                .size(16)
                .text_size(13),
        ]
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn form_for(body: Value) -> CompleteTaskForm {
        CompleteTaskForm::new(serde_json::from_value(body).unwrap())
    }

    fn now() -> DateTime<Utc> {
        "2024-03-01T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn app_tasks_offer_the_approval_actions() {
        let f = form_for(json!({"id": "t1", "type": "App"}));
        assert_eq!(
            f.available_actions(),
            &[
                CompletionAction::Approve,
                CompletionAction::Reject,
                CompletionAction::Submit
            ]
        );
    }

    #[test]
    fn untyped_tasks_offer_complete_and_submit() {
        let f = form_for(json!({"id": "t1"}));
        assert_eq!(
            f.available_actions(),
            &[CompletionAction::Complete, CompletionAction::Submit]
        );
    }

    #[test]
    fn payload_requires_a_selected_action() {
        let f = form_for(json!({"id": "t1", "type": "App"}));
        assert!(f.payload(now()).is_none());
    }

    #[test]
    fn external_payload_carries_result_comments_and_timestamp() {
        let mut f = form_for(json!({"id": "t1", "folderId": 5}));
        f.update(Event::ActionSelected(CompletionAction::Complete));
        f.update(Event::ResultSelected("partial".into()));
        f.update(Event::CommentsChanged("  ran manually  ".into()));

        let request = f.payload(now()).unwrap();
        assert_eq!(request.task_type, TaskType::External);
        assert_eq!(request.action, CompletionAction::Complete);
        assert_eq!(request.folder_id, 5);
        assert_eq!(request.data["result"], json!("partial"));
        assert_eq!(request.data["comments"], json!("ran manually"));
        assert_eq!(request.data["completedAt"], json!("2024-03-01T10:00:00+00:00"));
    }

    #[test]
    fn app_payload_unions_decision_amount_and_urgency() {
        let mut f = form_for(json!({"id": "t2", "type": "Form"}));
        f.update(Event::ActionSelected(CompletionAction::Approve));
        f.update(Event::DecisionSelected("approved".into()));
        f.update(Event::AmountChanged("1250.50".into()));
        f.update(Event::UrgentToggled(true));

        let request = f.payload(now()).unwrap();
        assert_eq!(request.data["decision"], json!("approved"));
        assert_eq!(request.data["amount"], json!(1250.5));
        assert_eq!(request.data["urgent"], json!(true));
        // Blank comments stay absent rather than serializing as "".
        assert!(!request.data.contains_key("comments"));
    }

    #[test]
    fn amount_rejects_non_numeric_input() {
        let mut f = form_for(json!({"id": "t2", "type": "App"}));
        f.update(Event::ActionSelected(CompletionAction::Submit));
        f.update(Event::AmountChanged("12a4".into()));
        assert_eq!(f.amount, "124");

        f.update(Event::AmountChanged(String::new()));
        let request = f.payload(now()).unwrap();
        assert!(!request.data.contains_key("amount"));
    }

    #[test]
    fn unknown_type_falls_back_to_the_external_flow() {
        let f = form_for(json!({"id": "t3", "type": "Mystery"}));
        assert_eq!(
            f.available_actions(),
            &[CompletionAction::Complete, CompletionAction::Submit]
        );
    }
}
