//! Dialog state machines driven through full user sequences, without a UI
//! harness.

use chrono::{DateTime, Utc};
use gantry::dialog::{AssignTaskForm, CompleteTaskForm, assign, complete};
use gantry_types::{CompletionAction, Task, TaskType};
use serde_json::json;

fn task(body: serde_json::Value) -> Task {
    serde_json::from_value(body).unwrap()
}

fn submit_time() -> DateTime<Utc> {
    "2024-06-10T09:30:00Z".parse().unwrap()
}

#[test]
fn assignment_flow_from_roster_to_custom_and_back() {
    let mut form = AssignTaskForm::new(task(json!({
        "id": "t42", "title": "Invoice Review", "status": "Pending"
    })));

    // Freshly opened: nothing resolved, nothing submitted.
    assert!(form.request().is_none());

    // Pick from the roster.
    form.update(assign::Event::RosterSelected("admin@company.com".into()));
    let request = form.request().expect("roster selection resolves");
    assert_eq!(request.task_id, "t42");
    assert_eq!(request.user_name_or_email, "admin@company.com");

    // Switch to freeform entry: the roster pick no longer applies.
    form.update(assign::Event::UseCustom);
    assert!(form.request().is_none());

    form.update(assign::Event::CustomChanged("  bob@x.com  ".into()));
    form.update(assign::Event::ReasonChanged("   ".into()));
    let request = form.request().unwrap();
    assert_eq!(request.user_name_or_email, "bob@x.com");
    assert_eq!(request.reason, None);

    // Closing drops the form; reopening starts from a clean slate.
    let reopened = AssignTaskForm::new(form.task.clone());
    assert!(!reopened.use_custom);
    assert!(reopened.request().is_none());
}

#[test]
fn completion_flow_for_an_app_task() {
    let mut form = CompleteTaskForm::new(task(json!({
        "id": "t7", "title": "Expense Approval", "type": "app", "folderId": 3
    })));

    assert_eq!(
        form.available_actions(),
        &[
            CompletionAction::Approve,
            CompletionAction::Reject,
            CompletionAction::Submit
        ]
    );

    // Filling fields without picking an action never submits.
    form.update(complete::Event::DecisionSelected("approved".into()));
    form.update(complete::Event::AmountChanged("99.90".into()));
    assert!(form.payload(submit_time()).is_none());

    form.update(complete::Event::ActionSelected(CompletionAction::Approve));
    form.update(complete::Event::UrgentToggled(true));
    form.update(complete::Event::CommentsChanged("checked against ledger".into()));

    let request = form.payload(submit_time()).unwrap();
    assert_eq!(request.task_id, "t7");
    assert_eq!(request.task_type, TaskType::App);
    assert_eq!(request.action, CompletionAction::Approve);
    assert_eq!(request.folder_id, 3);
    assert_eq!(request.data["decision"], json!("approved"));
    assert_eq!(request.data["amount"], json!(99.9));
    assert_eq!(request.data["urgent"], json!(true));
    assert_eq!(request.data["comments"], json!("checked against ledger"));
    assert_eq!(request.data["completedAt"], json!("2024-06-10T09:30:00+00:00"));
}

#[test]
fn completion_flow_for_an_untyped_task() {
    let mut form = CompleteTaskForm::new(task(json!({"id": "t9", "name": "Callback"})));

    assert_eq!(
        form.available_actions(),
        &[CompletionAction::Complete, CompletionAction::Submit]
    );

    form.update(complete::Event::ActionSelected(CompletionAction::Complete));
    form.update(complete::Event::ResultSelected("success".into()));

    let request = form.payload(submit_time()).unwrap();
    assert_eq!(request.task_type, TaskType::External);
    assert_eq!(request.data["result"], json!("success"));
    // External tasks carry no approval fields.
    assert!(!request.data.contains_key("decision"));
    assert!(!request.data.contains_key("urgent"));
    // Untouched comments stay absent.
    assert!(!request.data.contains_key("comments"));
    assert_eq!(request.folder_id, 1);
}
