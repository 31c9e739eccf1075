use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DEFAULT_FOLDER_ID;

/// Human work item sourced from the platform's action queue.
///
/// The API is inconsistent about naming (`title` vs `name`, `assignee` vs
/// `assignedTo`); both spellings are kept on the wire type and the
/// accessors below resolve them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, rename = "type")]
    pub task_type: Option<String>,
    #[serde(default)]
    pub folder_id: Option<i64>,
}

impl Task {
    pub fn display_title(&self) -> String {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Task {}", self.id))
    }

    /// Status used for filtering and badges when the API omits one.
    pub fn effective_status(&self) -> &str {
        self.status.as_deref().unwrap_or("Pending")
    }

    pub fn effective_priority(&self) -> &str {
        self.priority.as_deref().unwrap_or("Medium")
    }

    /// First non-empty of `assignee` / `assignedTo`; empty means unassigned.
    pub fn effective_assignee(&self) -> &str {
        self.assignee
            .as_deref()
            .filter(|a| !a.is_empty())
            .or(self.assigned_to.as_deref())
            .unwrap_or("")
    }

    pub fn is_assigned(&self) -> bool {
        !self.effective_assignee().is_empty()
    }

    pub fn status_enum(&self) -> TaskStatus {
        self.effective_status().parse().unwrap_or_default()
    }

    pub fn priority_enum(&self) -> TaskPriority {
        self.effective_priority().parse().unwrap_or_default()
    }

    pub fn type_enum(&self) -> TaskType {
        self.task_type
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    pub fn folder_id_or_default(&self) -> i64 {
        self.folder_id.unwrap_or(DEFAULT_FOLDER_ID)
    }

    pub fn is_completed(&self) -> bool {
        self.status_enum() == TaskStatus::Completed
    }
}

/// Task lifecycle status. Transitions are driven entirely by the platform;
/// the client only requests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" | "unassigned" => Ok(TaskStatus::Pending),
            "in_progress" | "in-progress" | "in progress" | "inprogress" => {
                Ok(TaskStatus::InProgress)
            }
            "completed" | "complete" | "done" => Ok(TaskStatus::Completed),
            _ => Err(()),
        }
    }
}

/// Task priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" | "normal" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            "critical" => Ok(TaskPriority::Critical),
            _ => Err(()),
        }
    }
}

/// Task kind, which determines the completion actions and field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskType {
    App,
    Form,
    #[default]
    External,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::App => "App",
            TaskType::Form => "Form",
            TaskType::External => "External",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "app" => Ok(TaskType::App),
            "form" => Ok(TaskType::Form),
            "external" => Ok(TaskType::External),
            _ => Err(()),
        }
    }
}

/// Actions a task can be completed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionAction {
    Approve,
    Reject,
    Submit,
    Complete,
}

impl CompletionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionAction::Approve => "approve",
            CompletionAction::Reject => "reject",
            CompletionAction::Submit => "submit",
            CompletionAction::Complete => "complete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletionAction::Approve => "Approve",
            CompletionAction::Reject => "Reject",
            CompletionAction::Submit => "Submit",
            CompletionAction::Complete => "Complete",
        }
    }

    /// The action set offered for a task type: app and form tasks carry an
    /// approval flow, everything else completes directly.
    pub fn available_for(task_type: TaskType) -> &'static [CompletionAction] {
        match task_type {
            TaskType::App | TaskType::Form => &[
                CompletionAction::Approve,
                CompletionAction::Reject,
                CompletionAction::Submit,
            ],
            TaskType::External => &[CompletionAction::Complete, CompletionAction::Submit],
        }
    }
}

impl std::fmt::Display for CompletionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Assignment request sent to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTask {
    pub task_id: String,
    pub user_name_or_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Completion request sent to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTask {
    pub task_id: String,
    pub task_type: TaskType,
    pub action: CompletionAction,
    /// Collected dynamic field values plus comments and timestamp.
    pub data: Map<String, Value>,
    pub folder_id: i64,
}

/// Job start request keyed by release key and folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartProcess {
    pub process_key: String,
    pub folder_id: i64,
}
