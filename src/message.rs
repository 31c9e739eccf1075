use gantry_client::OrchestratorClient;
use gantry_types::{Asset, Process, ResourceFilter, Task, TaskFilter};

use crate::dialog::{assign, complete};
use crate::screen::Tab;

/// Top-level application message enum.
///
/// All user interactions and async operation results flow through this
/// enum. List completions carry the fetch sequence number captured at
/// dispatch; stale results are dropped in `update`.
#[derive(Debug, Clone)]
pub enum Message {
    // ========== Session ==========
    /// (Re-)initialize the orchestrator client
    Initialize,
    /// Client initialization finished
    SessionReady(Result<OrchestratorClient, String>),

    // ========== Navigation ==========
    /// Switch to a tab (resets its filter state and refetches)
    SelectTab(Tab),
    /// Toggle the periodic refresh of the active tab
    ToggleAutoRefresh,
    /// Periodic auto-refresh tick
    AutoRefresh,
    /// Animation tick for spinners
    SpinnerTick,
    /// Clear the status line
    DismissStatus,

    // ========== Processes ==========
    RefreshProcesses,
    ProcessesLoaded {
        seq: u64,
        result: Result<Vec<Process>, String>,
    },
    ProcessFilterChanged(ResourceFilter),
    /// Start a process by release key in a folder
    StartProcess { key: String, folder_id: i64 },
    ProcessStarted(Result<(), String>),

    // ========== Assets ==========
    RefreshAssets,
    AssetsLoaded {
        seq: u64,
        result: Result<Vec<Asset>, String>,
    },
    AssetFilterChanged(ResourceFilter),
    /// Show or hide a sensitive asset value
    ToggleAssetReveal(String),

    // ========== Tasks ==========
    RefreshTasks,
    TasksLoaded {
        seq: u64,
        result: Result<Vec<Task>, String>,
    },
    TaskFilterChanged(TaskFilter),

    // ========== Assignment dialog ==========
    OpenAssignDialog(Task),
    AssignDialog(assign::Event),
    SubmitAssign,
    CloseAssignDialog,
    TaskAssigned(Result<(), String>),

    // ========== Completion dialog ==========
    OpenCompleteDialog(Task),
    CompleteDialog(complete::Event),
    SubmitComplete,
    CloseCompleteDialog,
    TaskCompleted(Result<(), String>),
}
