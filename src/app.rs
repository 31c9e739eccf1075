use std::collections::HashSet;
use std::time::Duration;

use chrono::Utc;
use iced::widget::{Space, column, container, horizontal_space, mouse_area, row, stack, text};
use iced::{Alignment, Background, Color, Element, Length, Subscription, Task};
use lucide_icons::Icon;

use gantry_client::OrchestratorClient;
use gantry_types::{
    Asset, Process, ResourceFilter, StartProcess, Task as OrchestratorTask, TaskFilter,
};

use crate::appearance::{self, Palette};
use crate::config::GantryConfig;
use crate::dialog::{self, AssignTaskForm, CompleteTaskForm};
use crate::message::Message;
use crate::screen::{Tab, action_center, assets, connect, processes, resources};
use crate::widget;

/// Client-handle lifecycle: constructed once at startup, read-only
/// afterwards except for the explicit retry path.
#[derive(Debug)]
pub enum Session {
    Initializing,
    Ready(OrchestratorClient),
    Failed(String),
}

#[derive(Debug)]
pub struct Gantry {
    config: GantryConfig,
    session: Session,
    tab: Tab,
    auto_refresh_enabled: bool,
    spinner_frame: usize,
    /// Error line for row-button mutations (dialogs carry their own).
    status_message: Option<String>,

    processes: Vec<Process>,
    processes_loading: bool,
    processes_error: Option<String>,
    processes_seq: u64,
    process_filter: ResourceFilter,
    starting_process: bool,

    assets: Vec<Asset>,
    assets_loading: bool,
    assets_error: Option<String>,
    assets_seq: u64,
    asset_filter: ResourceFilter,
    revealed_assets: HashSet<String>,

    tasks: Vec<OrchestratorTask>,
    tasks_loading: bool,
    tasks_error: Option<String>,
    tasks_seq: u64,
    task_filter: TaskFilter,

    assign_form: Option<AssignTaskForm>,
    complete_form: Option<CompleteTaskForm>,
}

impl Gantry {
    pub fn new() -> (Self, Task<Message>) {
        let config = GantryConfig::load();

        let gantry = Self {
            config,
            session: Session::Initializing,
            tab: Tab::default(),
            auto_refresh_enabled: true,
            spinner_frame: 0,
            status_message: None,

            processes: Vec::new(),
            processes_loading: false,
            processes_error: None,
            processes_seq: 0,
            process_filter: ResourceFilter::default(),
            starting_process: false,

            assets: Vec::new(),
            assets_loading: false,
            assets_error: None,
            assets_seq: 0,
            asset_filter: ResourceFilter::default(),
            revealed_assets: HashSet::new(),

            tasks: Vec::new(),
            tasks_loading: false,
            tasks_error: None,
            tasks_seq: 0,
            task_filter: TaskFilter::default(),

            assign_form: None,
            complete_form: None,
        };

        let startup = gantry.initialize_task();
        (gantry, startup)
    }

    fn initialize_task(&self) -> Task<Message> {
        let client_config = self.config.client_config();
        Task::perform(
            async move {
                gantry_client::initialize(client_config)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::SessionReady,
        )
    }

    fn client(&self) -> Option<OrchestratorClient> {
        match &self.session {
            Session::Ready(client) => Some(client.clone()),
            _ => None,
        }
    }

    fn dialog_open(&self) -> bool {
        self.assign_form.is_some() || self.complete_form.is_some()
    }

    fn task_mutation_pending(&self) -> bool {
        self.assign_form.as_ref().is_some_and(|f| f.submitting)
            || self.complete_form.as_ref().is_some_and(|f| f.submitting)
    }

    fn any_loading(&self) -> bool {
        matches!(self.session, Session::Initializing)
            || self.processes_loading
            || self.assets_loading
            || self.tasks_loading
    }

    /// Dispatch a processes fetch tagged with the next sequence number.
    fn fetch_processes(&mut self) -> Task<Message> {
        let Some(client) = self.client() else {
            return Task::none();
        };
        self.processes_loading = true;
        self.processes_error = None;
        self.processes_seq += 1;
        let seq = self.processes_seq;

        Task::perform(
            async move { client.list_processes().await.map_err(|e| e.to_string()) },
            move |result| Message::ProcessesLoaded { seq, result },
        )
    }

    fn fetch_assets(&mut self) -> Task<Message> {
        let Some(client) = self.client() else {
            return Task::none();
        };
        self.assets_loading = true;
        self.assets_error = None;
        self.assets_seq += 1;
        let seq = self.assets_seq;

        Task::perform(
            async move { client.list_assets().await.map_err(|e| e.to_string()) },
            move |result| Message::AssetsLoaded { seq, result },
        )
    }

    fn fetch_tasks(&mut self) -> Task<Message> {
        let Some(client) = self.client() else {
            return Task::none();
        };
        self.tasks_loading = true;
        self.tasks_error = None;
        self.tasks_seq += 1;
        let seq = self.tasks_seq;

        Task::perform(
            async move { client.list_tasks().await.map_err(|e| e.to_string()) },
            move |result| Message::TasksLoaded { seq, result },
        )
    }

    fn fetch_tab(&mut self) -> Task<Message> {
        match self.tab {
            Tab::Resources => Task::batch([self.fetch_processes(), self.fetch_assets()]),
            Tab::ActionCenter => self.fetch_tasks(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ========== Session ==========
            Message::Initialize => {
                self.session = Session::Initializing;
                self.status_message = None;
                self.initialize_task()
            }
            Message::SessionReady(result) => match result {
                Ok(client) => {
                    tracing::info!(authenticated = client.is_authenticated(), "session ready");
                    self.session = Session::Ready(client);
                    self.fetch_tab()
                }
                Err(error) => {
                    tracing::warn!(%error, "client initialization failed");
                    self.session = Session::Failed(error);
                    Task::none()
                }
            },

            // ========== Navigation ==========
            Message::SelectTab(tab) => {
                if self.tab == tab {
                    return Task::none();
                }
                self.tab = tab;
                // Entering a tab resets its transient filter state.
                match tab {
                    Tab::Resources => {
                        self.process_filter = ResourceFilter::default();
                        self.asset_filter = ResourceFilter::default();
                        self.revealed_assets.clear();
                    }
                    Tab::ActionCenter => {
                        self.task_filter = TaskFilter::default();
                    }
                }
                self.fetch_tab()
            }
            Message::ToggleAutoRefresh => {
                self.auto_refresh_enabled = !self.auto_refresh_enabled;
                Task::none()
            }
            Message::AutoRefresh => {
                if self.dialog_open() {
                    Task::none()
                } else {
                    self.fetch_tab()
                }
            }
            Message::SpinnerTick => {
                self.spinner_frame = (self.spinner_frame + 1) % 10;
                Task::none()
            }
            Message::DismissStatus => {
                self.status_message = None;
                Task::none()
            }

            // ========== Processes ==========
            Message::RefreshProcesses => self.fetch_processes(),
            Message::ProcessesLoaded { seq, result } => {
                if seq != self.processes_seq {
                    // A newer fetch is in flight; drop the stale result.
                    return Task::none();
                }
                self.processes_loading = false;
                match result {
                    Ok(processes) => self.processes = processes,
                    Err(error) => self.processes_error = Some(error),
                }
                Task::none()
            }
            Message::ProcessFilterChanged(filter) => {
                self.process_filter = filter;
                Task::none()
            }
            Message::StartProcess { key, folder_id } => {
                let Some(client) = self.client() else {
                    return Task::none();
                };
                self.starting_process = true;
                let request = StartProcess {
                    process_key: key,
                    folder_id,
                };
                Task::perform(
                    async move { client.start_process(&request).await.map_err(|e| e.to_string()) },
                    Message::ProcessStarted,
                )
            }
            Message::ProcessStarted(result) => {
                self.starting_process = false;
                match result {
                    Ok(()) => self.fetch_processes(),
                    Err(error) => {
                        tracing::warn!(%error, "start process failed");
                        self.status_message = Some(format!("Failed to start process: {error}"));
                        Task::none()
                    }
                }
            }

            // ========== Assets ==========
            Message::RefreshAssets => self.fetch_assets(),
            Message::AssetsLoaded { seq, result } => {
                if seq != self.assets_seq {
                    return Task::none();
                }
                self.assets_loading = false;
                match result {
                    Ok(assets) => self.assets = assets,
                    Err(error) => self.assets_error = Some(error),
                }
                Task::none()
            }
            Message::AssetFilterChanged(filter) => {
                self.asset_filter = filter;
                Task::none()
            }
            Message::ToggleAssetReveal(asset_id) => {
                if !self.revealed_assets.remove(&asset_id) {
                    self.revealed_assets.insert(asset_id);
                }
                Task::none()
            }

            // ========== Tasks ==========
            Message::RefreshTasks => self.fetch_tasks(),
            Message::TasksLoaded { seq, result } => {
                if seq != self.tasks_seq {
                    return Task::none();
                }
                self.tasks_loading = false;
                match result {
                    Ok(tasks) => self.tasks = tasks,
                    Err(error) => self.tasks_error = Some(error),
                }
                Task::none()
            }
            Message::TaskFilterChanged(filter) => {
                self.task_filter = filter;
                Task::none()
            }

            // ========== Assignment dialog ==========
            Message::OpenAssignDialog(task) => {
                self.assign_form = Some(AssignTaskForm::new(task));
                Task::none()
            }
            Message::AssignDialog(event) => {
                if let Some(form) = &mut self.assign_form {
                    form.update(event);
                }
                Task::none()
            }
            Message::SubmitAssign => {
                let Some(client) = self.client() else {
                    return Task::none();
                };
                if let Some(form) = &mut self.assign_form {
                    match form.request() {
                        Some(request) => {
                            form.submitting = true;
                            form.error = None;
                            return Task::perform(
                                async move {
                                    client.assign_task(&request).await.map_err(|e| e.to_string())
                                },
                                Message::TaskAssigned,
                            );
                        }
                        None => {
                            form.error = Some("Enter a user name or email".to_string());
                        }
                    }
                }
                Task::none()
            }
            Message::CloseAssignDialog => {
                self.assign_form = None;
                Task::none()
            }
            Message::TaskAssigned(result) => match result {
                Ok(()) => {
                    self.assign_form = None;
                    self.fetch_tasks()
                }
                Err(error) => {
                    // Keep the dialog open so the input is not lost.
                    if let Some(form) = &mut self.assign_form {
                        form.submitting = false;
                        form.error = Some(error);
                    }
                    Task::none()
                }
            },

            // ========== Completion dialog ==========
            Message::OpenCompleteDialog(task) => {
                self.complete_form = Some(CompleteTaskForm::new(task));
                Task::none()
            }
            Message::CompleteDialog(event) => {
                if let Some(form) = &mut self.complete_form {
                    form.update(event);
                }
                Task::none()
            }
            Message::SubmitComplete => {
                let Some(client) = self.client() else {
                    return Task::none();
                };
                if let Some(form) = &mut self.complete_form {
                    match form.payload(Utc::now()) {
                        Some(request) => {
                            form.submitting = true;
                            form.error = None;
                            return Task::perform(
                                async move {
                                    client.complete_task(&request).await.map_err(|e| e.to_string())
                                },
                                Message::TaskCompleted,
                            );
                        }
                        None => {
                            form.error = Some("Select an action first".to_string());
                        }
                    }
                }
                Task::none()
            }
            Message::CloseCompleteDialog => {
                self.complete_form = None;
                Task::none()
            }
            Message::TaskCompleted(result) => match result {
                Ok(()) => {
                    self.complete_form = None;
                    self.fetch_tasks()
                }
                Err(error) => {
                    if let Some(form) = &mut self.complete_form {
                        form.submitting = false;
                        form.error = Some(error);
                    }
                    Task::none()
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = appearance::palette();

        let content: Element<'_, Message> = match &self.session {
            Session::Initializing => connect::view(
                connect::ConnectState::Initializing {
                    spinner_frame: self.spinner_frame,
                },
                palette,
            ),
            Session::Failed(error) => connect::view(
                connect::ConnectState::Failed {
                    error: error.as_str(),
                },
                palette,
            ),
            Session::Ready(_) => self.view_dashboard(palette),
        };

        let bg = palette.background;
        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(bg)),
                ..Default::default()
            });

        if let Some(form) = &self.assign_form {
            let overlay = dialog_overlay(
                dialog::assign::view(form, &self.config.assignees, palette),
                Message::CloseAssignDialog,
            );
            return stack![base, overlay].into();
        }

        if let Some(form) = &self.complete_form {
            let overlay = dialog_overlay(
                dialog::complete::view(form, palette),
                Message::CloseCompleteDialog,
            );
            return stack![base, overlay].into();
        }

        base.into()
    }

    fn view_dashboard<'a>(&'a self, palette: &'a Palette) -> Element<'a, Message> {
        let heading = column![
            text("Orchestrator Control Center").size(26).color(palette.text),
            text("Centralized management of automation resources and tasks")
                .size(13)
                .color(palette.text_secondary),
        ]
        .spacing(4);

        let auto_label = if self.auto_refresh_enabled {
            "Auto-refresh on"
        } else {
            "Auto-refresh off"
        };
        let header = row![
            heading,
            horizontal_space(),
            widget::action_button(auto_label, Message::ToggleAutoRefresh, palette),
        ]
        .align_y(Alignment::Center);

        let tabs = row![
            widget::tab_button(
                Tab::Resources.label(),
                self.tab == Tab::Resources,
                Message::SelectTab(Tab::Resources),
                palette,
            ),
            Space::with_width(8),
            widget::tab_button(
                Tab::ActionCenter.label(),
                self.tab == Tab::ActionCenter,
                Message::SelectTab(Tab::ActionCenter),
                palette,
            ),
        ];

        let status_line: Element<'a, Message> = match &self.status_message {
            Some(message) => row![
                text(message).size(12).color(palette.danger_light),
                Space::with_width(8),
                widget::icon_button(Icon::X, Message::DismissStatus, palette),
            ]
            .align_y(Alignment::Center)
            .into(),
            None => Space::with_height(0).into(),
        };

        let content = match self.tab {
            Tab::Resources => resources::view(
                resources::ResourcesScreenState {
                    processes: processes::ProcessesSectionState {
                        processes: &self.processes,
                        filter: &self.process_filter,
                        loading: self.processes_loading,
                        error: self.processes_error.as_deref(),
                        starting: self.starting_process,
                        spinner_frame: self.spinner_frame,
                    },
                    assets: assets::AssetsSectionState {
                        assets: &self.assets,
                        filter: &self.asset_filter,
                        revealed: &self.revealed_assets,
                        loading: self.assets_loading,
                        error: self.assets_error.as_deref(),
                        spinner_frame: self.spinner_frame,
                    },
                },
                palette,
            ),
            Tab::ActionCenter => action_center::view(
                action_center::ActionCenterState {
                    tasks: &self.tasks,
                    filter: &self.task_filter,
                    loading: self.tasks_loading,
                    error: self.tasks_error.as_deref(),
                    mutating: self.task_mutation_pending(),
                    spinner_frame: self.spinner_frame,
                },
                palette,
            ),
        };

        column![
            header,
            Space::with_height(16),
            tabs,
            Space::with_height(8),
            status_line,
            Space::with_height(8),
            content,
        ]
        .padding(28)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.auto_refresh_enabled
            && matches!(self.session, Session::Ready(_))
            && !self.dialog_open()
        {
            subscriptions
                .push(iced::time::every(Duration::from_secs(30)).map(|_| Message::AutoRefresh));
        }

        if self.any_loading() {
            subscriptions
                .push(iced::time::every(Duration::from_millis(100)).map(|_| Message::SpinnerTick));
        }

        if subscriptions.is_empty() {
            Subscription::none()
        } else {
            Subscription::batch(subscriptions)
        }
    }
}

/// Backdrop that closes the dialog, with the dialog card centered on top.
fn dialog_overlay<'a>(
    dialog: Element<'a, Message>,
    close: Message,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                ..Default::default()
            }),
    )
    .on_press(close);

    let centered = container(dialog)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    stack![backdrop, centered].into()
}
