use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::egui_app::actions::{ActionQueue, LockerAction};
use crate::egui_app::activity::{ActivityCategory, ActivityLog};
use crate::egui_app::api::LockerApiClient;
use crate::egui_app::clipboard::Clipboard;
use crate::egui_app::controller::SyncController;
use crate::egui_app::edit::LockerOverrides;
use crate::egui_app::export::ExportOutcome;
use crate::egui_app::map::MapPlan;
use crate::egui_app::Config;
use crate::shared::error::{ErrorKind, SyncError};
use crate::shared::locker::Locker;

/// How long a status bar message stays visible
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_EXPORT_PATH: &str = "lockers.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Blocking notification shown as a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Validation problems are warnings; everything else is an error
    pub fn from_error(error: &SyncError) -> Self {
        match error.kind() {
            ErrorKind::Validation => Self::new(NoticeKind::Warning, "Error", error.to_string()),
            ErrorKind::Transport | ErrorKind::Business => {
                Self::new(NoticeKind::Error, "Error", error.to_string())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// Edit surface opened from the Detail button
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Record as it was when editing began
    pub snapshot: Locker,
    pub form: LockerOverrides,
}

impl EditSession {
    pub fn new(snapshot: Locker) -> Self {
        let form = LockerOverrides::prefilled(&snapshot);
        Self { snapshot, form }
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub controller: SyncController,
    pub activity: ActivityLog,
    pub actions: ActionQueue,
    pub delete_input: String,
    pub export_path: String,
    pub editor: Option<EditSession>,
    pub notices: Vec<Notice>,
    pub status: Option<StatusMessage>,
    pub last_map: Option<PathBuf>,
    pub show_help: bool,
    pub show_activity: bool,
    pub activity_filter: Option<ActivityCategory>,
}

impl AppState {
    /// Build the state and queue the initial refresh.
    pub fn new(config: Config, clipboard: Box<dyn Clipboard>) -> std::io::Result<Self> {
        let activity = ActivityLog::new(config.log_capacity());
        activity.info(
            ActivityCategory::UI,
            format!("Locker desk started against {}", config.server_url()),
        );

        let api = LockerApiClient::new(config.clone())?;
        let controller = SyncController::new(api, activity.clone(), clipboard);

        let mut actions = ActionQueue::new();
        actions.push(LockerAction::Refresh);

        Ok(Self {
            config,
            controller,
            activity,
            actions,
            delete_input: String::new(),
            export_path: DEFAULT_EXPORT_PATH.to_string(),
            editor: None,
            notices: Vec::new(),
            status: None,
            last_map: None,
            show_help: true,
            show_activity: false,
            activity_filter: None,
        })
    }

    pub fn push(&mut self, action: LockerAction) {
        self.actions.push(action);
    }

    /// Run every queued action in click order. Returns whether any ran.
    pub fn process_actions(&mut self) -> bool {
        let mut processed = false;
        while let Some(action) = self.actions.pop() {
            processed = true;
            if action.hits_network() {
                self.activity
                    .debug(ActivityCategory::Network, format!("Dispatching {:?}", action));
            }
            self.dispatch(action);
        }
        processed
    }

    pub fn dispatch(&mut self, action: LockerAction) {
        match action {
            LockerAction::Refresh => {
                if let Err(e) = self.controller.refresh() {
                    self.notify_error(&e);
                } else {
                    self.loaded_status();
                }
            }
            LockerAction::Create => match self.controller.create() {
                Ok(synced) => {
                    self.after_refresh(synced.refresh);
                    self.set_status("Locker added successfully");
                }
                Err(e) => self.notify_error(&e),
            },
            LockerAction::Delete => match self.controller.delete(&mut self.delete_input) {
                Ok(synced) => {
                    self.after_refresh(synced.refresh);
                    self.set_status("Locker deleted successfully");
                }
                Err(e) => self.notify_error(&e),
            },
            LockerAction::Select(locker_id) => {
                if self.controller.select(&locker_id) {
                    self.set_status(format!("Selected {} for copying", locker_id));
                }
            }
            LockerAction::CopySelected => match self.controller.copy_selected() {
                Some(locker_id) => self.set_status(format!("Copied {} to clipboard", locker_id)),
                None => self.set_status("No locker selected"),
            },
            LockerAction::PasteIntoDelete => match self.controller.paste() {
                Some(text) => {
                    self.set_status(format!("Pasted {} into delete field", text));
                    self.delete_input = text;
                }
                None => self.set_status("Clipboard is empty"),
            },
            LockerAction::ShowDetail(locker_id) => {
                if let Some(locker) = self.controller.store().get(&locker_id) {
                    self.editor = Some(EditSession::new(locker.clone()));
                }
            }
            LockerAction::CloseDetail => self.editor = None,
            LockerAction::SubmitEdit => self.submit_edit(),
            LockerAction::Command { locker_id, command } => {
                match self.controller.send_command(&locker_id, command) {
                    Ok(synced) => {
                        self.notices.push(Notice::new(
                            NoticeKind::Success,
                            "Success",
                            synced.outcome.summary(),
                        ));
                        self.set_status(format!(
                            "Command '{}' sent for locker {}",
                            command, locker_id
                        ));
                        self.after_refresh(synced.refresh);
                    }
                    Err(e) => self.notify_error(&e),
                }
            }
            LockerAction::ShowMap(locker_id) => self.show_map(&locker_id),
            LockerAction::ExportCsv => {
                let path = PathBuf::from(self.export_path.trim());
                match self.controller.export_csv(&path) {
                    Ok(ExportOutcome::Written { .. }) => self.notices.push(Notice::new(
                        NoticeKind::Success,
                        "Success",
                        "Exported to CSV successfully",
                    )),
                    Ok(ExportOutcome::NothingToExport) => self.notices.push(Notice::new(
                        NoticeKind::Info,
                        "Info",
                        "No data to export",
                    )),
                    Err(e) => self.notices.push(Notice::new(
                        NoticeKind::Error,
                        "Error",
                        format!("Failed to export to CSV: {}", e),
                    )),
                }
            }
            LockerAction::DismissNotice => {
                if !self.notices.is_empty() {
                    self.notices.remove(0);
                }
            }
            LockerAction::ToggleHelp => self.show_help = !self.show_help,
            LockerAction::ToggleActivity => self.show_activity = !self.show_activity,
        }
    }

    /// Notice currently shown, oldest first
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.first()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: Instant::now() + STATUS_TIMEOUT,
        });
    }

    /// Status text if it has not expired yet
    pub fn status_text(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|status| status.expires_at > Instant::now())
            .map(|status| status.text.as_str())
    }

    fn submit_edit(&mut self) {
        let Some(session) = self.editor.as_ref() else {
            return;
        };
        match self.controller.update(&session.snapshot, &session.form) {
            Ok(()) => {
                self.editor = None;
                self.notices.push(Notice::new(
                    NoticeKind::Success,
                    "Success",
                    "Locker updated successfully",
                ));
                self.dispatch(LockerAction::Refresh);
            }
            Err(e) => self.notify_error(&e),
        }
    }

    fn show_map(&mut self, locker_id: &str) {
        match self.controller.map_for(locker_id) {
            MapPlan::NoMappableData => self.notices.push(Notice::new(
                NoticeKind::Warning,
                "Warning",
                "No valid location data available for the selected locker",
            )),
            MapPlan::Ready(view) => match view.save(self.config.map_output()) {
                Ok(path) => {
                    self.activity.info(
                        ActivityCategory::Map,
                        format!("Map for {} saved to {}", locker_id, path.display()),
                    );
                    self.set_status(format!("Map for {} ready", locker_id));
                    self.last_map = Some(path);
                }
                Err(e) => {
                    self.activity.error(ActivityCategory::Map, e.to_string());
                    self.notices.push(Notice::new(
                        NoticeKind::Error,
                        "Error",
                        format!("Failed to show map: {}", e),
                    ));
                }
            },
        }
    }

    fn after_refresh(&mut self, refresh: Result<usize, SyncError>) {
        match refresh {
            Ok(_) => self.loaded_status(),
            Err(e) => self.notify_error(&e),
        }
    }

    fn loaded_status(&mut self) {
        let count = self.controller.store().len();
        self.set_status(format!("Loaded {} lockers", count));
    }

    fn notify_error(&mut self, error: &SyncError) {
        self.notices.push(Notice::from_error(error));
    }
}
