//! Sync Controller
//!
//! Orchestrates every request/response cycle against the locker service and
//! keeps the [`LockerStore`] consistent with it.
//!
//! # Rules
//!
//! - The store is only ever replaced wholesale by a successful refresh.
//! - A successful create, delete or command is followed by a refresh. Update
//!   leaves the refresh to the caller, which also owns the edit surface.
//! - A failed operation leaves the store and the selection as they were.
//! - Nothing is retried and nothing runs on a timer.
//!
//! A refresh that fails right after a successful mutation does not undo the
//! mutation's success; it is reported alongside it in [`Synced::refresh`].

use std::path::Path;

use crate::egui_app::activity::{ActivityCategory, ActivityLog};
use crate::egui_app::api::LockerApiClient;
use crate::egui_app::clipboard::Clipboard;
use crate::egui_app::edit::LockerOverrides;
use crate::egui_app::export::{self, ExportError, ExportOutcome};
use crate::egui_app::map::{self, MapPlan};
use crate::egui_app::store::LockerStore;
use crate::shared::error::{ErrorKind, Operation, SyncError};
use crate::shared::locker::{Locker, LockerCommand};

/// Outcome of a mutation plus the follow-up refresh
#[derive(Debug, Clone, PartialEq)]
pub struct Synced<T> {
    pub outcome: T,
    /// Number of lockers loaded, or why the follow-up refresh failed
    pub refresh: Result<usize, SyncError>,
}

/// What the service said about a lock/unlock command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReceipt {
    pub locker_id: String,
    pub command: LockerCommand,
    pub message: String,
    /// `locker.isRunCommand` from the response
    pub will_execute: bool,
}

impl CommandReceipt {
    pub fn execution_status(&self) -> &'static str {
        if self.will_execute {
            "The command will be executed."
        } else {
            "The command will not be executed."
        }
    }

    /// Service message followed by the execution status
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.message, self.execution_status())
    }
}

pub struct SyncController {
    api: LockerApiClient,
    store: LockerStore,
    selected_locker_id: Option<String>,
    log: ActivityLog,
    clipboard: Box<dyn Clipboard>,
}

impl SyncController {
    pub fn new(api: LockerApiClient, log: ActivityLog, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            api,
            store: LockerStore::new(),
            selected_locker_id: None,
            log,
            clipboard,
        }
    }

    pub fn store(&self) -> &LockerStore {
        &self.store
    }

    pub fn selected_locker_id(&self) -> Option<&str> {
        self.selected_locker_id.as_deref()
    }

    /// Full refresh: replace the store with the service's current listing.
    pub fn refresh(&mut self) -> Result<usize, SyncError> {
        let lockers = self.api.list_lockers().map_err(|e| self.report(e))?;
        let count = lockers.len();
        self.store.replace_all(lockers);
        self.selected_locker_id = None;
        self.log
            .info(ActivityCategory::Sync, format!("Loaded {} lockers", count));
        Ok(count)
    }

    /// Register a new locker; the service assigns every field.
    pub fn create(&mut self) -> Result<Synced<()>, SyncError> {
        self.api.register_locker().map_err(|e| self.report(e))?;
        self.log.info(ActivityCategory::Sync, "Locker added");
        Ok(self.then_refresh(()))
    }

    /// Delete the locker named in `locker_id_field`, clearing the field on
    /// success. An empty field fails without touching the network.
    pub fn delete(&mut self, locker_id_field: &mut String) -> Result<Synced<()>, SyncError> {
        let locker_id = locker_id_field.trim().to_string();
        if locker_id.is_empty() {
            return Err(self.report(SyncError::validation(
                Operation::DeleteLocker,
                "lockerId",
                "Please paste a locker ID",
            )));
        }

        self.api
            .delete_locker(&locker_id)
            .map_err(|e| self.report(e))?;
        self.log
            .info(ActivityCategory::Sync, format!("Locker {} deleted", locker_id));
        locker_id_field.clear();
        Ok(self.then_refresh(()))
    }

    /// Submit an edit started from `snapshot`. Does not refresh.
    pub fn update(&self, snapshot: &Locker, overrides: &LockerOverrides) -> Result<(), SyncError> {
        let request = overrides.to_request(snapshot).map_err(|e| self.report(e))?;
        self.api
            .update_locker(&request)
            .map_err(|e| self.report(e))?;
        self.log.info(
            ActivityCategory::Sync,
            format!("Locker {} updated", request.locker_id),
        );
        Ok(())
    }

    pub fn send_command(
        &mut self,
        locker_id: &str,
        command: LockerCommand,
    ) -> Result<Synced<CommandReceipt>, SyncError> {
        let reply = self
            .api
            .send_command(locker_id, command)
            .map_err(|e| self.report(e))?;

        let receipt = CommandReceipt {
            locker_id: locker_id.to_string(),
            command,
            message: reply.message.unwrap_or_default(),
            will_execute: reply.locker.map(|l| l.is_run_command).unwrap_or(false),
        };
        self.log.info(
            ActivityCategory::Sync,
            format!(
                "Command '{}' sent for locker {} ({})",
                command,
                locker_id,
                receipt.execution_status()
            ),
        );
        Ok(self.then_refresh(receipt))
    }

    /// Select a locker for copying. Unknown ids are ignored.
    pub fn select(&mut self, locker_id: &str) -> bool {
        if self.store.get(locker_id).is_none() {
            return false;
        }
        self.selected_locker_id = Some(locker_id.to_string());
        self.log.debug(
            ActivityCategory::UI,
            format!("Selected locker ID {} for copying", locker_id),
        );
        true
    }

    /// Copy the selected id to the clipboard
    pub fn copy_selected(&mut self) -> Option<String> {
        let Some(locker_id) = self.selected_locker_id.clone() else {
            self.log
                .warn(ActivityCategory::Clipboard, "No locker selected for copy");
            return None;
        };
        self.clipboard.set_text(&locker_id);
        self.log.debug(
            ActivityCategory::Clipboard,
            format!("Copied locker ID {} to clipboard", locker_id),
        );
        Some(locker_id)
    }

    /// Trimmed clipboard text, or `None` when the clipboard is empty
    pub fn paste(&self) -> Option<String> {
        let text = self.clipboard.text().trim().to_string();
        if text.is_empty() {
            self.log.warn(ActivityCategory::Clipboard, "Clipboard is empty");
            return None;
        }
        self.log
            .debug(ActivityCategory::Clipboard, format!("Pasted {}", text));
        Some(text)
    }

    /// Plan a map for one locker from the store
    pub fn map_for(&self, locker_id: &str) -> MapPlan {
        let plan = map::plan_map(self.store.get(locker_id));
        if plan == MapPlan::NoMappableData {
            self.log.warn(
                ActivityCategory::Map,
                format!("No valid coordinates for locker {}", locker_id),
            );
        }
        plan
    }

    /// Dump the store to a CSV file
    pub fn export_csv(&self, path: &Path) -> Result<ExportOutcome, ExportError> {
        let outcome = export::export_to_path(self.store.as_slice(), path);
        match &outcome {
            Ok(ExportOutcome::Written { path, rows }) => self.log.info(
                ActivityCategory::Export,
                format!("Exported {} lockers to {}", rows, path.display()),
            ),
            Ok(ExportOutcome::NothingToExport) => {
                self.log.info(ActivityCategory::Export, "No data to export")
            }
            Err(e) => self
                .log
                .error(ActivityCategory::Export, format!("Failed to export to CSV: {}", e)),
        }
        outcome
    }

    fn then_refresh<T>(&mut self, outcome: T) -> Synced<T> {
        Synced {
            outcome,
            refresh: self.refresh(),
        }
    }

    /// Log an error with its kind and hand it back
    fn report(&self, error: SyncError) -> SyncError {
        let category = match error.kind() {
            ErrorKind::Transport => ActivityCategory::Network,
            ErrorKind::Business | ErrorKind::Validation => ActivityCategory::Sync,
        };
        self.log
            .error(category, format!("{} error: {}", error.kind(), error));
        error
    }
}
