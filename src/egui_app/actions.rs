//! User intents forwarded from the views.
//!
//! Views never call the controller directly. Each click produces a
//! [`LockerAction`] value, already bound to its locker id, and pushes it onto
//! the [`ActionQueue`]. The state drains the queue once per frame, in click
//! order, one request/response cycle at a time.

use std::collections::VecDeque;

use crate::shared::locker::LockerCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockerAction {
    Refresh,
    Create,
    /// Delete the id currently typed in the delete field
    Delete,
    Select(String),
    CopySelected,
    PasteIntoDelete,
    ShowDetail(String),
    CloseDetail,
    SubmitEdit,
    Command {
        locker_id: String,
        command: LockerCommand,
    },
    ShowMap(String),
    ExportCsv,
    DismissNotice,
    ToggleHelp,
    ToggleActivity,
}

impl LockerAction {
    pub fn lock(locker_id: impl Into<String>) -> Self {
        Self::Command {
            locker_id: locker_id.into(),
            command: LockerCommand::Lock,
        }
    }

    pub fn unlock(locker_id: impl Into<String>) -> Self {
        Self::Command {
            locker_id: locker_id.into(),
            command: LockerCommand::Unlock,
        }
    }

    /// Whether handling this action issues a request to the locker service
    pub fn hits_network(&self) -> bool {
        matches!(
            self,
            LockerAction::Refresh
                | LockerAction::Create
                | LockerAction::Delete
                | LockerAction::SubmitEdit
                | LockerAction::Command { .. }
        )
    }
}

/// FIFO of pending actions
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<LockerAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: LockerAction) {
        self.pending.push_back(action);
    }

    pub fn pop(&mut self) -> Option<LockerAction> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
