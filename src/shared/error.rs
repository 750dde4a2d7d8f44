//! Shared Error Types
//!
//! This module defines the error taxonomy of the locker synchronization
//! workflow. Every failed operation maps to exactly one kind:
//!
//! - `Transport` - network unreachable, non-2xx status, undecodable body
//! - `Business` - the service answered `success: false` with a message
//! - `Validation` - rejected locally before any request was made
//!
//! All three are terminal for the operation that raised them. None is retried.
//!
//! # Usage
//!
//! ```rust
//! use lockerdesk::shared::error::{ErrorKind, Operation, SyncError};
//!
//! let error = SyncError::business(Operation::AddLocker, "quota exceeded");
//! assert_eq!(error.kind(), ErrorKind::Business);
//! assert_eq!(error.to_string(), "Failed to add locker: quota exceeded");
//! ```
use std::fmt;

use thiserror::Error;

use crate::shared::locker::LockerCommand;

/// Operation attempted when an error was raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    FetchLockers,
    AddLocker,
    DeleteLocker,
    UpdateLocker,
    Command {
        command: LockerCommand,
        locker_id: String,
    },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::FetchLockers => write!(f, "fetch lockers"),
            Operation::AddLocker => write!(f, "add locker"),
            Operation::DeleteLocker => write!(f, "delete locker"),
            Operation::UpdateLocker => write!(f, "update locker"),
            Operation::Command { command, locker_id } => {
                write!(f, "{} locker {}", command, locker_id)
            }
        }
    }
}

/// Discriminant of [`SyncError`], used as a structured log field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Business,
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Business => write!(f, "business"),
            ErrorKind::Validation => write!(f, "validation"),
        }
    }
}

/// Failure of a synchronization operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyncError {
    #[error("Failed to {operation}: {message}")]
    Transport {
        operation: Operation,
        /// HTTP status, when the server answered at all
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to {operation}: {message}")]
    Business { operation: Operation, message: String },

    #[error("Failed to {operation}: {message}")]
    Validation {
        operation: Operation,
        /// Form field or argument that was rejected
        field: String,
        message: String,
    },
}

impl SyncError {
    pub fn transport(operation: Operation, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            status,
            message: message.into(),
        }
    }

    pub fn business(operation: Operation, message: impl Into<String>) -> Self {
        Self::Business {
            operation,
            message: message.into(),
        }
    }

    pub fn validation(
        operation: Operation,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            operation,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::Transport { .. } => ErrorKind::Transport,
            SyncError::Business { .. } => ErrorKind::Business,
            SyncError::Validation { .. } => ErrorKind::Validation,
        }
    }

    pub fn operation(&self) -> &Operation {
        match self {
            SyncError::Transport { operation, .. }
            | SyncError::Business { operation, .. }
            | SyncError::Validation { operation, .. } => operation,
        }
    }

    /// Underlying message without the operation prefix
    pub fn message(&self) -> &str {
        match self {
            SyncError::Transport { message, .. }
            | SyncError::Business { message, .. }
            | SyncError::Validation { message, .. } => message,
        }
    }
}
