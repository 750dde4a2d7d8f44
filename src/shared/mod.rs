//! Shared Module
//!
//! This module contains the types that describe the locker service contract
//! independently of any user interface: the locker record, request and
//! response bodies, the error taxonomy, and application configuration.

/// Locker record and wire types
pub mod locker;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use locker::{Locker, LockerCommand, UpdateLockerRequest};
pub use error::{ErrorKind, Operation, SyncError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
