//! egui Native Desktop App Module
//!
//! This module provides the locker management desktop client: the sync
//! workflow against the locker service and the egui shell that renders it.
//!
//! # Architecture
//!
//! - **`config`** - Configuration management (server URL, map output path)
//! - **`api`** - Blocking HTTP client for the locker service
//! - **`store`** - In-memory mirror of the last successful listing
//! - **`controller`** - Sync controller: refresh, create, delete, update, commands
//! - **`edit`** - Edit form and update payload assembly
//! - **`actions`** - User intents and the click-order action queue
//! - **`map`** - Mapping surface adapter and Leaflet page rendering
//! - **`export`** - CSV export of the store
//! - **`clipboard`** - Injectable clipboard handles
//! - **`activity`** - Operator activity log
//! - **`state`** - Application state and action dispatch
//! - **`views`** / **`theme`** - egui rendering
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs         - Module exports and documentation
//! ├── main.rs        - Main application entry point
//! ├── config.rs      - Configuration management
//! ├── api.rs         - Locker service client
//! ├── controller.rs  - Sync controller
//! ├── state/         - AppState and dispatch
//! └── views/         - Table, toolbar, detail window, panels
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin locker_app
//! ```

pub mod config;
pub mod api;
pub mod store;
pub mod controller;
pub mod edit;
pub mod actions;
pub mod map;
pub mod export;
pub mod clipboard;
pub mod activity;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use api::LockerApiClient;
pub use store::LockerStore;
pub use controller::{CommandReceipt, SyncController, Synced};
pub use actions::{ActionQueue, LockerAction};
pub use clipboard::{Clipboard, EguiClipboard, MemoryClipboard};
pub use activity::{ActivityCategory, ActivityLevel, ActivityLog};
pub use state::AppState;
