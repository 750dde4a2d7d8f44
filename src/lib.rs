//! Locker Desk - Main Library
//!
//! Locker Desk is a native desktop client for a remote locker service. It
//! lists, registers, deletes, edits, locks and unlocks physical lockers, maps
//! their reported positions, and exports the current listing to CSV.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the user interface
//!   - Locker record, request and response bodies
//!   - Error taxonomy (transport, business, validation)
//!   - Application configuration
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Locker service client and sync controller
//!   - Locker store, action queue, map and CSV adapters
//!   - Views and theme
//!
//! # Consistency Model
//!
//! The client never patches its local view. Every successful mutation is
//! followed by a full reload of the locker list, and a failed operation leaves
//! the last successful listing on screen.
//!
//! # Usage
//!
//! ```rust,no_run
//! use lockerdesk::egui_app::{Config, LockerApiClient, MemoryClipboard, ActivityLog, SyncController};
//!
//! let api = LockerApiClient::new(Config::new()).unwrap();
//! let mut controller = SyncController::new(api, ActivityLog::new(100), Box::new(MemoryClipboard::new()));
//! let loaded = controller.refresh().unwrap();
//! println!("{} lockers", loaded);
//! ```

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
