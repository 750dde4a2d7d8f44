//! Theme Module
//!
//! Color scheme and styling helpers for the locker desk. It includes:
//!
//! - Color constants for the slate/teal theme
//! - Frame builders for the toolbar, table rows, panels and modals
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::toolbar_frame().show(ui, |ui| {
//!     // Toolbar content
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
