//! Color Constants for the Locker Desk Theme
//!
//! A dark slate base with a teal accent. Lock and unlock actions get their own
//! colors so the two buttons are never confused in a dense table.

use eframe::egui::Color32;

/// Window background - Deep slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x25, 0x2E);

/// Panel background - Slate
pub const PANEL_BG: Color32 = Color32::from_rgb(0x26, 0x30, 0x3B);

/// Top bar and status bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x17, 0x1D, 0x24);

/// Table row background
pub const ROW_BG: Color32 = Color32::from_rgb(0x2C, 0x37, 0x43);

/// Selected row background
pub const ROW_SELECTED: Color32 = Color32::from_rgb(0x1F, 0x5F, 0x66);

/// Hovered widget background
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x37, 0x45, 0x53);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x33, 0x3F, 0x4C);

/// Borders and separators
pub const BORDER: Color32 = Color32::from_rgb(0x45, 0x52, 0x60);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEE, 0xF2);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA8, 0xB5);

/// Accent color for highlights and primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(0x2A, 0x9D, 0x8F);

/// Lock button
pub const LOCK: Color32 = Color32::from_rgb(0xB0, 0x3A, 0x2E);

/// Unlock button
pub const UNLOCK: Color32 = Color32::from_rgb(0x3A, 0x7D, 0x44);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Informational color - Blue
pub const INFO: Color32 = Color32::from_rgb(0x64, 0xB5, 0xF6);
