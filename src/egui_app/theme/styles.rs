//! Theme Styling Functions
//!
//! Helper functions for applying the slate color scheme consistently across
//! all UI components.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::PANEL_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::PANEL_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.inactive.bg_fill = colors::ROW_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::ROW_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.weak_bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::ROW_SELECTED;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar and status bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Create a frame style for the toolbar above the table
pub fn toolbar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for side and bottom panels
pub fn panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for a locker table row
pub fn row_frame(is_selected: bool) -> egui::Frame {
    let bg_color = if is_selected {
        colors::ROW_SELECTED
    } else {
        colors::ROW_BG
    };

    egui::Frame::new()
        .fill(bg_color)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(10, 6))
}

/// Create a frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(2.0, colors::BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Fixed-size action button used in table rows
pub fn action_button(label: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_string()).color(colors::TEXT_LIGHT))
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .min_size(egui::vec2(70.0, 30.0))
}
