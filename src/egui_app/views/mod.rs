use eframe::egui;

use crate::egui_app::actions::LockerAction;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod activity_view;
pub mod detail_window;
pub mod help_panel;
pub mod locker_table;
pub mod notice_modal;
pub mod toolbar;

/// Clock format shown in the status bar
pub const CLOCK_FORMAT: &str = "%H:%M:%S %p WITA";

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("View", |ui| {
                    let mut show_help = state.show_help;
                    if ui.checkbox(&mut show_help, "Show Help Dock").changed() {
                        state.push(LockerAction::ToggleHelp);
                    }
                    let mut show_activity = state.show_activity;
                    if ui.checkbox(&mut show_activity, "Show Activity Log").changed() {
                        state.push(LockerAction::ToggleActivity);
                    }
                });

                ui.separator();
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🔐 Locker Management System").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, state.config.server_url());
                });
            });
        });
}

pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let clock = chrono::Local::now().format(CLOCK_FORMAT).to_string();
                ui.colored_label(colors::TEXT_LIGHT, format!("Time: {}", clock));

                if let Some(text) = state.status_text() {
                    ui.separator();
                    ui.colored_label(colors::TEXT_SECONDARY, text);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("{} lockers", state.controller.store().len()),
                    );
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(colors::BG_DARK).inner_margin(egui::Margin::same(12)))
        .show(ctx, |ui| {
            toolbar::render(ui, state);
            ui.add_space(8.0);
            locker_table::render(ui, state);
        });
}
