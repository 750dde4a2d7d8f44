use eframe::egui;

use crate::egui_app::activity::{ActivityCategory, ActivityLevel};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_activity {
        return;
    }

    egui::TopBottomPanel::bottom("activity_panel")
        .frame(styles::panel_frame())
        .resizable(true)
        .default_height(180.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Activity");
                ui.label(format!("Entries: {}", state.activity.count()));

                if ui.button("🗑 Clear").clicked() {
                    state.activity.clear();
                }

                ui.separator();
                ui.label("Filter:");
                let categories = [
                    ("All", None),
                    ("Network", Some(ActivityCategory::Network)),
                    ("Sync", Some(ActivityCategory::Sync)),
                    ("Map", Some(ActivityCategory::Map)),
                    ("Export", Some(ActivityCategory::Export)),
                    ("Clipboard", Some(ActivityCategory::Clipboard)),
                ];
                for (label, category) in categories {
                    if ui
                        .selectable_label(state.activity_filter == category, label)
                        .clicked()
                    {
                        state.activity_filter = category;
                    }
                }
            });

            ui.separator();

            let entries = match state.activity_filter {
                Some(category) => state.activity.entries_by_category(category),
                None => state.activity.entries(),
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in &entries {
                        let color = match entry.level {
                            ActivityLevel::Error => colors::ERROR,
                            ActivityLevel::Warn => colors::WARNING,
                            ActivityLevel::Info => colors::TEXT_LIGHT,
                            ActivityLevel::Debug => colors::TEXT_SECONDARY,
                        };
                        ui.colored_label(color, entry.to_string());
                    }
                });
        });
}
