//! Locker table: one row per store record with its bound actions.

use eframe::egui;

use crate::egui_app::actions::LockerAction;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.controller.store().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.colored_label(colors::TEXT_SECONDARY, "No lockers loaded");
        });
        return;
    }

    let selected = state.controller.selected_locker_id().map(str::to_string);
    let mut clicked = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for locker in state.controller.store() {
                let locker_id = locker.id();
                let is_selected = selected.as_deref() == Some(locker_id);

                styles::row_frame(is_selected).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let label = ui.add(
                            egui::Label::new(
                                egui::RichText::new(locker_id).color(colors::TEXT_LIGHT).monospace(),
                            )
                            .sense(egui::Sense::click()),
                        );
                        if label.clicked() {
                            clicked.push(LockerAction::Select(locker_id.to_string()));
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(styles::action_button("View Map", colors::ACCENT))
                                .on_hover_text("View locker location on map")
                                .clicked()
                            {
                                clicked.push(LockerAction::ShowMap(locker_id.to_string()));
                            }
                            if ui
                                .add(styles::action_button("Unlock", colors::UNLOCK))
                                .on_hover_text("Unlock the locker")
                                .clicked()
                            {
                                clicked.push(LockerAction::unlock(locker_id));
                            }
                            if ui
                                .add(styles::action_button("Lock", colors::LOCK))
                                .on_hover_text("Lock the locker")
                                .clicked()
                            {
                                clicked.push(LockerAction::lock(locker_id));
                            }
                            if ui
                                .add(styles::action_button("Detail", colors::HOVER_ITEM))
                                .on_hover_text("View and edit locker details")
                                .clicked()
                            {
                                clicked.push(LockerAction::ShowDetail(locker_id.to_string()));
                            }
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });

    for action in clicked {
        state.push(action);
    }
}
