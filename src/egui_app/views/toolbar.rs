use eframe::egui;

use crate::egui_app::actions::LockerAction;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::toolbar_frame().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui.add(styles::action_button("Add Locker", colors::ACCENT)).clicked() {
                state.push(LockerAction::Create);
            }
            if ui.button("⟳ Refresh").clicked() {
                state.push(LockerAction::Refresh);
            }

            ui.separator();

            ui.add(
                egui::TextEdit::singleline(&mut state.delete_input)
                    .hint_text("Locker ID to delete")
                    .desired_width(220.0),
            );
            if ui.add(styles::action_button("Delete", colors::LOCK)).clicked() {
                state.push(LockerAction::Delete);
            }

            ui.separator();

            if ui.button("Copy to Clipboard").clicked() {
                state.push(LockerAction::CopySelected);
            }
            if ui.button("Paste from Clipboard").clicked() {
                state.push(LockerAction::PasteIntoDelete);
            }

            ui.separator();

            ui.add(
                egui::TextEdit::singleline(&mut state.export_path)
                    .hint_text("lockers.csv")
                    .desired_width(160.0),
            );
            if ui.button("Export to CSV").clicked() {
                state.push(LockerAction::ExportCsv);
            }
        });
    });
}
