//! Detail window: view and edit one locker.

use eframe::egui;

use crate::egui_app::actions::LockerAction;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::locker::{
    BATTERY_PERCENTAGE, LATITUDE, LIGHT_STATUS, LOCKER_ID, LONGITUDE, READ_ONLY_FIELDS, STATUS,
};

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(session) = state.editor.as_mut() else {
        return;
    };

    let mut open = true;
    let mut submit = false;

    egui::Window::new(format!("Details for {}", session.snapshot.id()))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(400.0)
        .show(ctx, |ui| {
            egui::Grid::new("locker_detail")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Locker ID:");
                    ui.colored_label(colors::TEXT_SECONDARY, session.snapshot.id());
                    ui.end_row();

                    let form = &mut session.form;
                    for (label, value) in [
                        ("Status:", &mut form.status),
                        ("Light Status:", &mut form.light_status),
                        ("Battery Percentage:", &mut form.battery_percentage),
                        ("Latitude:", &mut form.latitude),
                        ("Longitude:", &mut form.longitude),
                    ] {
                        ui.label(label);
                        ui.text_edit_singleline(value);
                        ui.end_row();
                    }
                });

            let extra: Vec<String> = session
                .snapshot
                .fields()
                .iter()
                .filter(|(key, _)| !READ_ONLY_FIELDS.contains(&key.as_str()))
                .filter(|(key, _)| !is_form_field(key))
                .map(|(key, _)| format!("{}: {}", key, session.snapshot.text(key)))
                .collect();
            if !extra.is_empty() {
                ui.separator();
                for line in extra {
                    ui.colored_label(colors::TEXT_SECONDARY, line);
                }
            }

            ui.add_space(8.0);
            if ui.button("Edit").clicked() {
                submit = true;
            }
        });

    if submit {
        state.push(LockerAction::SubmitEdit);
    } else if !open {
        state.push(LockerAction::CloseDetail);
    }
}

fn is_form_field(key: &str) -> bool {
    matches!(
        key,
        LOCKER_ID | STATUS | LIGHT_STATUS | BATTERY_PERCENTAGE | LATITUDE | LONGITUDE
    )
}
