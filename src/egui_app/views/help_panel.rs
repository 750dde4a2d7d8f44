use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

const INSTRUCTIONS: &str = "Instructions:\n\
- Single-click a locker ID to select it for copying.\n\
- Click 'Detail' to view/edit details.\n\
- Click 'Lock' or 'Unlock' to control locker state.\n\
- Click 'View Map' to see locker location.\n\
- Use 'Copy to Clipboard' and 'Paste from Clipboard' for locker ID.\n\
- Use 'Export to CSV' to save locker data.";

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_help {
        return;
    }

    egui::SidePanel::right("help_dock")
        .frame(styles::panel_frame())
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Help");
            ui.separator();
            ui.colored_label(colors::TEXT_LIGHT, INSTRUCTIONS);

            if let Some(path) = &state.last_map {
                ui.add_space(16.0);
                ui.separator();
                ui.label("Last generated map:");
                let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
                ui.hyperlink_to(
                    path.display().to_string(),
                    format!("file://{}", absolute.display()),
                );
            }
        });
}
