use eframe::egui;

use crate::egui_app::actions::LockerAction;
use crate::egui_app::state::{AppState, NoticeKind};
use crate::egui_app::theme::{colors, styles};

/// Show the oldest pending notice as a blocking modal
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.current_notice().cloned() else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => colors::INFO,
        NoticeKind::Success => colors::SUCCESS,
        NoticeKind::Warning => colors::WARNING,
        NoticeKind::Error => colors::ERROR,
    };

    let mut dismissed = false;
    let response = egui::Modal::new(egui::Id::new("notice_modal"))
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.colored_label(color, egui::RichText::new(&notice.title).size(18.0).strong());
            ui.add_space(8.0);
            ui.colored_label(colors::TEXT_LIGHT, &notice.body);
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed || response.should_close() {
        state.push(LockerAction::DismissNotice);
    }
}
