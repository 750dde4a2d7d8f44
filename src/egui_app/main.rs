/**
 * Locker Desk - Main Entry Point
 *
 * Native desktop client for the locker service. Installs logging, loads the
 * configuration, and runs the egui shell around the sync controller.
 */
use std::time::Duration;

use eframe::egui;
use lockerdesk::egui_app::{theme, views, AppState, Config, EguiClipboard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Clock refresh interval; does not touch the locker store
const CLOCK_TICK: Duration = Duration::from_secs(1);

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "app.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lockerdesk=debug,locker_app=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    guard
}

fn main() -> Result<(), eframe::Error> {
    let _log_guard = init_tracing();
    dotenv::dotenv().ok();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(server = config.server_url(), "Starting locker desk");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Locker Management System")
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Locker Management System",
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            let clipboard = EguiClipboard::new(cc.egui_ctx.clone());
            let state = AppState::new(config, Box::new(clipboard))?;
            Ok(Box::new(LockerApp { state }))
        }),
    )
}

/// Main application state
struct LockerApp {
    state: AppState,
}

impl eframe::App for LockerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_top_bar(ctx, &mut self.state);
        views::render_status_bar(ctx, &self.state);
        views::activity_view::render(ctx, &mut self.state);
        views::help_panel::render(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::detail_window::render(ctx, &mut self.state);
        views::notice_modal::render(ctx, &mut self.state);

        if self.state.process_actions() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(CLOCK_TICK);
        }
    }
}
