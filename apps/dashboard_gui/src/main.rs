mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::backend_bridge::runtime::{self, WorkerConfig};
use crate::controller::events::UiEvent;
use crate::ui::app::{
    DashboardGuiApp, PersistedConsoleSettings, StartupConfig, SETTINGS_STORAGE_KEY,
};

#[derive(Parser, Debug)]
#[command(about = "Stockdeck warehouse operations console")]
struct Args {
    /// Base URL of the warehouse API gateway.
    #[arg(long, default_value = client_core::DEFAULT_API_URL)]
    api_url: String,
    /// Serve bundled sample data instead of calling the gateway.
    #[arg(long)]
    offline: bool,
    /// Launch without the assistant widget.
    #[arg(long)]
    hide_assistant: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(
        cmd_rx,
        ui_tx,
        WorkerConfig {
            api_url: args.api_url,
            offline: args.offline,
        },
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stockdeck Ops Console")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Stockdeck Ops Console",
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedConsoleSettings>(&text).ok())
            });
            Ok(Box::new(DashboardGuiApp::new(
                cmd_tx,
                ui_rx,
                StartupConfig {
                    persisted_settings,
                    hide_assistant: args.hide_assistant,
                },
            )))
        }),
    )
}
