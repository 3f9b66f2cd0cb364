// src/main.rs
use eframe::egui;
use anyhow::Result;

mod app;
mod config;
mod error;
mod file;
mod research;
mod state;
mod ui;

use app::{ResearchApp, APP_TITLE};
use config::Settings;

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("DEEP_RESEARCH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))
}

fn main() -> Result<()> {
    init_tracing()?;

    let settings = Settings::load();
    tracing::info!("Starting {}", APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Box::new(ResearchApp::new(&settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
