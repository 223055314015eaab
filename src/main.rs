mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::PenguinScatterApp;
use config::{ChartLayout, DEFAULT_DATA_PATH};
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Nothing to draw without data, so a failed load ends the program here.
    let sources = data::loader::default_sources(DEFAULT_DATA_PATH);
    let loaded = data::loader::load(&sources).context("loading penguin measurements")?;

    let layout = ChartLayout::default();
    let window = layout.surface_size() + egui::vec2(32.0, 64.0);
    let state = AppState::new(loaded, layout);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window)
            .with_min_inner_size(window),
        ..Default::default()
    };

    eframe::run_native(
        "Palmer Penguins: Bill vs Flipper Length",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(PenguinScatterApp::new(state)))
        }),
    )
    .map_err(|e| anyhow!("running the viewer: {e}"))
}
