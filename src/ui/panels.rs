use eframe::egui::{self, Ui};

use crate::data::loader::DataSource;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar above the chart.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Palmer penguins");
        ui.separator();
        ui.label(state.summary());

        if matches!(state.source, DataSource::Embedded(_)) {
            ui.separator();
            ui.weak("External data file unavailable, showing the built-in sample");
        }
    });
}
