use crate::chart::Chart;
use crate::config::ChartLayout;
use crate::data::loader::{DataSource, LoadedDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Chart built from the loaded dataset; owns the dataset.
    pub chart: Chart,

    /// Where the dataset came from.
    pub source: DataSource,
}

impl AppState {
    /// Hand a freshly loaded dataset to the chart.
    pub fn new(loaded: LoadedDataset, layout: ChartLayout) -> Self {
        let LoadedDataset { dataset, source } = loaded;
        Self {
            chart: Chart::new(dataset, layout),
            source,
        }
    }

    /// One-line description of what is on screen.
    pub fn summary(&self) -> String {
        let total = self.chart.dataset().len();
        let plotted = self.chart.plotted_len();
        let species = self.chart.colors().len();
        format!(
            "{total} records from {}, {plotted} plotted, {species} species",
            self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load, EMBEDDED_CSV};

    #[test]
    fn summary_reports_counts_and_source() {
        let loaded = load(&[DataSource::Embedded(EMBEDDED_CSV)]).unwrap();
        let state = AppState::new(loaded, ChartLayout::default());
        assert_eq!(
            state.summary(),
            "95 records from embedded sample, 95 plotted, 3 species"
        );
    }
}
