use std::time::Duration;

use eframe::egui::{Pos2, Vec2};

/// Where the full dataset is expected, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/penguins.csv";

// ---------------------------------------------------------------------------
// Chart layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Fixed geometry, timing and styling of the scatter chart.
///
/// All positions are in chart-local units with the origin at the top-left of
/// the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Size of the whole drawing surface, margins included.
    pub width: f32,
    pub height: f32,
    pub margin: Margins,

    pub point_radius: f32,
    pub hover_radius: f32,
    pub point_opacity: f32,

    pub enter_duration: Duration,
    pub hover_in_duration: Duration,
    pub hover_out_duration: Duration,
    pub tooltip_fade_duration: Duration,
    /// Tooltip top-left corner relative to the pointer.
    pub tooltip_offset: Vec2,

    /// Approximate number of ticks per axis, also used for nice rounding.
    pub tick_count: usize,
    pub tick_size: f32,
    pub tick_padding: f32,
    pub tick_font_size: f32,
    pub label_font_size: f32,

    /// Legend column starts this far right of the plot area.
    pub legend_gap: f32,
    pub legend_top: f32,
    pub legend_row_spacing: f32,
    pub legend_swatch: f32,
    pub legend_label_gap: f32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: Margins {
                top: 20.0,
                right: 160.0,
                bottom: 50.0,
                left: 60.0,
            },
            point_radius: 5.0,
            hover_radius: 8.0,
            point_opacity: 0.75,
            enter_duration: Duration::from_millis(800),
            hover_in_duration: Duration::from_millis(100),
            hover_out_duration: Duration::from_millis(150),
            tooltip_fade_duration: Duration::from_millis(300),
            tooltip_offset: Vec2::new(15.0, -28.0),
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            tick_font_size: 10.0,
            label_font_size: 12.0,
            legend_gap: 40.0,
            legend_top: 20.0,
            legend_row_spacing: 25.0,
            legend_swatch: 18.0,
            legend_label_gap: 24.0,
        }
    }
}

impl ChartLayout {
    pub fn surface_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Width of the plotting rectangle inside the margins.
    pub fn plot_width(&self) -> f32 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f32 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Top-left corner of the plotting rectangle.
    pub fn plot_origin(&self) -> Pos2 {
        Pos2::new(self.margin.left, self.margin.top)
    }
}
