//! Chart model: everything between a loaded dataset and pixels.
//!
//! ```text
//!   Dataset ──▶ filter ──▶ scales + colours ──▶ markers, legend
//!                                                    │
//!        pointer samples ──▶ HoverTracker ──▶ tweens + tooltip
//!                                                    │
//!                                  paint(&mut dyn Surface, now)
//! ```
//!
//! The model is built once and never re-filtered; per-frame work is limited
//! to hover bookkeeping and painting.
pub mod animation;
pub mod axis;
pub mod interaction;
pub mod legend;
pub mod marker;
pub mod scale;
pub mod surface;
pub mod tooltip;

use eframe::egui::Pos2;

use self::axis::AxisOrient;
use self::interaction::{HoverEvent, HoverTracker};
use self::legend::LegendEntry;
use self::marker::Marker;
use self::scale::LinearScale;
use self::surface::Surface;
use self::tooltip::{tooltip_lines, Tooltip};
use crate::color::CategoricalColorMap;
use crate::config::ChartLayout;
use crate::data::filter::plotting_indices;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// Scale domain used when no record can be plotted.
const EMPTY_DOMAIN: (f64, f64) = (0.0, 1.0);

pub struct Chart {
    layout: ChartLayout,
    dataset: Dataset,
    /// Dataset indices of plottable records, in file order.
    subset: Vec<usize>,
    x: LinearScale,
    y: LinearScale,
    colors: CategoricalColorMap,
    markers: Vec<Marker>,
    legend: Vec<LegendEntry>,
    hover: HoverTracker,
    tooltip: Tooltip,
    started: bool,
}

impl Chart {
    /// Filter the dataset, build scales and colours, and lay out markers and
    /// legend. Markers start with zero radius until [`Chart::start`].
    pub fn new(dataset: Dataset, layout: ChartLayout) -> Self {
        let subset = plotting_indices(&dataset);
        let points: Vec<(f64, f64)> = subset
            .iter()
            .filter_map(|&i| dataset.records[i].plotted_point())
            .collect();

        let x_extent = scale::extent(points.iter().map(|p| p.0)).unwrap_or(EMPTY_DOMAIN);
        let y_extent = scale::extent(points.iter().map(|p| p.1)).unwrap_or(EMPTY_DOMAIN);

        let plot_w = f64::from(layout.plot_width());
        let plot_h = f64::from(layout.plot_height());
        let x = LinearScale::new(x_extent, (0.0, plot_w))
            .nice(layout.tick_count);
        let y = LinearScale::new(y_extent, (plot_h, 0.0))
            .nice(layout.tick_count);

        let colors =
            CategoricalColorMap::from_values(subset.iter().map(|&i| &dataset.records[i].species));

        let origin = layout.plot_origin();
        let markers = subset
            .iter()
            .zip(&points)
            .map(|(&i, &(bx, fy))| {
                let center = Pos2::new(
                    origin.x + x.apply(bx) as f32,
                    origin.y + y.apply(fy) as f32,
                );
                Marker::new(i, center, colors.color_for(&dataset.records[i].species))
            })
            .collect();

        let legend = legend::build_legend(&colors, &layout);
        if colors.is_empty() {
            log::warn!("No plottable records, drawing axes only");
        }

        log::debug!(
            "Chart built: {} of {} records plotted, {} species, x {:?}, y {:?}",
            subset.len(),
            dataset.len(),
            colors.len(),
            x.domain(),
            y.domain()
        );

        Self {
            layout,
            dataset,
            subset,
            x,
            y,
            colors,
            markers,
            legend,
            hover: HoverTracker::default(),
            tooltip: Tooltip::default(),
            started: false,
        }
    }

    /// Begin the marker enter animation. Only the first call has an effect.
    pub fn start(&mut self, now: f64) {
        if self.started {
            return;
        }
        self.started = true;
        let duration = self.layout.enter_duration;
        let rest = self.layout.point_radius;
        for m in &mut self.markers {
            m.radius.retarget(rest, now, duration);
        }
    }

    // -- Interaction ------------------------------------------------------

    /// Feed the pointer position (chart-local, `None` when off the surface).
    pub fn pointer(&mut self, pointer: Option<Pos2>, now: f64) {
        let hit = pointer.and_then(|pos| marker::hit_test(&self.markers, pos, now));
        for event in self.hover.update(pointer, hit) {
            self.handle(event, now);
        }
    }

    fn handle(&mut self, event: HoverEvent, now: f64) {
        let offset = self.layout.tooltip_offset;
        match event {
            HoverEvent::Enter(id, pos) => {
                let m = &mut self.markers[id.0];
                m.radius.retarget(
                    self.layout.hover_radius,
                    now,
                    self.layout.hover_in_duration,
                );
                let lines = tooltip_lines(&self.dataset.records[m.record]);
                self.tooltip.show(lines, pos + offset);
            }
            HoverEvent::Move(_, pos) => self.tooltip.move_to(pos + offset),
            HoverEvent::Leave(id) => {
                self.markers[id.0].radius.retarget(
                    self.layout.point_radius,
                    now,
                    self.layout.hover_out_duration,
                );
                self.tooltip
                    .fade_out(now, self.layout.tooltip_fade_duration);
            }
        }
    }

    // -- Painting ---------------------------------------------------------

    /// Draw axes, axis titles, markers and legend.
    pub fn paint(&self, surface: &mut dyn Surface, now: f64) {
        let l = &self.layout;
        let origin = l.plot_origin();

        axis::paint_axis(
            surface,
            &self.x,
            AxisOrient::Bottom,
            Pos2::new(origin.x, origin.y + l.plot_height()),
            l,
        );
        axis::paint_axis(surface, &self.y, AxisOrient::Left, origin, l);
        axis::paint_axis_labels(surface, l);

        for m in &self.markers {
            let r = m.radius_at(now);
            if r > 0.0 {
                surface.circle(m.center, r, m.fill.gamma_multiply(l.point_opacity));
            }
        }

        legend::paint_legend(surface, &self.legend, l);
    }

    /// Whether any marker or the tooltip is mid-transition.
    pub fn is_animating(&self, now: f64) -> bool {
        self.markers.iter().any(|m| m.radius.is_running(now)) || self.tooltip.is_animating(now)
    }

    // -- Accessors --------------------------------------------------------

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of records placed on the chart.
    pub fn plotted_len(&self) -> usize {
        self.subset.len()
    }

    pub fn colors(&self) -> &CategoricalColorMap {
        &self.colors
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }
}

#[cfg(test)]
impl Chart {
    pub fn x_scale(&self) -> &LinearScale {
        &self.x
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn hovered(&self) -> Option<marker::MarkerId> {
        self.hover.hovered()
    }
}
