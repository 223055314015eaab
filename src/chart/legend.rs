use eframe::egui::{Align2, Color32, Pos2, Rect, Vec2};

use super::surface::{Surface, TextStyle};
use crate::color::CategoricalColorMap;
use crate::config::ChartLayout;

/// One swatch + label row in the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color32,
    pub swatch: Rect,
    /// Left-centre anchor of the label text.
    pub label_pos: Pos2,
}

/// Lay out one entry per category in the right margin, top to bottom in
/// colour-mapping order.
pub fn build_legend(colors: &CategoricalColorMap, layout: &ChartLayout) -> Vec<LegendEntry> {
    let left = layout.margin.left + layout.plot_width() + layout.legend_gap;
    let top = layout.margin.top + layout.legend_top;
    let side = layout.legend_swatch;

    colors
        .entries()
        .iter()
        .enumerate()
        .map(|(i, (value, color))| {
            let min = Pos2::new(left, top + i as f32 * layout.legend_row_spacing);
            LegendEntry {
                label: value.to_string(),
                color: *color,
                swatch: Rect::from_min_size(min, Vec2::splat(side)),
                label_pos: Pos2::new(min.x + layout.legend_label_gap, min.y + side / 2.0),
            }
        })
        .collect()
}

pub fn paint_legend(surface: &mut dyn Surface, entries: &[LegendEntry], layout: &ChartLayout) {
    for entry in entries {
        surface.rect(entry.swatch, entry.color);
        surface.text(
            entry.label_pos,
            &entry.label,
            TextStyle::new(Align2::LEFT_CENTER, layout.label_font_size),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Value;

    #[test]
    fn entries_stack_in_right_margin() {
        let layout = ChartLayout::default();
        let species = [
            Value::infer("Adelie"),
            Value::infer("Gentoo"),
            Value::infer("Chinstrap"),
        ];
        let colors = CategoricalColorMap::from_values(&species);
        let legend = build_legend(&colors, &layout);

        assert_eq!(legend.len(), 3);
        assert_eq!(legend[0].swatch.min, Pos2::new(680.0, 40.0));
        assert_eq!(legend[2].swatch.min, Pos2::new(680.0, 90.0));
        assert_eq!(legend[1].swatch.size(), Vec2::splat(18.0));
        assert_eq!(legend[1].label_pos, Pos2::new(704.0, 74.0));
        assert_eq!(legend[1].label, "Gentoo");
        assert_eq!(legend[1].color, colors.color_for(&species[1]));

        // legend sits entirely outside the plotting rectangle
        let plot_right = layout.margin.left + layout.plot_width();
        assert!(legend.iter().all(|e| e.swatch.min.x > plot_right));
    }
}
