use eframe::egui::{Align2, Color32, Pos2, Stroke};

use super::scale::LinearScale;
use super::surface::{Surface, TextStyle};
use crate::config::ChartLayout;

pub const X_AXIS_LABEL: &str = "Bill length (mm)";
pub const Y_AXIS_LABEL: &str = "Flipper length (mm)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// Draw an axis line with outer ticks, tick marks and tick labels.
///
/// `origin` is where the scale's zero output lands on the surface: the plot's
/// bottom-left corner for a bottom axis, its top-left corner for a left axis.
pub fn paint_axis(
    surface: &mut dyn Surface,
    scale: &LinearScale,
    orient: AxisOrient,
    origin: Pos2,
    layout: &ChartLayout,
) {
    let stroke = Stroke::new(1.0, Color32::BLACK);
    let size = layout.tick_size;
    let (r0, r1) = scale.range();
    let (r0, r1) = (r0 as f32, r1 as f32);
    let format = scale.tick_format(layout.tick_count);
    let label_style = |anchor| TextStyle::new(anchor, layout.tick_font_size);

    // Maps (position along the axis, offset across it) to surface coordinates.
    let at = |along: f32, across: f32| match orient {
        AxisOrient::Bottom => Pos2::new(origin.x + along, origin.y + across),
        AxisOrient::Left => Pos2::new(origin.x - across, origin.y + along),
    };

    surface.line(at(r0, size), at(r0, 0.0), stroke);
    surface.line(at(r0, 0.0), at(r1, 0.0), stroke);
    surface.line(at(r1, 0.0), at(r1, size), stroke);

    let anchor = match orient {
        AxisOrient::Bottom => Align2::CENTER_TOP,
        AxisOrient::Left => Align2::RIGHT_CENTER,
    };
    for tick in scale.ticks(layout.tick_count) {
        let p = scale.apply(tick) as f32;
        surface.line(at(p, 0.0), at(p, size), stroke);
        surface.text(
            at(p, size + layout.tick_padding),
            &format(tick),
            label_style(anchor),
        );
    }
}

/// The two static axis titles, centred on their axes.
pub fn paint_axis_labels(surface: &mut dyn Surface, layout: &ChartLayout) {
    let m = layout.margin;
    surface.text(
        Pos2::new(
            m.left + layout.plot_width() / 2.0,
            m.top + layout.plot_height() + m.bottom - 10.0,
        ),
        X_AXIS_LABEL,
        TextStyle::new(Align2::CENTER_BOTTOM, layout.label_font_size),
    );
    surface.text(
        Pos2::new(15.0, m.top + layout.plot_height() / 2.0),
        Y_AXIS_LABEL,
        TextStyle::new(Align2::CENTER_BOTTOM, layout.label_font_size).vertical(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::mock::{Call, MockSurface};

    #[test]
    fn bottom_axis_places_ticks_along_x() {
        let layout = ChartLayout::default();
        let scale = LinearScale::new((34.0, 58.0), (0.0, 580.0));
        let mut surface = MockSurface::default();
        paint_axis(
            &mut surface,
            &scale,
            AxisOrient::Bottom,
            Pos2::new(60.0, 450.0),
            &layout,
        );

        let labels = surface.texts();
        assert_eq!(labels.len(), 13);
        assert_eq!(labels[0], "34");
        assert_eq!(labels[12], "58");
        let axis_line = Call::Line(Pos2::new(60.0, 450.0), Pos2::new(640.0, 450.0));
        let outer_tick = Call::Line(Pos2::new(640.0, 450.0), Pos2::new(640.0, 456.0));
        assert!(surface.calls.contains(&axis_line));
        assert!(surface.calls.contains(&outer_tick));
    }

    #[test]
    fn left_axis_ticks_point_left() {
        let layout = ChartLayout::default();
        let scale = LinearScale::new((170.0, 230.0), (430.0, 0.0));
        let mut surface = MockSurface::default();
        paint_axis(
            &mut surface,
            &scale,
            AxisOrient::Left,
            Pos2::new(60.0, 20.0),
            &layout,
        );

        // top tick for 230 sits at the plot's top edge
        let top_tick = Call::Line(Pos2::new(60.0, 20.0), Pos2::new(54.0, 20.0));
        assert!(surface.calls.contains(&top_tick));
        let top_label = surface.calls.iter().find_map(|c| match c {
            Call::Text { text, pos, style } if text == "230" => Some((*pos, *style)),
            _ => None,
        });
        let (pos, style) = top_label.unwrap();
        assert_eq!(pos, Pos2::new(51.0, 20.0));
        assert_eq!(style.anchor, Align2::RIGHT_CENTER);
    }

    #[test]
    fn axis_titles_are_centred_on_their_axes() {
        let mut surface = MockSurface::default();
        paint_axis_labels(&mut surface, &ChartLayout::default());
        assert_eq!(
            surface.calls,
            vec![
                Call::Text {
                    pos: Pos2::new(350.0, 490.0),
                    text: X_AXIS_LABEL.to_string(),
                    style: TextStyle::new(Align2::CENTER_BOTTOM, 12.0),
                },
                Call::Text {
                    pos: Pos2::new(15.0, 235.0),
                    text: Y_AXIS_LABEL.to_string(),
                    style: TextStyle::new(Align2::CENTER_BOTTOM, 12.0).vertical(),
                },
            ]
        );
    }
}
