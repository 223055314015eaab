use eframe::egui::{Align2, Color32, Pos2, Rect, Stroke};

/// How a piece of text is placed relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub anchor: Align2,
    pub size: f32,
    pub color: Color32,
    /// Rotate 90° counter-clockwise so the text reads bottom to top.
    pub vertical: bool,
}

impl TextStyle {
    pub fn new(anchor: Align2, size: f32) -> Self {
        Self {
            anchor,
            size,
            color: Color32::BLACK,
            vertical: false,
        }
    }

    pub fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }
}

/// Drawing target for the chart.
///
/// Coordinates are chart-local: `(0, 0)` is the top-left corner of the
/// drawing surface, y grows downward.
pub trait Surface {
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32);

    fn rect(&mut self, rect: Rect, fill: Color32);

    fn text(&mut self, pos: Pos2, text: &str, style: TextStyle);
}
