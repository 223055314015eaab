use std::f32::consts::FRAC_PI_2;

use eframe::egui::epaint::TextShape;
use eframe::egui::{self, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::chart::Chart;
use crate::chart::surface::{Surface, TextStyle};
use crate::chart::tooltip::Tooltip;

// ---------------------------------------------------------------------------
// egui-backed drawing surface
// ---------------------------------------------------------------------------

/// Draws chart-local shapes with an egui painter, shifted to `origin`.
pub struct PainterSurface {
    painter: Painter,
    origin: Vec2,
}

impl PainterSurface {
    pub fn new(painter: Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
        }
    }
}

impl Surface for PainterSurface {
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([from + self.origin, to + self.origin], stroke);
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32) {
        self.painter.circle_filled(center + self.origin, radius, fill);
    }

    fn rect(&mut self, rect: Rect, fill: Color32) {
        self.painter.rect_filled(rect.translate(self.origin), 0.0, fill);
    }

    fn text(&mut self, pos: Pos2, text: &str, style: TextStyle) {
        let pos = pos + self.origin;
        let font = FontId::proportional(style.size);
        if !style.vertical {
            self.painter.text(pos, style.anchor, text, font, style.color);
            return;
        }

        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), font, style.color);
        let size = galley.size();
        let anchor = Vec2::new(
            style.anchor.x().to_factor() * size.x,
            style.anchor.y().to_factor() * size.y,
        );
        // A -90° turn about the galley's top-left maps local (x, y) to (y, -x).
        let top_left = pos - Vec2::new(anchor.y, -anchor.x);
        self.painter
            .add(TextShape::new(top_left, galley, style.color).with_angle(-FRAC_PI_2));
    }
}

// ---------------------------------------------------------------------------
// Scatter chart (central panel)
// ---------------------------------------------------------------------------

/// Render the chart, feed it the pointer, and show the tooltip overlay.
pub fn scatter_chart(ui: &mut Ui, chart: &mut Chart) {
    let now = ui.input(|i| i.time);
    chart.start(now);

    let (rect, response) = ui.allocate_exact_size(chart.layout().surface_size(), Sense::hover());
    let pointer = response.hover_pos().map(|p| p - rect.min.to_vec2());
    chart.pointer(pointer, now);

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::WHITE);
    let mut surface = PainterSurface::new(painter, rect.min);
    chart.paint(&mut surface, now);

    let tooltip = chart.tooltip();
    if tooltip.is_visible(now) {
        show_tooltip(
            ui.ctx(),
            ui.id().with("tooltip"),
            rect.min + tooltip.anchor().to_vec2(),
            tooltip,
            tooltip.opacity_at(now),
        );
    }

    if chart.is_animating(now) {
        ui.ctx().request_repaint();
    }
}

/// The tooltip box, top-left corner at `pos`.
fn show_tooltip(ctx: &egui::Context, id: egui::Id, pos: Pos2, tooltip: &Tooltip, opacity: f32) {
    egui::Area::new(id)
        .order(egui::Order::Tooltip)
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.multiply_opacity(opacity);
            egui::Frame::popup(ui.style()).show(ui, |ui: &mut Ui| {
                for line in tooltip.lines() {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.strong(format!("{}:", line.label));
                        ui.label(&line.value);
                    });
                }
            });
        });
}
