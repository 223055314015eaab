use std::time::Duration;

use eframe::egui::Pos2;

use super::animation::Tween;
use crate::data::model::Record;

/// One "Label: value" row of the tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    pub label: &'static str,
    pub value: String,
}

/// The details shown when hovering a specimen.
pub fn tooltip_lines(record: &Record) -> Vec<TooltipLine> {
    let line = |label, value: String| TooltipLine { label, value };
    vec![
        line("Species", record.species.to_string()),
        line("Island", record.island.to_string()),
        line("Bill length", format!("{} mm", record.bill_length_mm)),
        line("Flipper length", format!("{} mm", record.flipper_length_mm)),
        line("Body mass", format!("{} g", record.body_mass_g)),
    ]
}

/// The single shared tooltip overlay.
///
/// Content and position persist after the pointer leaves so the box can fade
/// out in place.
#[derive(Debug, Clone)]
pub struct Tooltip {
    lines: Vec<TooltipLine>,
    anchor: Pos2,
    opacity: Tween,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            anchor: Pos2::ZERO,
            opacity: Tween::settled(0.0),
        }
    }
}

impl Tooltip {
    /// Replace the content and show it fully opaque at `anchor`.
    pub fn show(&mut self, lines: Vec<TooltipLine>, anchor: Pos2) {
        self.lines = lines;
        self.anchor = anchor;
        self.opacity.set(1.0);
    }

    pub fn move_to(&mut self, anchor: Pos2) {
        self.anchor = anchor;
    }

    pub fn fade_out(&mut self, now: f64, duration: Duration) {
        self.opacity.retarget(0.0, now, duration);
    }

    pub fn lines(&self) -> &[TooltipLine] {
        &self.lines
    }

    /// Top-left corner in chart-local coordinates.
    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn opacity_at(&self, now: f64) -> f32 {
        self.opacity.value_at(now)
    }

    pub fn is_visible(&self, now: f64) -> bool {
        !self.lines.is_empty() && self.opacity_at(now) > 0.0
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.opacity.is_running(now)
    }

    /// The tooltip as plain text, one line per field.
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}: {}", l.label, l.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Value;

    fn gentoo() -> Record {
        Record {
            species: Value::infer("Gentoo"),
            island: Value::infer("Biscoe"),
            bill_length_mm: Value::infer("46.1"),
            bill_depth_mm: Value::infer("13.2"),
            flipper_length_mm: Value::infer("211"),
            body_mass_g: Value::infer("4500"),
            sex: Value::infer("female"),
            year: Value::infer("2007"),
        }
    }

    #[test]
    fn lines_carry_all_five_values() {
        let mut tip = Tooltip::default();
        tip.show(tooltip_lines(&gentoo()), Pos2::new(1.0, 2.0));
        assert_eq!(
            tip.text(),
            "Species: Gentoo\nIsland: Biscoe\nBill length: 46.1 mm\n\
             Flipper length: 211 mm\nBody mass: 4500 g"
        );
    }

    #[test]
    fn missing_body_mass_shows_na() {
        let mut rec = gentoo();
        rec.body_mass_g = Value::Missing;
        let lines = tooltip_lines(&rec);
        assert_eq!(lines[4].value, "NA g");
    }

    #[test]
    fn fade_keeps_content_until_transparent() {
        let mut tip = Tooltip::default();
        assert!(!tip.is_visible(0.0));
        tip.show(tooltip_lines(&gentoo()), Pos2::new(1.0, 2.0));
        assert_eq!(tip.opacity_at(0.0), 1.0);

        tip.fade_out(1.0, Duration::from_millis(300));
        assert!(tip.is_visible(1.1));
        assert!(tip.is_animating(1.1));
        assert_eq!(tip.lines().len(), 5);
        assert!(!tip.is_visible(1.3));

        tip.show(tooltip_lines(&gentoo()), Pos2::new(5.0, 5.0));
        assert_eq!(tip.opacity_at(1.35), 1.0);
        assert_eq!(tip.anchor(), Pos2::new(5.0, 5.0));
    }
}
