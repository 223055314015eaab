use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Value;

// ---------------------------------------------------------------------------
// Qualitative palette
// ---------------------------------------------------------------------------

/// ColorBrewer "Set2".
const SET2: [Srgb<u8>; 8] = [
    Srgb::new(0x66, 0xc2, 0xa5),
    Srgb::new(0xfc, 0x8d, 0x62),
    Srgb::new(0x8d, 0xa0, 0xcb),
    Srgb::new(0xe7, 0x8a, 0xc3),
    Srgb::new(0xa6, 0xd8, 0x54),
    Srgb::new(0xff, 0xd9, 0x2f),
    Srgb::new(0xe5, 0xc4, 0x94),
    Srgb::new(0xb3, 0xb3, 0xb3),
];

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// `n` distinct colours: Set2 first, then evenly spaced hues for any
/// categories past the end of the table.
pub fn qualitative_palette(n: usize) -> Vec<Color32> {
    let extra = n.saturating_sub(SET2.len());
    let generated = (0..extra).map(|i| {
        let hue = ((i as f32 + 0.5) / extra as f32) * 360.0;
        let hsl = Hsl::new(hue, 0.55, 0.6);
        let rgb: Srgb = hsl.into_color();
        to_color32(rgb.into_format())
    });
    SET2.iter()
        .copied()
        .map(to_color32)
        .take(n)
        .chain(generated)
        .collect()
}

// ---------------------------------------------------------------------------
// Categorical color mapping: category value → Color32
// ---------------------------------------------------------------------------

/// Assigns palette colours to category values in first-occurrence order.
#[derive(Debug, Clone)]
pub struct CategoricalColorMap {
    domain: Vec<(Value, Color32)>,
    index: BTreeMap<Value, usize>,
    default_color: Color32,
}

impl CategoricalColorMap {
    /// Build the mapping from category values in encounter order.
    /// Repeated values keep the slot of their first occurrence.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut order: Vec<Value> = Vec::new();
        let mut index = BTreeMap::new();
        for v in values {
            if !index.contains_key(v) {
                index.insert(v.clone(), order.len());
                order.push(v.clone());
            }
        }

        let palette = qualitative_palette(order.len());
        let domain = order.into_iter().zip(palette).collect();

        CategoricalColorMap {
            domain,
            index,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category value.
    pub fn color_for(&self, value: &Value) -> Color32 {
        self.index
            .get(value)
            .map(|&i| self.domain[i].1)
            .unwrap_or(self.default_color)
    }

    /// Category values with their colours, in mapping order.
    pub fn entries(&self) -> &[(Value, Color32)] {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn first_occurrence_order() {
        let vals = [text("Adelie"), text("Gentoo"), text("Adelie"), text("Chinstrap")];
        let cm = CategoricalColorMap::from_values(&vals);
        let order: Vec<String> = cm.entries().iter().map(|(v, _)| v.to_string()).collect();
        assert_eq!(order, ["Adelie", "Gentoo", "Chinstrap"]);
        assert_eq!(
            cm.color_for(&text("Adelie")),
            Color32::from_rgb(0x66, 0xc2, 0xa5)
        );
        assert_eq!(
            cm.color_for(&text("Gentoo")),
            Color32::from_rgb(0xfc, 0x8d, 0x62)
        );
        assert_eq!(
            cm.color_for(&text("Chinstrap")),
            Color32::from_rgb(0x8d, 0xa0, 0xcb)
        );
    }

    #[test]
    fn same_input_same_colors() {
        let vals = [text("b"), text("a"), text("c")];
        let a = CategoricalColorMap::from_values(&vals);
        let b = CategoricalColorMap::from_values(&vals);
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn unknown_category_is_gray() {
        let cm = CategoricalColorMap::from_values(&[text("Adelie")]);
        assert_eq!(cm.color_for(&text("Emperor")), Color32::GRAY);
    }

    #[test]
    fn palette_stays_distinct_past_set2() {
        let colors = qualitative_palette(12);
        assert_eq!(colors.len(), 12);
        let unique: HashSet<Color32> = colors.iter().copied().collect();
        assert_eq!(unique.len(), 12);
        assert!(qualitative_palette(0).is_empty());
        assert_eq!(qualitative_palette(3).len(), 3);
    }
}
