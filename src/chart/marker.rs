use eframe::egui::{Color32, Pos2};

use super::animation::Tween;

/// Identifies a drawn marker; its index into the chart's marker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

/// One circle on the chart, bound to the dataset row it represents.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Index of the record in the dataset.
    pub record: usize,
    /// Centre in chart-local coordinates.
    pub center: Pos2,
    /// Category colour, before opacity is applied.
    pub fill: Color32,
    pub radius: Tween,
}

impl Marker {
    pub fn new(record: usize, center: Pos2, fill: Color32) -> Self {
        Self {
            record,
            center,
            fill,
            radius: Tween::settled(0.0),
        }
    }

    pub fn radius_at(&self, now: f64) -> f32 {
        self.radius.value_at(now)
    }

    /// Whether `pos` falls inside the circle as currently drawn.
    pub fn contains(&self, pos: Pos2, now: f64) -> bool {
        let r = self.radius_at(now);
        r > 0.0 && self.center.distance_sq(pos) <= r * r
    }
}

/// The top-most marker under `pos`. Later markers are drawn over earlier
/// ones, so the search runs back to front.
pub fn hit_test(markers: &[Marker], pos: Pos2, now: f64) -> Option<MarkerId> {
    markers
        .iter()
        .rposition(|m| m.contains(pos, now))
        .map(MarkerId)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_rest(record: usize, x: f32, y: f32) -> Marker {
        let mut m = Marker::new(record, Pos2::new(x, y), Color32::RED);
        m.radius.set(5.0);
        m
    }

    #[test]
    fn zero_radius_is_not_hoverable() {
        let m = Marker::new(0, Pos2::new(10.0, 10.0), Color32::RED);
        assert!(!m.contains(Pos2::new(10.0, 10.0), 0.0));
    }

    #[test]
    fn hit_test_prefers_top_most() {
        let markers = vec![at_rest(0, 10.0, 10.0), at_rest(1, 13.0, 10.0)];
        let overlap = Pos2::new(11.5, 10.0);
        assert_eq!(hit_test(&markers, overlap, 0.0), Some(MarkerId(1)));
        let left_only = Pos2::new(6.0, 10.0);
        assert_eq!(hit_test(&markers, left_only, 0.0), Some(MarkerId(0)));
        assert_eq!(hit_test(&markers, Pos2::new(30.0, 30.0), 0.0), None);
    }

    #[test]
    fn boundary_counts_as_inside() {
        let m = at_rest(0, 0.0, 0.0);
        assert!(m.contains(Pos2::new(5.0, 0.0), 0.0));
        assert!(!m.contains(Pos2::new(5.1, 0.0), 0.0));
    }
}
