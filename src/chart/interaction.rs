use eframe::egui::Pos2;

use super::marker::MarkerId;

/// Per-marker pointer event, mirroring enter / move / leave callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverEvent {
    Enter(MarkerId, Pos2),
    Move(MarkerId, Pos2),
    Leave(MarkerId),
}

/// Turns per-frame pointer samples into discrete hover events.
///
/// At most one marker is hovered at a time. Switching directly between
/// overlapping markers yields `Leave` for the old one before `Enter` for the
/// new one.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    hovered: Option<MarkerId>,
    last_pointer: Option<Pos2>,
}

impl HoverTracker {
    #[cfg(test)]
    pub fn hovered(&self) -> Option<MarkerId> {
        self.hovered
    }

    /// Feed one sample: the pointer position (if over the surface) and the
    /// marker under it (if any).
    pub fn update(&mut self, pointer: Option<Pos2>, hit: Option<MarkerId>) -> Vec<HoverEvent> {
        let mut events = Vec::new();
        let hit = pointer.and(hit);

        if hit != self.hovered {
            if let Some(prev) = self.hovered {
                events.push(HoverEvent::Leave(prev));
            }
            if let (Some(id), Some(pos)) = (hit, pointer) {
                events.push(HoverEvent::Enter(id, pos));
            }
            self.hovered = hit;
        } else if let (Some(id), Some(pos)) = (self.hovered, pointer) {
            if self.last_pointer != Some(pos) {
                events.push(HoverEvent::Move(id, pos));
            }
        }

        self.last_pointer = pointer;
        events
    }
}
