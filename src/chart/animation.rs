use std::time::Duration;

use eframe::egui::emath::easing;

/// A scalar moving from `from` to `to` over a time window on the frame clock.
///
/// Times are seconds on the same clock the UI reports (`egui::InputState::time`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: f64,
    duration: f64,
}

impl Tween {
    /// A value at rest.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    pub fn new(from: f32, to: f32, start: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.as_secs_f64(),
        }
    }

    pub fn value_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = ((now - self.start) / self.duration) as f32;
        self.from + (self.to - self.from) * easing::cubic_in_out(t)
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.duration > 0.0 && now < self.start + self.duration && self.from != self.to
    }

    /// Interrupt and head for `to`, starting from wherever the value is now.
    pub fn retarget(&mut self, to: f32, now: f64, duration: Duration) {
        let from = self.value_at(now);
        *self = Tween::new(from, to, now, duration);
    }

    /// Jump to `value` immediately, cancelling any running transition.
    pub fn set(&mut self, value: f32) {
        *self = Tween::settled(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn tween_eases_in_and_out() {
        let tw = Tween::new(0.0, 8.0, 0.0, Duration::from_secs(1));
        assert!(tw.value_at(0.25) < 2.0);
        assert_eq!(tw.value_at(0.5), 4.0);
        assert!(tw.value_at(0.75) > 6.0);
    }

    #[test]
    fn tween_runs_between_endpoints() {
        let tw = Tween::new(0.0, 5.0, 1.0, Duration::from_millis(800));
        assert_eq!(tw.value_at(0.5), 0.0);
        assert_eq!(tw.value_at(1.0), 0.0);
        assert_eq!(tw.value_at(1.4), 2.5);
        assert_eq!(tw.value_at(1.8), 5.0);
        assert_eq!(tw.value_at(10.0), 5.0);
        assert!(tw.is_running(1.2));
        assert!(!tw.is_running(1.8));
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut tw = Tween::new(0.0, 5.0, 0.0, Duration::from_millis(800));
        tw.retarget(8.0, 0.4, MS_100);
        assert_eq!(tw.value_at(0.4), 2.5);
        assert_eq!(tw.value_at(0.5), 8.0);
        assert!(!tw.is_running(0.5));
    }

    #[test]
    fn settled_never_runs() {
        let mut tw = Tween::settled(1.0);
        assert!(!tw.is_running(0.0));
        assert_eq!(tw.value_at(123.0), 1.0);
        tw.retarget(0.0, 2.0, MS_100);
        tw.set(1.0);
        assert_eq!(tw.value_at(2.05), 1.0);
    }
}
