//! Linear scales with d3-compatible "nice" rounding and tick generation.

/// Smallest and largest value of a sequence, ignoring NaN.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Maps a continuous domain onto a continuous output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (v - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }

    /// Extend the domain outward to multiples of the tick step, repeating until
    /// the step no longer changes.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        if !start.is_finite() || !stop.is_finite() || start == stop {
            return self;
        }

        // The domain is only replaced once the step settles.
        let mut prestep = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                self.domain = if reversed {
                    (stop, start)
                } else {
                    (start, stop)
                };
                break;
            }
            if !step.is_finite() {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    /// Roughly `count` round values spanning the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Formatter matching [`Self::ticks`]: fixed precision derived from the
    /// tick step, with thousands separators.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let (d0, d1) = self.domain;
        let step = tick_step(d0.min(d1), d0.max(d1), count as f64).abs();
        let precision = if step > 0.0 && step.is_finite() {
            (-step.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        move |v| format_grouped(v, precision)
    }
}

// ---------------------------------------------------------------------------
// Tick arithmetic
// ---------------------------------------------------------------------------

/// Returns `(i1, i2, inc)`: ticks are `i * inc` for `i in i1..=i2` when
/// `inc > 0`, or `i / -inc` when `inc < 0` (keeps sub-unit steps exact).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let base = 10f64.powf(-power) / factor;
        let mut i1 = (start * base).round();
        let mut i2 = (stop * base).round();
        if i1 / base < start {
            i1 += 1.0;
        }
        if i2 / base > stop {
            i2 -= 1.0;
        }
        (i1, i2, -base)
    } else {
        let base = 10f64.powf(power) * factor;
        let mut i1 = (start / base).round();
        let mut i2 = (stop / base).round();
        if i1 * base < start {
            i1 += 1.0;
        }
        if i2 * base > stop {
            i2 -= 1.0;
        }
        (i1, i2, base)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let inc = tick_increment(start, stop, count);
    if inc < 0.0 {
        -1.0 / inc
    } else {
        inc
    }
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if count.is_nan() || count <= 0.0 || start.is_nan() || stop.is_nan() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (lo, hi) = if reversed {
        (stop, start)
    } else {
        (start, stop)
    };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if !i1.is_finite() || !i2.is_finite() || i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect();
    if reversed {
        out.reverse();
    }
    out
}

fn format_grouped(v: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let negative = v < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if negative {
        format!("\u{2212}{grouped}")
    } else {
        grouped
    }
}
