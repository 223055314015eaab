use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Value – a single typed CSV cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, inferred from its text the way a browser-side
/// CSV reader would: numeric-looking text becomes a number, empty text becomes
/// `Missing` (never zero), everything else stays text.
#[derive(Debug, Clone)]
pub enum Value {
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Infer the type of a raw CSV field.
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Value::Missing;
        }
        match s {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        match parse_number(s) {
            Some(v) => Value::Number(v),
            None => Value::Text(s.to_string()),
        }
    }

    /// The numeric payload, if this cell holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// The numeric payload if it is a finite number (usable as a coordinate).
    pub fn as_finite(&self) -> Option<f64> {
        self.as_f64().filter(|v| v.is_finite())
    }
}

/// Numbers accepted by the inference rule. Rust's float parser also accepts
/// `inf` / `nan` spelled in any case, which must stay text here.
fn parse_number(s: &str) -> Option<f64> {
    match s {
        "NaN" => return Some(f64::NAN),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let numeric_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric_chars {
        return None;
    }
    s.parse::<f64>().ok()
}

// -- Manual Eq/Ord/Hash so Value can key maps (categories) --

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;
        fn discriminant(v: &Value) -> u8 {
            match v {
                Missing => 0,
                Bool(_) => 1,
                Number(_) => 2,
                Text(_) => 3,
            }
        }
        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => discriminant(self).cmp(&discriminant(other)),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Text(s) => s.hash(state),
            Value::Number(f) => f.to_bits().hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Missing => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "NA"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(v) if v.is_infinite() => {
                write!(f, "{}", if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Value::infer(&raw))
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the penguins table
// ---------------------------------------------------------------------------

/// One observed specimen. Columns are matched by header name.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub species: Value,
    pub island: Value,
    pub bill_length_mm: Value,
    pub bill_depth_mm: Value,
    pub flipper_length_mm: Value,
    pub body_mass_g: Value,
    pub sex: Value,
    pub year: Value,
}

impl Record {
    /// `(bill_length_mm, flipper_length_mm)` when both are finite numbers.
    pub fn plotted_point(&self) -> Option<(f64, f64)> {
        Some((
            self.bill_length_mm.as_finite()?,
            self.flipper_length_mm.as_finite()?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All parsed rows in file order. Built once by the loader, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of rows, including ones that cannot be plotted.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
