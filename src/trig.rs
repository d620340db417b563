//! The six trigonometric functions, evaluated with explicit singularities.
//!
//! A ratio whose denominator (`sin` or `cos`) falls below the configured
//! epsilon is `None`. That is an ordinary outcome here, not a fault: callers
//! hide the corresponding readout, segment or marker.

#[cfg(test)]
#[path = "trig_test.rs"]
mod trig_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown function name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trigonometric function: {0}")]
pub struct ParseFnError(pub String);

/// One of the six standard trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
}

impl TrigFn {
    /// All six, in readout order.
    pub const ALL: [Self; 6] = [Self::Sin, Self::Cos, Self::Tan, Self::Cot, Self::Sec, Self::Csc];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Sec => "sec",
            Self::Csc => "csc",
        }
    }

    /// Whether the function has no singularities (sin, cos).
    #[must_use]
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Sin | Self::Cos)
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrigFn {
    type Err = ParseFnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "cot" => Ok(Self::Cot),
            "sec" => Ok(Self::Sec),
            "csc" => Ok(Self::Csc),
            _ => Err(ParseFnError(s.to_string())),
        }
    }
}

/// Evaluate a single function at `angle`.
///
/// `None` when the defining denominator has magnitude below `epsilon`.
#[must_use]
pub fn evaluate_fn(func: TrigFn, angle: f64, epsilon: f64) -> Option<f64> {
    let (sin, cos) = angle.sin_cos();
    match func {
        TrigFn::Sin => Some(sin),
        TrigFn::Cos => Some(cos),
        TrigFn::Tan => ratio(sin, cos, epsilon),
        TrigFn::Cot => ratio(cos, sin, epsilon),
        TrigFn::Sec => ratio(1.0, cos, epsilon),
        TrigFn::Csc => ratio(1.0, sin, epsilon),
    }
}

fn ratio(num: f64, den: f64, epsilon: f64) -> Option<f64> {
    if den.abs() < epsilon {
        return None;
    }
    let value = num / den;
    value.is_finite().then_some(value)
}

/// Snapshot of all six values for one angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrigReading {
    pub sin: f64,
    pub cos: f64,
    pub tan: Option<f64>,
    pub cot: Option<f64>,
    pub sec: Option<f64>,
    pub csc: Option<f64>,
}

/// Evaluate all six functions at `angle`.
#[must_use]
pub fn evaluate(angle: f64, epsilon: f64) -> TrigReading {
    let (sin, cos) = angle.sin_cos();
    TrigReading {
        sin,
        cos,
        tan: ratio(sin, cos, epsilon),
        cot: ratio(cos, sin, epsilon),
        sec: ratio(1.0, cos, epsilon),
        csc: ratio(1.0, sin, epsilon),
    }
}

impl TrigReading {
    #[must_use]
    pub fn value(&self, func: TrigFn) -> Option<f64> {
        match func {
            TrigFn::Sin => Some(self.sin),
            TrigFn::Cos => Some(self.cos),
            TrigFn::Tan => self.tan,
            TrigFn::Cot => self.cot,
            TrigFn::Sec => self.sec,
            TrigFn::Csc => self.csc,
        }
    }

    /// `sin²`, `cos²` and their sum.
    #[must_use]
    pub fn identity(&self) -> PythagoreanIdentity {
        let sin_sq = self.sin * self.sin;
        let cos_sq = self.cos * self.cos;
        PythagoreanIdentity { sin_sq, cos_sq, sum: sin_sq + cos_sq }
    }
}

/// Terms of `sin²θ + cos²θ = 1` for the current angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PythagoreanIdentity {
    pub sin_sq: f64,
    pub cos_sq: f64,
    pub sum: f64,
}

/// Readout text for a value: three decimals, or `"∞"` when undefined or when
/// the magnitude exceeds `unbounded`.
#[must_use]
pub fn format_value(value: Option<f64>, unbounded: f64) -> String {
    match value {
        Some(v) if v.abs() <= unbounded => {
            let text = format!("{v:.3}");
            // Avoid "-0.000" for values like sin(2π).
            if text == "-0.000" { "0.000".to_string() } else { text }
        }
        _ => "∞".to_string(),
    }
}

/// Formatted readouts for all six functions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub sin: String,
    pub cos: String,
    pub tan: String,
    pub cot: String,
    pub sec: String,
    pub csc: String,
}

impl Readout {
    #[must_use]
    pub fn from_reading(reading: &TrigReading, unbounded: f64) -> Self {
        let fmt = |func| format_value(reading.value(func), unbounded);
        Self {
            sin: fmt(TrigFn::Sin),
            cos: fmt(TrigFn::Cos),
            tan: fmt(TrigFn::Tan),
            cot: fmt(TrigFn::Cot),
            sec: fmt(TrigFn::Sec),
            csc: fmt(TrigFn::Csc),
        }
    }
}
