//! Angle state and the conversions that feed it.
//!
//! [`AngleModel`] is the single owner of the session's angle. Everything else
//! in the crate derives from the value it returns; nothing holds a copy that
//! outlives one derivation pass.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::PI;

use crate::consts::{DEFAULT_ANGLE, FULL_TURN, SLIDER_MAX_DEG};
use crate::frame::Point;

/// Fold any finite angle into `[0, 2π)`.
///
/// Tiny negative inputs can round up to exactly `2π`; those fold back to `0`.
/// Negative zero comes out as positive zero.
#[must_use]
pub fn normalize_radians(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN { 0.0 } else { wrapped + 0.0 }
}

/// Normalized angle expressed in degrees, `[0, 360)`.
#[must_use]
pub fn normalized_degrees(angle: f64) -> f64 {
    normalize_radians(angle).to_degrees()
}

/// Slider input (degrees, conventionally `0..=360`) to radians.
#[must_use]
pub fn radians_from_slider(deg: f64) -> f64 {
    deg.to_radians()
}

/// Slider position (degrees) for the current angle.
#[must_use]
pub fn slider_from_radians(angle: f64) -> f64 {
    normalized_degrees(angle).clamp(0.0, SLIDER_MAX_DEG)
}

/// Whole-degree label, e.g. `"45°"`.
#[must_use]
pub fn format_degrees_label(angle: f64) -> String {
    let deg = normalized_degrees(angle).round();
    // 359.6° rounds up to a full turn.
    let deg = if deg >= 360.0 { 0.0 } else { deg };
    format!("{deg:.0}°")
}

/// Multiple-of-π label to two decimals, e.g. `"0.25π"`.
#[must_use]
pub fn format_pi_label(angle: f64) -> String {
    format!("{:.2}π", normalize_radians(angle) / PI)
}

/// Angle of the vector from `center` to `pointer`, in `[0, 2π)`.
///
/// Screen `y` grows downward, so the vertical component is negated before the
/// four-quadrant arctangent to keep counter-clockwise positive. When the two
/// points coincide the result is whatever `atan2(-0, 0)` yields after
/// normalization (`0`); it is stable, not meaningful.
#[must_use]
pub fn pointer_to_angle(pointer: Point, center: Point) -> f64 {
    let dx = pointer.x - center.x;
    let dy = -(pointer.y - center.y);
    normalize_radians(dy.atan2(dx))
}

/// Owner of the current angle.
///
/// Holds the raw value as set (any finite real) and a revision counter that
/// bumps on every accepted write, so readers can tell whether a derivation
/// pass they cached is stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleModel {
    angle: f64,
    revision: u64,
}

impl Default for AngleModel {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE)
    }
}

impl AngleModel {
    #[must_use]
    pub fn new(angle: f64) -> Self {
        let angle = if angle.is_finite() { angle } else { DEFAULT_ANGLE };
        Self { angle, revision: 0 }
    }

    /// The raw angle in radians.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.angle
    }

    /// The angle folded into `[0, 2π)`.
    #[must_use]
    pub fn normalized(&self) -> f64 {
        normalize_radians(self.angle)
    }

    #[must_use]
    pub fn degrees(&self) -> f64 {
        normalized_degrees(self.angle)
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the angle. Returns `false` (and changes nothing) for NaN or ±∞.
    pub fn set(&mut self, angle: f64) -> bool {
        if !angle.is_finite() {
            tracing::warn!(angle, "ignoring non-finite angle");
            return false;
        }
        self.angle = angle;
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(angle, revision = self.revision, "angle set");
        true
    }

    /// Replace the angle from a slider value in degrees.
    pub fn set_degrees(&mut self, deg: f64) -> bool {
        self.set(radians_from_slider(deg))
    }
}
