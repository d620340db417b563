//! Shared numeric constants for the trigscope crate.
//!
//! Every threshold here is a presentation default; the live values come from
//! [`crate::config::VizConfig`] so hosts can tune them independently.

use std::f64::consts::{FRAC_PI_4, TAU};

// ── Angle ───────────────────────────────────────────────────────

/// Angle shown when a session starts (45°).
pub const DEFAULT_ANGLE: f64 = FRAC_PI_4;

/// One full turn in radians.
pub const FULL_TURN: f64 = TAU;

/// Upper bound of the slider input, in degrees.
pub const SLIDER_MAX_DEG: f64 = 360.0;

// ── Singularities ───────────────────────────────────────────────

/// Smallest denominator magnitude (|sin| or |cos|) treated as nonzero.
pub const DENOMINATOR_EPSILON: f64 = 0.01;

/// Readout magnitude above which a value is shown as "∞".
pub const DISPLAY_UNBOUNDED: f64 = 100.0;

/// Circle geometry: tangent/cotangent segments are dropped at or beyond this ratio.
pub const SEGMENT_RATIO_CLAMP: f64 = 10.0;

/// Circle geometry: secant/cosecant segments are dropped at or beyond this ratio.
pub const SEGMENT_RECIPROCAL_CLAMP: f64 = 5.0;

/// Wave plot: samples with a larger magnitude break the polyline.
pub const WAVE_BOUND: f64 = 3.0;

/// Wave plot: sin/cos are clamped to this magnitude before mapping.
pub const WAVE_PRIMARY_CLAMP: f64 = 1.5;

// ── Circle layout ───────────────────────────────────────────────

/// Square viewport edge of the circle diagram, in CSS pixels.
pub const CIRCLE_VIEWPORT: f64 = 300.0;

/// Unit circle radius, in CSS pixels.
pub const CIRCLE_RADIUS: f64 = 120.0;

/// Radius of the small arc marking the angle at the center.
pub const ANGLE_ARC_RADIUS: f64 = 30.0;

// ── Wave layout ─────────────────────────────────────────────────

pub const WAVE_WIDTH: f64 = 600.0;
pub const WAVE_HEIGHT: f64 = 200.0;
pub const WAVE_PADDING: f64 = 20.0;

/// Number of sampling intervals across one period (N + 1 samples).
pub const WAVE_RESOLUTION: usize = 100;

/// Plot height divided by this gives the pixel height of one unit.
pub const WAVE_AMPLITUDE_DIVISOR: f64 = 2.5;
