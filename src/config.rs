//! Visualization configuration: thresholds, layouts and the function set.
//!
//! Every field has a default, so a host may pass a partial JSON document (or
//! none at all) and only override what it cares about.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ANGLE_ARC_RADIUS, CIRCLE_RADIUS, CIRCLE_VIEWPORT, DEFAULT_ANGLE, DENOMINATOR_EPSILON, DISPLAY_UNBOUNDED,
    SEGMENT_RATIO_CLAMP, SEGMENT_RECIPROCAL_CLAMP, WAVE_AMPLITUDE_DIVISOR, WAVE_BOUND, WAVE_HEIGHT, WAVE_PADDING,
    WAVE_PRIMARY_CLAMP, WAVE_RESOLUTION, WAVE_WIDTH,
};
use crate::trig::TrigFn;

/// Error returned by [`VizConfig::from_json`] and [`VizConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("wave resolution must be at least 1")]
    ZeroResolution,
    #[error("wave padding {padding} leaves no plot area in a {width}x{height} viewport")]
    PaddingTooLarge { padding: f64, width: f64, height: f64 },
    #[error("circle radius {radius} does not fit a {viewport}px viewport")]
    RadiusTooLarge { radius: f64, viewport: f64 },
    #[error("initial angle must be finite, got {0}")]
    InitialAngle(f64),
}

/// Numeric thresholds, each tunable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Denominators below this magnitude are treated as zero.
    pub epsilon: f64,
    /// Readouts above this magnitude show "∞".
    pub display_unbounded: f64,
    /// Tangent/cotangent circle segments are suppressed at or beyond this value.
    pub segment_ratio_clamp: f64,
    /// Secant/cosecant circle segments are suppressed at or beyond this value.
    pub segment_reciprocal_clamp: f64,
    /// Waveform samples beyond this magnitude break the polyline.
    pub wave_bound: f64,
    /// Sin/cos are clamped to this before being mapped onto the plot.
    pub wave_primary_clamp: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            epsilon: DENOMINATOR_EPSILON,
            display_unbounded: DISPLAY_UNBOUNDED,
            segment_ratio_clamp: SEGMENT_RATIO_CLAMP,
            segment_reciprocal_clamp: SEGMENT_RECIPROCAL_CLAMP,
            wave_bound: WAVE_BOUND,
            wave_primary_clamp: WAVE_PRIMARY_CLAMP,
        }
    }
}

impl Thresholds {
    /// Segment clamp that applies to `func`'s circle construction.
    #[must_use]
    pub fn segment_clamp(&self, func: TrigFn) -> f64 {
        match func {
            TrigFn::Sec | TrigFn::Csc => self.segment_reciprocal_clamp,
            _ => self.segment_ratio_clamp,
        }
    }
}

/// Circle diagram layout, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleLayout {
    /// Edge of the square viewport; the circle is centered in it.
    pub viewport: f64,
    pub radius: f64,
    /// Radius of the arc drawn at the center to mark the angle.
    pub arc_radius: f64,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self { viewport: CIRCLE_VIEWPORT, radius: CIRCLE_RADIUS, arc_radius: ANGLE_ARC_RADIUS }
    }
}

/// Wave plot layout, in CSS pixels, plus its sampling resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Sampling intervals per period; the sampler takes `resolution + 1` samples.
    pub resolution: usize,
    /// Plot height divided by this is the pixel height of one unit.
    pub amplitude_divisor: f64,
}

impl Default for WaveLayout {
    fn default() -> Self {
        Self {
            width: WAVE_WIDTH,
            height: WAVE_HEIGHT,
            padding: WAVE_PADDING,
            resolution: WAVE_RESOLUTION,
            amplitude_divisor: WAVE_AMPLITUDE_DIVISOR,
        }
    }
}

/// Which reciprocal/ratio functions are shown. Sin and cos always are.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionSet {
    pub tan: bool,
    pub cot: bool,
    pub sec: bool,
    pub csc: bool,
}

impl Default for FunctionSet {
    fn default() -> Self {
        Self { tan: true, cot: true, sec: true, csc: true }
    }
}

impl FunctionSet {
    /// Only sin, cos and tan, as on the basic unit-circle page.
    #[must_use]
    pub fn basic() -> Self {
        Self { tan: true, cot: false, sec: false, csc: false }
    }

    #[must_use]
    pub fn contains(&self, func: TrigFn) -> bool {
        match func {
            TrigFn::Sin | TrigFn::Cos => true,
            TrigFn::Tan => self.tan,
            TrigFn::Cot => self.cot,
            TrigFn::Sec => self.sec,
            TrigFn::Csc => self.csc,
        }
    }

    /// Enabled functions in readout order.
    pub fn iter(&self) -> impl Iterator<Item = TrigFn> + '_ {
        TrigFn::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub thresholds: Thresholds,
    pub circle: CircleLayout,
    pub wave: WaveLayout,
    pub functions: FunctionSet,
    /// Angle in radians at session start.
    pub initial_angle: f64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            circle: CircleLayout::default(),
            wave: WaveLayout::default(),
            functions: FunctionSet::default(),
            initial_angle: DEFAULT_ANGLE,
        }
    }
}

impl VizConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields, or
    /// any error from [`VizConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        tracing::debug!(
            resolution = config.wave.resolution,
            epsilon = config.thresholds.epsilon,
            "config loaded"
        );
        Ok(config)
    }

    /// Check that every threshold and layout value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        positive("thresholds.epsilon", t.epsilon)?;
        positive("thresholds.display_unbounded", t.display_unbounded)?;
        positive("thresholds.segment_ratio_clamp", t.segment_ratio_clamp)?;
        positive("thresholds.segment_reciprocal_clamp", t.segment_reciprocal_clamp)?;
        positive("thresholds.wave_bound", t.wave_bound)?;
        positive("thresholds.wave_primary_clamp", t.wave_primary_clamp)?;

        let c = &self.circle;
        positive("circle.viewport", c.viewport)?;
        positive("circle.radius", c.radius)?;
        positive("circle.arc_radius", c.arc_radius)?;
        if c.radius * 2.0 > c.viewport {
            return Err(ConfigError::RadiusTooLarge { radius: c.radius, viewport: c.viewport });
        }

        let w = &self.wave;
        positive("wave.width", w.width)?;
        positive("wave.height", w.height)?;
        positive("wave.amplitude_divisor", w.amplitude_divisor)?;
        if w.resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if !w.padding.is_finite() || w.padding < 0.0 || w.padding * 2.0 >= w.width.min(w.height) {
            return Err(ConfigError::PaddingTooLarge { padding: w.padding, width: w.width, height: w.height });
        }

        if !self.initial_angle.is_finite() {
            return Err(ConfigError::InitialAngle(self.initial_angle));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
