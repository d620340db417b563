//! Waveform sampling over one period, split at discontinuities.
//!
//! Paths depend only on the plot layout, the thresholds and the resolution; the
//! current angle moves nothing but the cursor and the per-function markers.

#[cfg(test)]
#[path = "wave_test.rs"]
mod wave_test;

use serde::Serialize;

use crate::angle::normalize_radians;
use crate::config::{FunctionSet, Thresholds, VizConfig};
use crate::consts::FULL_TURN;
use crate::frame::{PlotFrame, Point};
use crate::trig::{TrigFn, evaluate_fn};

/// One function's graph: disjoint polylines in plot space, left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavePath {
    pub func: TrigFn,
    pub polylines: Vec<Vec<Point>>,
}

impl WavePath {
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(Vec::len).sum()
    }

    /// SVG path data: one `M` per polyline, `L` for each following point.
    #[must_use]
    pub fn svg_path(&self) -> String {
        let mut d = String::new();
        for line in &self.polylines {
            for (i, p) in line.iter().enumerate() {
                if !d.is_empty() {
                    d.push(' ');
                }
                let cmd = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!("{cmd} {} {}", p.x, p.y));
            }
        }
        d
    }
}

/// The current-angle marker on one function's graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub func: TrigFn,
    /// `None` when the function is undefined or off the plot at this angle.
    pub point: Option<Point>,
}

/// Samples functions over `[0, 2π]` onto a [`PlotFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformSampler {
    plot: PlotFrame,
    thresholds: Thresholds,
    functions: FunctionSet,
    resolution: usize,
}

impl WaveformSampler {
    /// Sampler with every function enabled. A resolution of zero is raised to one.
    #[must_use]
    pub fn new(plot: PlotFrame, thresholds: Thresholds, resolution: usize) -> Self {
        Self { plot, thresholds, functions: FunctionSet::default(), resolution: resolution.max(1) }
    }

    #[must_use]
    pub fn from_config(config: &VizConfig) -> Self {
        Self::new(PlotFrame::from_layout(&config.wave), config.thresholds, config.wave.resolution)
            .with_functions(config.functions)
    }

    #[must_use]
    pub fn with_functions(mut self, functions: FunctionSet) -> Self {
        self.functions = functions;
        self
    }

    #[must_use]
    pub fn plot(&self) -> PlotFrame {
        self.plot
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Sample `func` at `resolution + 1` evenly spaced angles across `[0, 2π]`.
    ///
    /// Sin and cos always come back as a single polyline. The others start a
    /// new polyline after any sample that is undefined or beyond the wave bound,
    /// and whenever the denominator changes sign between neighbouring samples
    /// (an asymptote crossed between them).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, func: TrigFn) -> WavePath {
        let n = self.resolution;
        let step = FULL_TURN / n as f64;

        if func.is_continuous() {
            let clamp = self.thresholds.wave_primary_clamp;
            let line = (0..=n)
                .map(|i| {
                    let t = i as f64 * step;
                    let v = evaluate_fn(func, t, self.thresholds.epsilon).unwrap_or_default();
                    self.plot.point(t, v.clamp(-clamp, clamp))
                })
                .collect();
            return WavePath { func, polylines: vec![line] };
        }

        let mut polylines = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut prev_den: Option<f64> = None;
        for i in 0..=n {
            let t = i as f64 * step;
            let value = evaluate_fn(func, t, self.thresholds.epsilon).filter(|v| v.abs() <= self.thresholds.wave_bound);
            let Some(v) = value else {
                close(&mut polylines, &mut current);
                prev_den = None;
                continue;
            };
            let den = denominator(func, t);
            if prev_den.is_some_and(|p| p * den < 0.0) {
                close(&mut polylines, &mut current);
            }
            prev_den = Some(den);
            current.push(self.plot.point(t, v));
        }
        close(&mut polylines, &mut current);

        tracing::trace!(%func, polylines = polylines.len(), "sampled waveform");
        WavePath { func, polylines }
    }

    /// Paths for every enabled function, in readout order.
    #[must_use]
    pub fn sample_all(&self) -> Vec<WavePath> {
        self.functions.iter().map(|f| self.sample(f)).collect()
    }

    /// Point on `func`'s graph at `angle` (not necessarily a sampled one).
    ///
    /// The angle is folded into `[0, 2π)`. Returns `None` when the value is
    /// undefined or beyond the wave bound, independent of sampling resolution.
    #[must_use]
    pub fn marker_position(&self, func: TrigFn, angle: f64) -> Option<Point> {
        let t = normalize_radians(angle);
        let value = evaluate_fn(func, t, self.thresholds.epsilon)?;
        if func.is_continuous() {
            let clamp = self.thresholds.wave_primary_clamp;
            return Some(self.plot.point(t, value.clamp(-clamp, clamp)));
        }
        (value.abs() <= self.thresholds.wave_bound).then(|| self.plot.point(t, value))
    }

    /// Markers for every enabled function.
    #[must_use]
    pub fn markers(&self, angle: f64) -> Vec<Marker> {
        self.functions
            .iter()
            .map(|func| Marker { func, point: self.marker_position(func, angle) })
            .collect()
    }

    /// Screen x of the vertical current-angle line.
    #[must_use]
    pub fn cursor_x(&self, angle: f64) -> f64 {
        self.plot.x_for(normalize_radians(angle))
    }
}

fn close(polylines: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if !current.is_empty() {
        polylines.push(std::mem::take(current));
    }
}

/// The quantity whose zero makes `func` blow up.
fn denominator(func: TrigFn, t: f64) -> f64 {
    match func {
        TrigFn::Tan | TrigFn::Sec => t.cos(),
        TrigFn::Cot | TrigFn::Csc => t.sin(),
        TrigFn::Sin | TrigFn::Cos => 1.0,
    }
}
