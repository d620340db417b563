//! Coordinate frames shared by the circle diagram and the wave plot.
//!
//! Both diagrams are drawn in screen space where `y` grows downward, while the
//! math they depict has `y` growing upward. Each frame owns that inversion so
//! no other module has to negate a coordinate by hand.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use serde::Serialize;

use crate::config::{CircleLayout, WaveLayout};
use crate::consts::FULL_TURN;

/// A point in screen space (CSS pixels, `y` down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of the unit circle on screen: its center and its radius in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFrame {
    pub center: Point,
    pub radius: f64,
}

impl CircleFrame {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Frame centered in a square viewport, as described by the layout config.
    #[must_use]
    pub fn from_layout(layout: &CircleLayout) -> Self {
        let half = layout.viewport * 0.5;
        Self::new(Point::new(half, half), layout.radius)
    }

    /// Map unit-circle coordinates (math orientation) to screen space.
    #[must_use]
    pub fn to_screen(&self, ux: f64, uy: f64) -> Point {
        Point {
            x: self.center.x + ux * self.radius,
            y: self.center.y - uy * self.radius,
        }
    }

    /// Map a screen point back to unit-circle coordinates.
    ///
    /// A zero radius maps everything onto the origin.
    #[must_use]
    pub fn to_unit(&self, screen: Point) -> (f64, f64) {
        if self.radius.abs() < f64::EPSILON {
            return (0.0, 0.0);
        }
        (
            (screen.x - self.center.x) / self.radius,
            (self.center.y - screen.y) / self.radius,
        )
    }

    /// The point on the circle at `angle` radians.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point {
        self.to_screen(angle.cos(), angle.sin())
    }
}

/// A labelled position along the wave plot's horizontal axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub x: f64,
    pub label: &'static str,
}

/// Maps `(angle, value)` pairs onto the wave plot.
///
/// Angle `0..=2π` spans the plot width left to right; value `0` sits on the
/// vertical center line and one unit of value is `amplitude` pixels tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub left: f64,
    pub top: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub center_y: f64,
    pub amplitude: f64,
}

impl PlotFrame {
    #[must_use]
    pub fn from_layout(layout: &WaveLayout) -> Self {
        let plot_width = layout.width - layout.padding * 2.0;
        let plot_height = layout.height - layout.padding * 2.0;
        Self {
            left: layout.padding,
            top: layout.padding,
            plot_width,
            plot_height,
            center_y: layout.height * 0.5,
            amplitude: plot_height / layout.amplitude_divisor,
        }
    }

    /// Screen x for an angle in `[0, 2π]`.
    #[must_use]
    pub fn x_for(&self, angle: f64) -> f64 {
        self.left + (angle / FULL_TURN) * self.plot_width
    }

    /// Screen y for a function value.
    #[must_use]
    pub fn y_for(&self, value: f64) -> f64 {
        self.center_y - value * self.amplitude
    }

    #[must_use]
    pub fn point(&self, angle: f64, value: f64) -> Point {
        Point::new(self.x_for(angle), self.y_for(value))
    }

    /// Bottom edge of the plotting area.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.plot_height
    }

    /// Axis labels at 0, π and 2π.
    #[must_use]
    pub fn ticks(&self) -> [Tick; 3] {
        [
            Tick { x: self.x_for(0.0), label: "0 (0°)" },
            Tick { x: self.x_for(FULL_TURN * 0.5), label: "π (180°)" },
            Tick { x: self.x_for(FULL_TURN), label: "2π (360°)" },
        ]
    }
}
