//! Unit-circle constructions for the current angle.
//!
//! All six functions are drawn as line segments on the circle diagram:
//!
//! | Segment | From | To |
//! |---------|------|----|
//! | cos | center | `(cos, 0)` |
//! | sin | `(cos, 0)` | `P = (cos, sin)` |
//! | tan | `(1, 0)` | `(1, tan)` on the vertical tangent line |
//! | sec | center | `(1, tan)`, the radius extended to the tangent line |
//! | cot | `(0, 1)` | `(cot, 1)` on the horizontal tangent line |
//! | csc | center | `(cot, 1)` |
//!
//! Coordinates above are in unit-circle math orientation; the builder maps them
//! through a [`CircleFrame`] so the output is in screen space. A segment whose
//! ratio is undefined, or whose magnitude reaches its clamp, is left out entirely
//! rather than truncated.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::PI;

use serde::Serialize;

use crate::angle::normalize_radians;
use crate::config::{FunctionSet, Thresholds, VizConfig};
use crate::frame::{CircleFrame, Point};
use crate::trig::{TrigFn, evaluate};

/// What a segment depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentTag {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    /// Center to the point on the circle.
    Radius,
    /// Horizontal or vertical reference axis through the center.
    Axis,
}

impl From<TrigFn> for SegmentTag {
    fn from(func: TrigFn) -> Self {
        match func {
            TrigFn::Sin => Self::Sin,
            TrigFn::Cos => Self::Cos,
            TrigFn::Tan => Self::Tan,
            TrigFn::Cot => Self::Cot,
            TrigFn::Sec => Self::Sec,
            TrigFn::Csc => Self::Csc,
        }
    }
}

/// A tagged line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometrySegment {
    pub tag: SegmentTag,
    pub start: Point,
    pub end: Point,
}

/// The wedge marking the angle at the center of the circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleArc {
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    /// Set when the swept angle exceeds π.
    pub large_arc: bool,
}

impl AngleArc {
    /// SVG path data for the closed wedge (counter-clockwise on screen).
    #[must_use]
    pub fn svg_path(&self) -> String {
        format!(
            "M {} {} L {} {} A {r} {r} 0 {} 0 {} {} Z",
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            u8::from(self.large_arc),
            self.end.x,
            self.end.y,
            r = self.radius,
        )
    }
}

/// Everything the circle diagram needs for one angle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleGeometry {
    /// The point on the circle at the current angle.
    pub point: Point,
    pub segments: Vec<GeometrySegment>,
    pub arc: AngleArc,
}

impl CircleGeometry {
    /// The segment carrying `tag`, if it was produced. Axes come in pairs; this
    /// returns the horizontal one.
    #[must_use]
    pub fn segment(&self, tag: SegmentTag) -> Option<&GeometrySegment> {
        self.segments.iter().find(|s| s.tag == tag)
    }

    #[must_use]
    pub fn has(&self, tag: SegmentTag) -> bool {
        self.segment(tag).is_some()
    }
}

/// Builds [`CircleGeometry`] for any angle against a fixed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleGeometryBuilder {
    frame: CircleFrame,
    thresholds: Thresholds,
    functions: FunctionSet,
    arc_radius: f64,
    axis_extent: f64,
}

impl CircleGeometryBuilder {
    /// Builder with every function enabled, axes spanning one radius each way,
    /// and an angle arc a quarter of the radius.
    #[must_use]
    pub fn new(frame: CircleFrame, thresholds: Thresholds) -> Self {
        Self {
            frame,
            thresholds,
            functions: FunctionSet::default(),
            arc_radius: frame.radius * 0.25,
            axis_extent: frame.radius,
        }
    }

    /// Builder matching the configured circle layout.
    #[must_use]
    pub fn from_config(config: &VizConfig) -> Self {
        Self {
            frame: CircleFrame::from_layout(&config.circle),
            thresholds: config.thresholds,
            functions: config.functions,
            arc_radius: config.circle.arc_radius,
            axis_extent: config.circle.viewport * 0.5,
        }
    }

    #[must_use]
    pub fn with_functions(mut self, functions: FunctionSet) -> Self {
        self.functions = functions;
        self
    }

    #[must_use]
    pub fn frame(&self) -> CircleFrame {
        self.frame
    }

    pub fn set_frame(&mut self, frame: CircleFrame) {
        self.frame = frame;
    }

    #[must_use]
    pub fn build(&self, angle: f64) -> CircleGeometry {
        let reading = evaluate(angle, self.thresholds.epsilon);
        let (cos, sin) = (reading.cos, reading.sin);
        let frame = &self.frame;
        let center = frame.center;
        let point = frame.to_screen(cos, sin);

        let extent = self.axis_extent;
        let mut segments = vec![
            GeometrySegment {
                tag: SegmentTag::Axis,
                start: Point::new(center.x - extent, center.y),
                end: Point::new(center.x + extent, center.y),
            },
            GeometrySegment {
                tag: SegmentTag::Axis,
                start: Point::new(center.x, center.y - extent),
                end: Point::new(center.x, center.y + extent),
            },
            GeometrySegment { tag: SegmentTag::Radius, start: center, end: point },
            GeometrySegment { tag: SegmentTag::Cos, start: center, end: frame.to_screen(cos, 0.0) },
            GeometrySegment { tag: SegmentTag::Sin, start: frame.to_screen(cos, 0.0), end: point },
        ];

        if let Some(tan) = self.drawable(TrigFn::Tan, reading.tan) {
            segments.push(GeometrySegment {
                tag: SegmentTag::Tan,
                start: frame.to_screen(1.0, 0.0),
                end: frame.to_screen(1.0, tan),
            });
        }
        if let (Some(tan), Some(_)) = (reading.tan, self.drawable(TrigFn::Sec, reading.sec)) {
            segments.push(GeometrySegment { tag: SegmentTag::Sec, start: center, end: frame.to_screen(1.0, tan) });
        }
        if let Some(cot) = self.drawable(TrigFn::Cot, reading.cot) {
            segments.push(GeometrySegment {
                tag: SegmentTag::Cot,
                start: frame.to_screen(0.0, 1.0),
                end: frame.to_screen(cot, 1.0),
            });
        }
        if let (Some(cot), Some(_)) = (reading.cot, self.drawable(TrigFn::Csc, reading.csc)) {
            segments.push(GeometrySegment { tag: SegmentTag::Csc, start: center, end: frame.to_screen(cot, 1.0) });
        }

        CircleGeometry { point, segments, arc: self.arc(angle) }
    }

    /// `value` if `func` is enabled and its magnitude is under its clamp.
    fn drawable(&self, func: TrigFn, value: Option<f64>) -> Option<f64> {
        if !self.functions.contains(func) {
            return None;
        }
        value.filter(|v| v.abs() < self.thresholds.segment_clamp(func))
    }

    fn arc(&self, angle: f64) -> AngleArc {
        let center = self.frame.center;
        let r = self.arc_radius;
        let (sin, cos) = angle.sin_cos();
        AngleArc {
            center,
            radius: r,
            start: Point::new(center.x + r, center.y),
            end: Point::new(center.x + r * cos, center.y - r * sin),
            large_arc: normalize_radians(angle) > PI,
        }
    }
}
