#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::*;
use crate::config::WaveLayout;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn sampler(resolution: usize) -> WaveformSampler {
    WaveformSampler::new(PlotFrame::from_layout(&WaveLayout::default()), Thresholds::default(), resolution)
}

/// Plot-space y for the wave bound (3 units) above and below center.
fn bound_ys() -> (f64, f64) {
    let plot = PlotFrame::from_layout(&WaveLayout::default());
    (plot.y_for(3.0), plot.y_for(-3.0))
}

// =============================================================
// Continuous functions
// =============================================================

#[test]
fn sin_is_one_polyline_with_all_samples() {
    let path = sampler(100).sample(TrigFn::Sin);
    assert_eq!(path.polylines.len(), 1);
    assert_eq!(path.point_count(), 101);
}

#[test]
fn cos_starts_at_one_and_ends_at_one() {
    let plot = PlotFrame::from_layout(&WaveLayout::default());
    let path = sampler(100).sample(TrigFn::Cos);
    let line = &path.polylines[0];
    assert!(approx_eq(line[0].y, plot.y_for(1.0)));
    assert!(approx_eq(line[100].y, plot.y_for(1.0)));
    assert!(approx_eq(line[50].y, plot.y_for(-1.0)));
}

#[test]
fn samples_span_plot_left_to_right() {
    let plot = PlotFrame::from_layout(&WaveLayout::default());
    let path = sampler(10).sample(TrigFn::Sin);
    let line = &path.polylines[0];
    assert!(approx_eq(line[0].x, plot.left));
    assert!(approx_eq(line[10].x, plot.left + plot.plot_width));
    assert!(line.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn zero_resolution_is_raised_to_one() {
    let s = sampler(0);
    assert_eq!(s.resolution(), 1);
    assert_eq!(s.sample(TrigFn::Sin).point_count(), 2);
}

// =============================================================
// Discontinuous functions
// =============================================================

#[test]
fn tan_splits_at_asymptotes_for_every_resolution_from_four() {
    for n in 4..=256 {
        let path = sampler(n).sample(TrigFn::Tan);
        assert!(path.polylines.len() >= 2, "resolution {n} gave {} polylines", path.polylines.len());
    }
}

#[test]
fn tan_default_resolution_has_three_branches() {
    let path = sampler(100).sample(TrigFn::Tan);
    assert_eq!(path.polylines.len(), 3);
}

#[test]
fn tan_branches_never_straddle_an_asymptote() {
    let plot = PlotFrame::from_layout(&WaveLayout::default());
    let asymptotes = [plot.x_for(FRAC_PI_2), plot.x_for(3.0 * FRAC_PI_2)];
    for n in [4, 6, 7, 12, 100] {
        for line in sampler(n).sample(TrigFn::Tan).polylines {
            let (first, last) = (line[0].x, line[line.len() - 1].x);
            for a in asymptotes {
                assert!(!(first < a && a < last), "resolution {n} crosses asymptote at {a}");
            }
        }
    }
}

#[test]
fn reciprocal_paths_stay_within_bound() {
    let (top, bottom) = bound_ys();
    let s = sampler(200);
    for f in [TrigFn::Tan, TrigFn::Cot, TrigFn::Sec, TrigFn::Csc] {
        for line in s.sample(f).polylines {
            assert!(!line.is_empty());
            for p in line {
                assert!(p.y >= top - EPSILON && p.y <= bottom + EPSILON, "{f} point out of bound");
            }
        }
    }
}

#[test]
fn sec_and_csc_split_into_branches() {
    let s = sampler(100);
    assert!(s.sample(TrigFn::Sec).polylines.len() >= 2);
    assert!(s.sample(TrigFn::Csc).polylines.len() >= 2);
    assert!(s.sample(TrigFn::Cot).polylines.len() >= 2);
}

#[test]
fn svg_path_moves_once_per_polyline() {
    let path = sampler(100).sample(TrigFn::Tan);
    let d = path.svg_path();
    assert_eq!(d.matches('M').count(), path.polylines.len());
    assert!(d.starts_with("M "));
}

#[test]
fn sample_all_follows_function_set() {
    let s = sampler(20).with_functions(FunctionSet::basic());
    let funcs: Vec<_> = s.sample_all().into_iter().map(|p| p.func).collect();
    assert_eq!(funcs, vec![TrigFn::Sin, TrigFn::Cos, TrigFn::Tan]);
}

// =============================================================
// Markers
// =============================================================

#[test]
fn marker_for_sin_at_quarter_pi() {
    let plot = PlotFrame::from_layout(&WaveLayout::default());
    let p = sampler(100).marker_position(TrigFn::Sin, FRAC_PI_4).unwrap();
    assert!(approx_eq(p.x, plot.x_for(FRAC_PI_4)));
    assert!(approx_eq(p.y, plot.y_for(FRAC_PI_4.sin())));
}

#[test]
fn marker_hidden_at_asymptote() {
    let s = sampler(100);
    assert!(s.marker_position(TrigFn::Tan, FRAC_PI_2).is_none());
    assert!(s.marker_position(TrigFn::Csc, PI).is_none());
    assert!(s.marker_position(TrigFn::Cot, 0.0).is_none());
}

#[test]
fn marker_hidden_beyond_wave_bound() {
    // tan(75°) ≈ 3.73 > 3
    assert!(sampler(100).marker_position(TrigFn::Tan, 75.0_f64.to_radians()).is_none());
    // tan(70°) ≈ 2.75 ≤ 3
    assert!(sampler(100).marker_position(TrigFn::Tan, 70.0_f64.to_radians()).is_some());
}

#[test]
fn marker_independent_of_resolution() {
    let a = 1.234;
    assert_eq!(sampler(4).marker_position(TrigFn::Sec, a), sampler(500).marker_position(TrigFn::Sec, a));
}

#[test]
fn marker_normalizes_angle() {
    let s = sampler(100);
    let p1 = s.marker_position(TrigFn::Cos, 1.0).unwrap();
    let p2 = s.marker_position(TrigFn::Cos, 1.0 + TAU).unwrap();
    assert!(approx_eq(p1.x, p2.x));
    assert!(approx_eq(p1.y, p2.y));
}

#[test]
fn markers_cover_enabled_functions() {
    let markers = sampler(100).markers(FRAC_PI_2);
    assert_eq!(markers.len(), 6);
    let tan = markers.iter().find(|m| m.func == TrigFn::Tan).unwrap();
    assert!(tan.point.is_none());
    let csc = markers.iter().find(|m| m.func == TrigFn::Csc).unwrap();
    assert!(csc.point.is_some());
}

#[test]
fn cursor_tracks_normalized_angle() {
    let s = sampler(100);
    let plot = s.plot();
    assert!(approx_eq(s.cursor_x(PI), plot.x_for(PI)));
    assert!(approx_eq(s.cursor_x(-FRAC_PI_2), plot.x_for(3.0 * FRAC_PI_2)));
}
