#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// normalize_radians
// =============================================================

#[test]
fn normalize_keeps_values_in_range() {
    assert_eq!(normalize_radians(0.0), 0.0);
    assert!(approx_eq(normalize_radians(1.0), 1.0));
    assert!(approx_eq(normalize_radians(TAU + 1.0), 1.0));
    assert!(approx_eq(normalize_radians(-FRAC_PI_2), 3.0 * FRAC_PI_2));
    assert!(approx_eq(normalize_radians(-5.0 * TAU + PI), PI));
}

#[test]
fn normalize_full_turn_is_zero() {
    assert_eq!(normalize_radians(TAU), 0.0);
}

#[test]
fn normalize_tiny_negative_never_reaches_full_turn() {
    let n = normalize_radians(-1e-18);
    assert!((0.0..TAU).contains(&n));
}

#[test]
fn normalize_clears_negative_zero() {
    let n = normalize_radians(-0.0);
    assert!(n.is_sign_positive());
}

#[test]
fn normalize_preserves_trig_values() {
    for raw in [-12.3, -1.0, 0.7, 7.9, 100.0] {
        let n = normalize_radians(raw);
        assert!((raw.sin() - n.sin()).abs() < 1e-9);
        assert!((raw.cos() - n.cos()).abs() < 1e-9);
    }
}

// =============================================================
// Degrees and labels
// =============================================================

#[test]
fn normalized_degrees_wraps() {
    assert!(approx_eq(normalized_degrees(FRAC_PI_4), 45.0));
    assert!(approx_eq(normalized_degrees(-FRAC_PI_2), 270.0));
}

#[test]
fn slider_maps_degrees_to_radians() {
    assert!(approx_eq(radians_from_slider(90.0), FRAC_PI_2));
    assert!(approx_eq(radians_from_slider(360.0), TAU));
    assert!(approx_eq(slider_from_radians(PI), 180.0));
}

#[test]
fn degrees_label_rounds_to_whole_degree() {
    assert_eq!(format_degrees_label(FRAC_PI_4), "45°");
    assert_eq!(format_degrees_label(0.0), "0°");
    assert_eq!(format_degrees_label(-FRAC_PI_2), "270°");
}

#[test]
fn degrees_label_folds_rounding_to_full_turn() {
    assert_eq!(format_degrees_label(359.8_f64.to_radians()), "0°");
}

#[test]
fn pi_label_two_decimals() {
    assert_eq!(format_pi_label(FRAC_PI_4), "0.25π");
    assert_eq!(format_pi_label(PI), "1.00π");
    assert_eq!(format_pi_label(TAU + FRAC_PI_2), "0.50π");
}

// =============================================================
// pointer_to_angle
// =============================================================

#[test]
fn pointer_directly_above_center_is_half_pi() {
    let a = pointer_to_angle(Point::new(150.0, 50.0), Point::new(150.0, 150.0));
    assert!(approx_eq(a, FRAC_PI_2));
}

#[test]
fn pointer_cardinal_directions() {
    let c = Point::new(150.0, 150.0);
    assert!(approx_eq(pointer_to_angle(Point::new(250.0, 150.0), c), 0.0));
    assert!(approx_eq(pointer_to_angle(Point::new(50.0, 150.0), c), PI));
    assert!(approx_eq(pointer_to_angle(Point::new(150.0, 250.0), c), 3.0 * FRAC_PI_2));
}

#[test]
fn pointer_lower_right_is_fourth_quadrant() {
    let a = pointer_to_angle(Point::new(200.0, 200.0), Point::new(150.0, 150.0));
    assert!(approx_eq(a, 7.0 * FRAC_PI_4));
}

#[test]
fn pointer_result_always_in_range() {
    let c = Point::new(0.0, 0.0);
    for i in 0..72 {
        let t = f64::from(i) * TAU / 72.0;
        let a = pointer_to_angle(Point::new(t.cos() * 40.0, -t.sin() * 40.0), c);
        assert!((0.0..TAU).contains(&a), "angle {a} out of range");
    }
}

#[test]
fn pointer_on_center_is_stable_and_finite() {
    let c = Point::new(150.0, 150.0);
    let a = pointer_to_angle(c, c);
    let b = pointer_to_angle(c, c);
    assert!(a.is_finite());
    assert_eq!(a, b);
    assert!((0.0..TAU).contains(&a));
}

// =============================================================
// AngleModel
// =============================================================

#[test]
fn model_default_is_quarter_pi() {
    let m = AngleModel::default();
    assert!(approx_eq(m.get(), FRAC_PI_4));
    assert_eq!(m.revision(), 0);
}

#[test]
fn model_accepts_any_finite_real() {
    let mut m = AngleModel::default();
    assert!(m.set(-100.0));
    assert_eq!(m.get(), -100.0);
    assert!((0.0..TAU).contains(&m.normalized()));
}

#[test]
fn model_set_bumps_revision() {
    let mut m = AngleModel::default();
    m.set(1.0);
    m.set(2.0);
    assert_eq!(m.revision(), 2);
}

#[test]
fn model_rejects_non_finite() {
    let mut m = AngleModel::new(1.0);
    assert!(!m.set(f64::NAN));
    assert!(!m.set(f64::INFINITY));
    assert_eq!(m.get(), 1.0);
    assert_eq!(m.revision(), 0);
}

#[test]
fn model_new_with_non_finite_falls_back_to_default() {
    let m = AngleModel::new(f64::NAN);
    assert!(approx_eq(m.get(), FRAC_PI_4));
}

#[test]
fn model_set_degrees() {
    let mut m = AngleModel::default();
    assert!(m.set_degrees(180.0));
    assert!(approx_eq(m.get(), PI));
    assert!(approx_eq(m.degrees(), 180.0));
}
