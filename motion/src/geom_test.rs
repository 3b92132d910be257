#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- lerp ---

#[test]
fn lerp_factor_zero_keeps_start() {
    assert_eq!(lerp(3.0, 9.0, 0.0), 3.0);
}

#[test]
fn lerp_factor_one_reaches_end() {
    assert_eq!(lerp(3.0, 9.0, 1.0), 9.0);
}

#[test]
fn lerp_midpoint() {
    assert!(approx_eq(lerp(-10.0, 10.0, 0.5), 0.0));
}

#[test]
fn lerp_equal_endpoints_is_fixed_point() {
    for factor in [0.01, 0.15, 0.5, 0.99, 1.0] {
        assert_eq!(lerp(42.5, 42.5, factor), 42.5);
    }
}

// --- clamp_to_extent ---

#[test]
fn clamp_to_extent_bounds_both_sides() {
    assert_eq!(clamp_to_extent(-5.0, 100.0), 0.0);
    assert_eq!(clamp_to_extent(150.0, 100.0), 100.0);
    assert_eq!(clamp_to_extent(40.0, 100.0), 40.0);
}

#[test]
fn clamp_to_extent_zero_extent_collapses_to_zero() {
    assert_eq!(clamp_to_extent(40.0, 0.0), 0.0);
    assert_eq!(clamp_to_extent(-40.0, 0.0), 0.0);
}

#[test]
fn clamp_to_extent_negative_extent_does_not_panic() {
    assert_eq!(clamp_to_extent(10.0, -3.0), 0.0);
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_lerp_toward_moves_both_axes() {
    let p = Point::new(0.0, 100.0).lerp_toward(Point::new(100.0, 0.0), 0.25);
    assert!(approx_eq(p.x, 25.0));
    assert!(approx_eq(p.y, 75.0));
}

// --- Rect ---

#[test]
fn rect_to_local_subtracts_origin() {
    let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
    let local = rect.to_local(Point::new(130.0, 70.0));
    assert_eq!(local, Point::new(30.0, 20.0));
}

#[test]
fn rect_to_local_outside_is_negative() {
    let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
    let local = rect.to_local(Point::new(90.0, 40.0));
    assert_eq!(local, Point::new(-10.0, -10.0));
}

#[test]
fn rect_center_x() {
    assert_eq!(Rect::new(10.0, 0.0, 80.0, 20.0).center_x(), 50.0);
}

#[test]
fn rect_size() {
    assert_eq!(Rect::new(1.0, 2.0, 3.0, 4.0).size(), Size::new(3.0, 4.0));
}
