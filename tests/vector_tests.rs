#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use space_traffic::simulation::geometric_utils::{shortest_angle_between, wrap_angle};
use space_traffic::simulation::vector::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn test_vector_arithmetic() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, -2.0);

    assert_eq!(a + b, Vec2::new(4.0, 2.0));
    assert_eq!(a - b, Vec2::new(2.0, 6.0));
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert_eq!(a.dot(b), -5.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(a.distance(Vec2::ZERO), 5.0);
}

#[test]
fn test_normalize_zero_vector_is_not_nan() {
    assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    assert!(Vec2::ZERO.try_normalize(0.0).is_none());
    assert!(Vec2::new(1e-6, 0.0).try_normalize(1e-4).is_none());

    let unit = Vec2::new(0.0, -7.0).normalize();
    assert_eq!(unit, Vec2::new(0.0, -1.0));
}

#[test]
fn test_vector_angle() {
    assert_abs_diff_eq!(Vec2::new(1.0, 0.0).angle(), 0.0);
    assert_abs_diff_eq!(Vec2::new(0.0, 1.0).angle(), FRAC_PI_2);
    assert_abs_diff_eq!(Vec2::new(-1.0, 0.0).angle(), PI);
    assert_abs_diff_eq!(Vec2::new(0.0, -1.0).angle(), -FRAC_PI_2);

    let v = Vec2::from_angle(1.0);
    assert_abs_diff_eq!(v.angle(), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
}

#[test]
fn test_shortest_angle_takes_short_way_around() {
    // 350 degrees forward is 10 degrees back
    let from = 0.0;
    let to = 350.0_f32.to_radians();
    assert_abs_diff_eq!(
        shortest_angle_between(from, to),
        -10.0_f32.to_radians(),
        epsilon = 1e-5
    );

    // across the ±π seam
    assert_abs_diff_eq!(shortest_angle_between(3.0, -3.0), TAU - 6.0, epsilon = 1e-5);
    assert_abs_diff_eq!(shortest_angle_between(-3.0, 3.0), 6.0 - TAU, epsilon = 1e-5);

    // multiple turns collapse
    assert_abs_diff_eq!(shortest_angle_between(0.0, 2.0 * TAU + 0.1), 0.1, epsilon = 1e-5);
}

#[test]
fn test_half_turn_resolves_to_positive_pi() {
    assert_eq!(shortest_angle_between(0.0, PI), PI);
    assert_eq!(shortest_angle_between(0.0, -PI), PI);
    assert_eq!(shortest_angle_between(PI, 0.0), PI);
}

#[test]
fn test_shortest_angle_range() {
    let mut angle = -20.0_f32;
    while angle < 20.0 {
        let diff = shortest_angle_between(0.3, angle);
        assert!(diff > -PI && diff <= PI, "{} out of range for {}", diff, angle);
        angle += 0.037;
    }
}

#[test]
fn test_wrap_angle() {
    assert_abs_diff_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-5);
    assert_abs_diff_eq!(wrap_angle(-TAU - 0.5), -0.5, epsilon = 1e-5);
    assert_eq!(wrap_angle(-PI), PI);
}

#[test]
fn test_normalize_huge_vector() {
    let unit = Vec2::new(3.0e38, -3.0e38).normalize();
    assert_abs_diff_eq!(unit.length(), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(unit.x, -unit.y, epsilon = 1e-6);

    assert!(Vec2::new(f32::INFINITY, 0.0).try_normalize(0.0).is_none());
}
