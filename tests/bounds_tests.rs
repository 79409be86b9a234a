#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use space_traffic::simulation::geometric_utils::reflect_axis;
use space_traffic::simulation::playable_rect::PlayableRect;
use space_traffic::simulation::ship::Ship;
use space_traffic::simulation::vector::Vec2;
use std::f32::consts::TAU;

fn create_test_rect() -> PlayableRect {
    PlayableRect::from_scene(2048.0, 1536.0, 2.0)
}

fn ship_at(pos: Vec2, velocity: Vec2) -> Ship {
    let mut ship = Ship::new(pos, 800.0, TAU);
    ship.velocity = velocity;
    ship
}

#[test]
fn test_playable_rect_from_scene() {
    let rect = create_test_rect();

    assert_eq!(rect, PlayableRect::new(0.0, 256.0, 2048.0, 1280.0));
    assert_eq!(rect.width(), 2048.0);
    assert_eq!(rect.height(), 1024.0);
    assert_eq!(rect.center(), Vec2::new(1024.0, 768.0));
    assert!(rect.contains(Vec2::new(0.0, 256.0)));
    assert!(!rect.contains(Vec2::new(100.0, 100.0)));
}

#[test]
fn test_playable_band_never_exceeds_scene() {
    // 1000 / 2 = 500 is taller than the scene
    let rect = PlayableRect::from_scene(1000.0, 300.0, 2.0);
    assert_eq!(rect, PlayableRect::new(0.0, 0.0, 1000.0, 300.0));
}

#[test]
fn test_left_wall_reflects_velocity() {
    let rect = PlayableRect::new(0.0, 0.0, 2048.0, 768.0);
    let mut ship = ship_at(Vec2::new(0.0, 50.0), Vec2::new(-800.0, 0.0));

    let contacts = ship.clamp_to_bounds(&rect);

    assert!(contacts.x.min);
    assert!(!contacts.y.any());
    assert_eq!(ship.pose.pos, Vec2::new(0.0, 50.0));
    assert_eq!(ship.velocity, Vec2::new(800.0, 0.0));
}

#[test]
fn test_overshoot_is_pinned_to_wall() {
    let rect = create_test_rect();
    let mut ship = ship_at(Vec2::new(2100.0, 700.0), Vec2::new(480.0, 640.0));

    ship.clamp_to_bounds(&rect);

    assert_eq!(ship.pose.pos, Vec2::new(2048.0, 700.0));
    assert_eq!(ship.velocity, Vec2::new(-480.0, 640.0));
}

#[test]
fn test_corner_reflects_both_axes() {
    let rect = create_test_rect();
    let mut ship = ship_at(Vec2::new(-10.0, 1300.0), Vec2::new(-480.0, 640.0));

    let contacts = ship.clamp_to_bounds(&rect);

    assert!(contacts.x.min && contacts.y.max);
    assert_eq!(ship.pose.pos, Vec2::new(0.0, 1280.0));
    assert_eq!(ship.velocity, Vec2::new(480.0, -640.0));
    assert_eq!(ship.velocity.length(), 800.0);
}

#[test]
fn test_inside_is_untouched() {
    let rect = create_test_rect();
    let mut ship = ship_at(Vec2::new(500.0, 500.0), Vec2::new(0.0, 800.0));

    let contacts = ship.clamp_to_bounds(&rect);

    assert!(!contacts.any());
    assert_eq!(ship.pose.pos, Vec2::new(500.0, 500.0));
    assert_eq!(ship.velocity, Vec2::new(0.0, 800.0));
}

#[test]
fn test_zero_velocity_stays_zero_on_contact() {
    let rect = create_test_rect();
    let mut ship = ship_at(Vec2::new(2048.0, 256.0), Vec2::ZERO);

    let contacts = ship.clamp_to_bounds(&rect);

    assert!(contacts.x.max && contacts.y.min);
    assert!(ship.velocity.is_zero());
}

#[test]
fn test_reflect_axis_on_degenerate_range() {
    // min == max touches both walls and flips twice
    let mut pos = 5.0;
    let mut vel = 3.0;
    let contact = reflect_axis(&mut pos, &mut vel, 5.0, 5.0);
    assert!(contact.min && contact.max);
    assert_eq!(pos, 5.0);
    assert_eq!(vel, 3.0);
}

#[test]
fn test_containment_for_any_position() {
    let rect = create_test_rect();
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..1000 {
        let pos = Vec2::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6));
        let velocity = Vec2::from_angle(rng.random_range(-3.2..3.2)) * 800.0;
        let mut ship = ship_at(pos, velocity);

        let contacts = ship.clamp_to_bounds(&rect);

        assert!(rect.contains(ship.pose.pos), "{:?} escaped", ship.pose.pos);
        if contacts.x.any() {
            assert_eq!(ship.velocity.x, -velocity.x);
        }
        if contacts.y.any() {
            assert_eq!(ship.velocity.y, -velocity.y);
        }
    }
}

#[test]
fn test_containment_for_non_finite_positions() {
    let rect = create_test_rect();

    for pos in [
        Vec2::new(f32::INFINITY, f32::NEG_INFINITY),
        Vec2::new(f32::NAN, 700.0),
        Vec2::new(10.0, f32::NAN),
    ] {
        let mut ship = ship_at(pos, Vec2::new(800.0, 0.0));
        ship.clamp_to_bounds(&rect);
        assert!(rect.contains(ship.pose.pos), "{:?} escaped", ship.pose.pos);
    }
}
