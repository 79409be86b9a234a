//! The steered ship: seek toward a destination, face the direction of travel,
//! bounce off the playable walls.
//!
//! Motion is constant-speed: a new destination sets the velocity to the unit
//! direction times [`Ship::move_speed`], and the velocity keeps that magnitude
//! until the ship arrives (velocity becomes zero). Heading is turned toward the
//! velocity at a bounded angular rate, independently of translation.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::geometric_utils::{AxisContact, reflect_axis, shortest_angle_between, wrap_angle};
use super::params::SteeringParams;
use super::playable_rect::PlayableRect;
use super::pose::Pose;
use super::vector::Vec2;

/// Coarse motion state derived from target and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// No destination, or arrived at it. Velocity is zero.
    Idle,
    /// En route to a destination with non-zero velocity.
    Seeking,
}

/// What a single [`Ship::advance`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing to do: no destination, resting on it, or stopped.
    Idle,
    /// This frame's motion budget covered the remaining distance; the ship was
    /// snapped onto the destination and stopped.
    Arrived,
    /// Translated along the velocity and turned toward it.
    Moved,
}

/// Wall contacts reported by [`Ship::clamp_to_bounds`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Contacts with the left/right walls.
    pub x: AxisContact,
    /// Contacts with the bottom/top walls.
    pub y: AxisContact,
}

impl Contacts {
    /// `true` if any wall was touched.
    pub fn any(self) -> bool {
        self.x.any() || self.y.any()
    }
}

/// The single steered entity.
///
/// `velocity` is either zero or has magnitude `move_speed`; only
/// [`Ship::set_destination`], arrival and wall reflection change it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Position and heading.
    pub pose: Pose,
    /// Current velocity in points per second.
    pub velocity: Vec2,
    /// Most recent accepted destination. Replaced, never cleared.
    pub target: Option<Vec2>,
    /// Linear speed in points per second.
    pub move_speed: f32,
    /// Maximum turn rate in radians per second.
    pub rotate_speed: f32,
    /// Seek offsets not longer than this are ignored.
    pub arrival_epsilon: f32,
}

impl Ship {
    /// Creates an idle ship at `pos`, heading along +x.
    ///
    /// # Arguments
    ///
    /// * `pos` - Starting position
    /// * `move_speed` - Linear speed in points per second
    /// * `rotate_speed` - Maximum turn rate in radians per second
    pub fn new(pos: Vec2, move_speed: f32, rotate_speed: f32) -> Self {
        Self {
            pose: Pose::new(pos, 0.0),
            velocity: Vec2::ZERO,
            target: None,
            move_speed,
            rotate_speed,
            arrival_epsilon: SteeringParams::default().arrival_epsilon,
        }
    }

    /// Creates an idle ship at `pos` using the speeds from `params`.
    pub fn from_params(pos: Vec2, params: &SteeringParams) -> Self {
        Self {
            arrival_epsilon: params.arrival_epsilon,
            ..Self::new(pos, params.move_speed, params.rotate_speed)
        }
    }

    /// Steers toward `point` at constant speed.
    ///
    /// Sets the velocity to the unit direction from the current position to
    /// `point` scaled by `move_speed`, and records `point` as the target.
    /// Returns `false` and changes nothing if `point` is not finite or lies
    /// within `arrival_epsilon` of the current position.
    pub fn set_destination(&mut self, point: Vec2) -> bool {
        if !point.is_finite() {
            warn!("ignoring non-finite destination {:?}", point);
            return false;
        }

        let offset = point - self.pose.pos;
        if !offset.is_finite() {
            warn!("offset to destination {:?} overflows, ignoring", point);
            return false;
        }
        let Some(direction) = offset.try_normalize(self.arrival_epsilon) else {
            debug!(
                "destination ({:.1}, {:.1}) is on top of the ship, ignoring",
                point.x, point.y
            );
            return false;
        };

        self.velocity = direction * self.move_speed;
        self.target = Some(point);
        true
    }

    /// Integrates one frame of motion.
    ///
    /// If this frame's motion budget (`move_speed * dt`) reaches the target,
    /// the ship lands exactly on it and stops. Otherwise it translates by
    /// `velocity * dt` and turns toward the velocity by at most
    /// `rotate_speed * dt`. Without a target, or with zero velocity, nothing
    /// moves or turns.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn advance(&mut self, dt: f32) -> Step {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let Some(target) = self.target else {
            return Step::Idle;
        };

        let remaining = (target - self.pose.pos).length();
        if remaining <= self.move_speed * dt {
            let was_moving = !self.velocity.is_zero();
            self.pose.pos = target;
            self.velocity = Vec2::ZERO;
            return if was_moving { Step::Arrived } else { Step::Idle };
        }

        // stopped off-target, e.g. snapped outside the band and clamped back in
        if self.velocity.is_zero() {
            return Step::Idle;
        }

        self.translate(dt);
        self.rotate(dt);
        Step::Moved
    }

    fn translate(&mut self, dt: f32) {
        self.pose.pos += self.velocity * dt;
    }

    fn rotate(&mut self, dt: f32) {
        let shortest = shortest_angle_between(self.pose.rot, self.velocity.angle());
        let amount = (self.rotate_speed * dt).min(shortest.abs());
        self.pose.rot = wrap_angle(self.pose.rot + shortest.signum() * amount);
    }

    /// Keeps the ship inside `rect`, reflecting the velocity off each wall it
    /// touches.
    ///
    /// Each axis is handled independently; on contact the position is pinned
    /// to the wall and that axis's velocity component changes sign.
    pub fn clamp_to_bounds(&mut self, rect: &PlayableRect) -> Contacts {
        let pos = &mut self.pose.pos;
        let vel = &mut self.velocity;
        Contacts {
            x: reflect_axis(&mut pos.x, &mut vel.x, rect.min_x, rect.max_x),
            y: reflect_axis(&mut pos.y, &mut vel.y, rect.min_y, rect.max_y),
        }
    }

    /// Current motion state.
    pub fn state(&self) -> MotionState {
        if self.target.is_some() && !self.velocity.is_zero() {
            MotionState::Seeking
        } else {
            MotionState::Idle
        }
    }
}
