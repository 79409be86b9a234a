//! Per-frame steering controller.
//!
//! The host calls [`SteeringController::on_point_selected`] when the user
//! picks a point and [`SteeringController::on_frame`] once per rendered frame.
//! Each frame runs, in order:
//! - apply the newest pending point, if any
//! - derive `dt` from the frame timestamp
//! - integrate motion (translate, turn, or arrive)
//! - reflect off the playable walls
//!
//! The renderer reads [`SteeringController::pose`] and
//! [`SteeringController::velocity`] afterwards.

use std::sync::Arc;

use log::{debug, info};

use super::error::ParamsError;
use super::event_log::{EventKind, EventLog};
use super::frame_clock::FrameClock;
use super::geometric_utils::AxisContact;
use super::input::PendingPoint;
use super::params::SteeringParams;
use super::playable_rect::PlayableRect;
use super::pose::Pose;
use super::ship::{Contacts, MotionState, Ship, Step};
use super::vector::Vec2;

/// Owns the ship and advances it once per frame.
#[derive(Debug)]
pub struct SteeringController {
    params: SteeringParams,
    rect: PlayableRect,
    ship: Ship,
    clock: FrameClock,
    pending: Arc<PendingPoint>,
    event_log: EventLog,
    /// Simulated seconds, the sum of every applied `dt`.
    time: f32,
}

impl SteeringController {
    /// Creates a controller with the ship at its default start position.
    pub fn new(params: SteeringParams) -> Result<Self, ParamsError> {
        let start = params.start_position();
        Self::with_start(params, start)
    }

    /// Creates a controller with the ship at `start`.
    pub fn with_start(params: SteeringParams, start: Vec2) -> Result<Self, ParamsError> {
        params.validate()?;
        let rect = params.playable_rect();
        info!(
            "steering controller ready: playable rect x {:.0}..{:.0}, y {:.0}..{:.0}, speed {} pt/s",
            rect.min_x, rect.max_x, rect.min_y, rect.max_y, params.move_speed
        );

        Ok(Self {
            rect,
            ship: Ship::from_params(start, &params),
            clock: FrameClock::new(),
            pending: Arc::new(PendingPoint::new()),
            event_log: EventLog::new(params.event_log_capacity),
            time: 0.0,
            params,
        })
    }

    /// Handle for submitting points from another thread.
    ///
    /// Points submitted here are applied at the start of the next
    /// [`SteeringController::on_frame`], newest wins.
    pub fn input_handle(&self) -> Arc<PendingPoint> {
        Arc::clone(&self.pending)
    }

    /// Steers toward `point` (scene coordinates), effective immediately.
    ///
    /// Returns `false` if the point was rejected (non-finite, or on top of the
    /// ship).
    pub fn on_point_selected(&mut self, point: Vec2) -> bool {
        if !self.ship.set_destination(point) {
            return false;
        }
        let heading = self.ship.velocity.angle().to_degrees();
        debug!(
            "seeking ({:.1}, {:.1}), heading {:.1} deg",
            point.x, point.y, heading
        );
        self.event_log.log(
            self.time,
            format!("Destination ({:.0}, {:.0})", point.x, point.y),
            EventKind::Destination,
        );
        true
    }

    /// Runs one frame stamped `timestamp` (seconds, monotonic).
    ///
    /// The first frame advances by zero.
    pub fn on_frame(&mut self, timestamp: f64) {
        if let Some(point) = self.pending.take() {
            self.on_point_selected(point);
        }
        let dt = self.clock.tick(timestamp);
        self.advance(dt);
    }

    /// Integrates `dt` seconds of motion, then reflects off the walls.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.time += dt;

        if self.ship.advance(dt) == Step::Arrived {
            let pos = self.ship.pose.pos;
            debug!("arrived at ({:.1}, {:.1})", pos.x, pos.y);
            self.event_log.log(
                self.time,
                format!("Arrived at ({:.0}, {:.0})", pos.x, pos.y),
                EventKind::Arrival,
            );
        }

        let velocity_before = self.ship.velocity;
        let contacts = self.clamp_to_bounds();
        self.record_bounce("x", contacts.x, velocity_before.x);
        self.record_bounce("y", contacts.y, velocity_before.y);
    }

    /// Pins the ship inside the playable rectangle, reflecting its velocity.
    pub fn clamp_to_bounds(&mut self) -> Contacts {
        self.ship.clamp_to_bounds(&self.rect)
    }

    fn record_bounce(&mut self, axis: &str, contact: AxisContact, component: f32) {
        // a zero component flips to zero, which is not a bounce
        if !contact.any() || component == 0.0 {
            return;
        }
        let wall = match (contact.min, contact.max) {
            (true, true) => "both",
            (true, false) => "min",
            _ => "max",
        };
        let pos = self.ship.pose.pos;
        debug!(
            "bounced off {} {} wall at ({:.1}, {:.1})",
            wall, axis, pos.x, pos.y
        );
        self.event_log.log(
            self.time,
            format!("Bounce off {} {} wall", wall, axis),
            EventKind::Bounce,
        );
    }

    /// Current position and heading.
    pub fn pose(&self) -> Pose {
        self.ship.pose
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.ship.velocity
    }

    /// Most recent accepted destination.
    pub fn target(&self) -> Option<Vec2> {
        self.ship.target
    }

    /// Idle or seeking.
    pub fn state(&self) -> MotionState {
        self.ship.state()
    }

    /// The steered ship.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Playable bounds.
    pub fn playable_rect(&self) -> &PlayableRect {
        &self.rect
    }

    /// Parameters the controller was built with.
    pub fn params(&self) -> &SteeringParams {
        &self.params
    }

    /// Recent steering events, newest first.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Simulated seconds elapsed.
    pub fn time(&self) -> f32 {
        self.time
    }
}
