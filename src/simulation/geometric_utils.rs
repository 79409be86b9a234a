//! Angle arithmetic and the per-axis wall reflection primitive.

use std::f32::consts::{PI, TAU};

/// Returns the signed rotation of minimal magnitude that takes `from` onto `to`.
///
/// The result lies in the half-open interval `(-π, π]`, so a difference of
/// exactly half a turn always resolves to `+π`.
///
/// # Arguments
///
/// * `from` - Current angle in radians
/// * `to` - Desired angle in radians
pub fn shortest_angle_between(from: f32, to: f32) -> f32 {
    let mut angle = (to - from) % TAU;
    if angle >= PI {
        angle -= TAU;
    }
    if angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Wraps an arbitrary angle into `(-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    shortest_angle_between(0.0, angle)
}

/// Which wall(s) of one axis a reflection touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisContact {
    /// Position was at or below the minimum.
    pub min: bool,
    /// Position was at or above the maximum.
    pub max: bool,
}

impl AxisContact {
    /// `true` if either wall was touched.
    pub fn any(self) -> bool {
        self.min || self.max
    }
}

/// Clamps one coordinate into `[min, max]`, negating the matching velocity
/// component on each wall contact.
///
/// Both walls are tested, in order, even if the first one already fired. The
/// velocity magnitude on the axis is preserved.
///
/// # Arguments
///
/// * `pos` - Coordinate to clamp
/// * `vel` - Velocity component along the same axis
/// * `min` - Lower wall
/// * `max` - Upper wall
pub fn reflect_axis(pos: &mut f32, vel: &mut f32, min: f32, max: f32) -> AxisContact {
    let mut contact = AxisContact::default();
    // NaN compares false against both walls; pin it to the lower one
    if pos.is_nan() {
        *pos = min;
    }
    if *pos <= min {
        *pos = min;
        *vel = -*vel;
        contact.min = true;
    }
    if *pos >= max {
        *pos = max;
        *vel = -*vel;
        contact.max = true;
    }
    contact
}
