//! Minimal 2D vector math for scene-space positions and velocities.
//!
//! Only what steering needs: arithmetic, length, normalisation and angles.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// A two-dimensional vector in scene points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians, counter-clockwise from +x).
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Dot product with `other`.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Returns the unit vector in the same direction, or `None` when the
    /// vector is not finite or its length is not greater than `epsilon`
    /// (direction undefined).
    ///
    /// Components are rescaled by the larger magnitude first, so vectors whose
    /// length overflows `f32` still normalise.
    pub fn try_normalize(self, epsilon: f32) -> Option<Self> {
        if !self.is_finite() {
            return None;
        }
        let scale = self.x.abs().max(self.y.abs());
        if scale == 0.0 {
            return None;
        }
        let scaled = self / scale;
        let scaled_length = scaled.length();
        // may overflow to infinity, which still beats any finite epsilon
        if scaled_length * scale <= epsilon {
            return None;
        }
        Some(scaled / scaled_length)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A zero (or non-finite) vector normalises to [`Vec2::ZERO`] instead of NaN.
    pub fn normalize(self) -> Self {
        self.try_normalize(0.0).unwrap_or(Self::ZERO)
    }

    /// Angle of the vector in radians, in `(-π, π]`, measured from +x.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// `true` when both components are exactly zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// `true` when both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
