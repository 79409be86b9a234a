use serde::{Deserialize, Serialize};

use super::vector::Vec2;

/// Position and heading of the ship, as consumed by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in scene points.
    pub pos: Vec2,
    /// Heading in radians, kept in `(-π, π]`.
    pub rot: f32,
}

impl Pose {
    /// Creates a pose at `pos` facing `rot`.
    pub fn new(pos: Vec2, rot: f32) -> Self {
        Self { pos, rot }
    }
}
