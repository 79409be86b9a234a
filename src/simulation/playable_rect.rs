//! The region of the scene the ship may travel in.

use serde::{Deserialize, Serialize};

use super::vector::Vec2;

/// Axis-aligned playable bounds in scene coordinates.
///
/// Spans the full scene width and a vertically centred band whose height is
/// derived from a maximum aspect ratio, so the same area stays visible on
/// every screen shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayableRect {
    /// Left edge.
    pub min_x: f32,
    /// Bottom edge of the band.
    pub min_y: f32,
    /// Right edge.
    pub max_x: f32,
    /// Top edge of the band.
    pub max_y: f32,
}

impl PlayableRect {
    /// Builds the rectangle from explicit edges.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Derives the playable band for a scene of the given size.
    ///
    /// The band height is `scene_width / max_aspect_ratio`, capped at the scene
    /// height, and is centred vertically.
    ///
    /// # Arguments
    ///
    /// * `scene_width` - Scene width in points
    /// * `scene_height` - Scene height in points
    /// * `max_aspect_ratio` - Widest width:height ratio that must stay playable
    pub fn from_scene(scene_width: f32, scene_height: f32, max_aspect_ratio: f32) -> Self {
        let playable_height = (scene_width / max_aspect_ratio).min(scene_height);
        let playable_margin = (scene_height - playable_height) / 2.0;
        Self::new(
            0.0,
            playable_margin,
            scene_width,
            playable_margin + playable_height,
        )
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Centre point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// `true` if `point` lies inside or on the edge of the rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}
