use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::fs;
use std::path::Path;

use super::error::ParamsError;
use super::playable_rect::PlayableRect;
use super::vector::Vec2;

/// Steering parameters, fixed for the lifetime of a controller.
///
/// Missing fields in a parameter file fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringParams {
    /// Scene width in points.
    pub scene_width: f32,
    /// Scene height in points.
    pub scene_height: f32,
    /// Widest width:height ratio that must remain fully playable.
    pub max_aspect_ratio: f32,
    /// Linear speed in points per second.
    pub move_speed: f32,
    /// Maximum turn rate in radians per second.
    pub rotate_speed: f32,
    /// Seek offsets not longer than this are ignored.
    pub arrival_epsilon: f32,
    /// Ship sprite width; the ship starts half a sprite inside the left wall.
    pub ship_width: f32,
    /// Number of recent events kept for display.
    pub event_log_capacity: usize,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            scene_width: 2048.0,
            scene_height: 1536.0,
            max_aspect_ratio: 16.0 / 8.0,
            move_speed: 800.0,
            rotate_speed: TAU,
            arrival_epsilon: 1e-4,
            ship_width: 120.0,
            event_log_capacity: 20,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::Invalid {
            field,
            reason: "must be finite and greater than zero",
        })
    }
}

impl SteeringParams {
    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ParamsError> {
        positive("scene_width", self.scene_width)?;
        positive("scene_height", self.scene_height)?;
        positive("max_aspect_ratio", self.max_aspect_ratio)?;
        positive("move_speed", self.move_speed)?;
        positive("rotate_speed", self.rotate_speed)?;
        if !(self.arrival_epsilon.is_finite() && self.arrival_epsilon >= 0.0) {
            return Err(ParamsError::Invalid {
                field: "arrival_epsilon",
                reason: "must be finite and not negative",
            });
        }
        if !(self.ship_width.is_finite() && self.ship_width >= 0.0) {
            return Err(ParamsError::Invalid {
                field: "ship_width",
                reason: "must be finite and not negative",
            });
        }
        if self.event_log_capacity == 0 {
            return Err(ParamsError::Invalid {
                field: "event_log_capacity",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Playable rectangle derived from the scene size and aspect ratio.
    pub fn playable_rect(&self) -> PlayableRect {
        PlayableRect::from_scene(self.scene_width, self.scene_height, self.max_aspect_ratio)
    }

    /// Where the ship starts: half a sprite in from the left wall, vertically
    /// centred, clamped into the playable rectangle.
    pub fn start_position(&self) -> Vec2 {
        let rect = self.playable_rect();
        let x = (rect.min_x + self.ship_width / 2.0).min(rect.max_x);
        Vec2::new(x, self.scene_height / 2.0)
    }

    /// Writes the parameters to `path` as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads and validates parameters from a JSON file at `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
