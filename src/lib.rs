//! # Space Traffic - Touch-Steered Ship Motion
//!
//! The motion core of a single-screen touch game: a ship steers toward the
//! last selected point at constant speed, turns to face its direction of
//! travel at a bounded rate, and bounces off the edges of the playable area.
//!
//! ## Features
//!
//! - Constant-speed seek with exact arrival (no overshoot)
//! - Bounded-rate turning along the shortest angular path
//! - Wall reflection that preserves speed
//! - First-frame-safe frame clock and most-recent-wins input handoff
//! - JSON-configurable parameters
//! - Real-time visualization with egui/macroquad (binary)
//!
//! ## Core Modules
//!
//! - [`simulation::controller`] - Per-frame steering controller
//! - [`simulation::ship`] - Seek, turn and wall reflection
//! - [`simulation::vector`] - 2D vector math
//! - [`simulation::params`] - Steering parameters

/// Core steering logic and data structures.
pub mod simulation {
    /// Per-frame controller: input, clock, integration and reflection.
    pub mod controller;
    /// Configuration errors.
    pub mod error;
    /// Recent steering events for display.
    pub mod event_log;
    /// Frame timestamp to delta conversion.
    pub mod frame_clock;
    /// Angle wrapping and wall reflection helpers.
    pub mod geometric_utils;
    /// Most-recent-wins handoff of selected points.
    pub mod input;
    /// Steering parameters.
    pub mod params;
    /// The playable bounds of the scene.
    pub mod playable_rect;
    /// Position and heading.
    pub mod pose;
    /// The steered ship.
    pub mod ship;
    /// 2D vector math.
    pub mod vector;
}
