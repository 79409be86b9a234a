use macroquad::prelude::*;
use space_traffic::simulation::{
    params::SteeringParams, playable_rect::PlayableRect, pose::Pose, vector,
};

/// Maps scene coordinates (y up) onto the window with an aspect-fill scale.
///
/// The scene is scaled uniformly until it covers the whole window and is
/// centred; whatever overhangs is cropped.
pub struct SceneView {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    scene_height: f32,
}

impl SceneView {
    pub fn aspect_fill(params: &SteeringParams) -> Self {
        let screen_w = screen_width();
        let screen_h = screen_height();
        let scale = (screen_w / params.scene_width).max(screen_h / params.scene_height);
        Self {
            scale,
            offset_x: (screen_w - params.scene_width * scale) / 2.0,
            offset_y: (screen_h - params.scene_height * scale) / 2.0,
            scene_height: params.scene_height,
        }
    }

    /// Converts a window position (pixels, y down) into scene coordinates.
    pub fn to_scene(&self, (x, y): (f32, f32)) -> vector::Vec2 {
        vector::Vec2::new(
            (x - self.offset_x) / self.scale,
            self.scene_height - (y - self.offset_y) / self.scale,
        )
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, view: &SceneView) -> Self::Output;
}

impl ToScreen for vector::Vec2 {
    type Output = Vec2;
    fn to_screen(&self, view: &SceneView) -> Vec2 {
        vec2(
            view.offset_x + self.x * view.scale,
            view.offset_y + (view.scene_height - self.y) * view.scale,
        )
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, view: &SceneView) -> f32 {
        self * view.scale
    }
}

/// Looping frame sequence for the ship sprite.
pub struct SpriteAnimation {
    frames: Vec<usize>,
    time_per_frame: f64,
}

impl SpriteAnimation {
    /// Engine flicker: frames 1-4 and back, 0.1s each.
    pub fn ship() -> Self {
        Self {
            frames: vec![1, 2, 3, 4, 3, 2],
            time_per_frame: 0.1,
        }
    }

    pub fn frame_at(&self, time: f64) -> usize {
        let index = (time.max(0.0) / self.time_per_frame) as usize % self.frames.len();
        self.frames[index]
    }
}

/// Three stacked background layers, back to front.
pub fn draw_background(view: &SceneView, params: &SteeringParams) {
    let origin = vector::Vec2::new(0.0, params.scene_height).to_screen(view);
    let width = params.scene_width.to_screen(view);
    let height = params.scene_height.to_screen(view);

    // bottom: deep space
    draw_rectangle(
        origin.x,
        origin.y,
        width,
        height,
        Color::from_rgba(8, 10, 30, 255),
    );

    // middle: nebula band
    let band = vector::Vec2::new(0.0, params.scene_height * 0.7).to_screen(view);
    draw_rectangle(
        band.x,
        band.y,
        width,
        (params.scene_height * 0.4).to_screen(view),
        Color::from_rgba(40, 20, 70, 160),
    );

    // top: a fixed star field
    for i in 0..120u32 {
        let star = vector::Vec2::new(
            (i.wrapping_mul(7919) % 2048) as f32 / 2048.0 * params.scene_width,
            (i.wrapping_mul(104_729) % 1536) as f32 / 1536.0 * params.scene_height,
        )
        .to_screen(view);
        let radius = (1.0 + (i % 3) as f32).to_screen(view).max(1.0);
        draw_circle(star.x, star.y, radius, Color::from_rgba(220, 220, 255, 200));
    }
}

/// Red outline of the playable rectangle.
pub fn draw_playable_area(view: &SceneView, rect: &PlayableRect) {
    let top_left = vector::Vec2::new(rect.min_x, rect.max_y).to_screen(view);
    draw_rectangle_lines(
        top_left.x,
        top_left.y,
        rect.width().to_screen(view),
        rect.height().to_screen(view),
        4.0_f32.to_screen(view).max(1.0),
        RED,
    );
}

pub fn draw_target(view: &SceneView, target: Option<vector::Vec2>) {
    if let Some(target) = target {
        let screen_pos = target.to_screen(view);
        draw_circle_lines(
            screen_pos.x,
            screen_pos.y,
            12.0_f32.to_screen(view).max(3.0),
            2.0,
            Color::from_rgba(100, 255, 100, 180),
        );
    }
}

/// Draws the ship as a hull triangle with an animated exhaust flame.
pub fn draw_ship(view: &SceneView, pose: Pose, ship_width: f32, frame: usize) {
    let center = pose.pos.to_screen(view);
    let half = ship_width.to_screen(view) / 2.0;
    // screen y points down, so the heading flips sign
    let forward = vec2(pose.rot.cos(), -pose.rot.sin());
    let side = vec2(-forward.y, forward.x);

    let nose = center + forward * half;
    let left = center - forward * half + side * half * 0.6;
    let right = center - forward * half - side * half * 0.6;

    let flame_length = half * (0.3 + 0.15 * frame as f32);
    let tail = center - forward * half;
    draw_triangle(
        tail + side * half * 0.25,
        tail - side * half * 0.25,
        tail - forward * flame_length,
        Color::from_rgba(255, 160, 40, 220),
    );
    draw_triangle(nose, left, right, Color::from_rgba(200, 210, 230, 255));
    draw_line(
        center.x,
        center.y,
        nose.x,
        nose.y,
        2.0,
        Color::from_rgba(60, 120, 255, 255),
    );
}
