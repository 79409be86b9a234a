//! Space Traffic demo: touch or click to steer the ship.
//!
//! Pass a JSON parameter file as the first argument to override the
//! defaults. Set `RUST_LOG=debug` to see steering events.

use log::{error, info};
use macroquad::prelude::*;
use space_traffic::simulation::{controller::SteeringController, params::SteeringParams};

mod graphics;
mod ui;

fn load_params() -> SteeringParams {
    let Some(path) = std::env::args().nth(1) else {
        return SteeringParams::default();
    };
    match SteeringParams::load_from_file(&path) {
        Ok(params) => {
            info!("loaded parameters from {}", path);
            params
        }
        Err(e) => {
            error!("failed to load parameters from {}: {}, using defaults", path, e);
            SteeringParams::default()
        }
    }
}

#[macroquad::main("Space Traffic")]
async fn main() {
    env_logger::init();

    let mut controller = match SteeringController::new(load_params()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("invalid steering parameters: {}", e);
            return;
        }
    };
    let input = controller.input_handle();
    let animation = graphics::SpriteAnimation::ship();
    let mut ui_state = ui::UIState::new();
    let mut last_pointer: Option<(f32, f32)> = None;

    loop {
        let view = graphics::SceneView::aspect_fill(controller.params());

        // press and drag both steer, like touch began / moved
        if is_mouse_button_down(MouseButton::Left) && !ui_state.pointer_over_ui {
            let pointer = mouse_position();
            if is_mouse_button_pressed(MouseButton::Left) || last_pointer != Some(pointer) {
                input.submit(view.to_scene(pointer));
                last_pointer = Some(pointer);
            }
        } else {
            last_pointer = None;
        }

        let now = get_time();
        controller.on_frame(now);
        ui_state.update_history(&controller);

        clear_background(BLACK);
        graphics::draw_background(&view, controller.params());
        graphics::draw_playable_area(&view, controller.playable_rect());
        graphics::draw_target(&view, controller.target());
        graphics::draw_ship(
            &view,
            controller.pose(),
            controller.params().ship_width,
            animation.frame_at(now),
        );

        ui::draw_ui(&mut ui_state, &controller);
        ui::process_egui();

        next_frame().await
    }
}
