use egui_macroquad::egui;
use space_traffic::simulation::controller::SteeringController;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub heading_history: VecDeque<(f64, f64)>,
    pub speed_history: VecDeque<(f64, f64)>,
    pub telemetry_panel_width: f32,
    /// Set while egui owns the pointer, so clicks on panels do not steer.
    pub pointer_over_ui: bool,
    last_update_time: f32,
    update_interval: f32,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            heading_history: VecDeque::new(),
            speed_history: VecDeque::new(),
            telemetry_panel_width: 280.0,
            pointer_over_ui: false,
            last_update_time: 0.0,
            update_interval: 0.05, // 20 samples per second
        }
    }

    pub fn update_history(&mut self, controller: &SteeringController) {
        let time = controller.time();
        if time - self.last_update_time < self.update_interval {
            return;
        }
        self.last_update_time = time;

        let pose = controller.pose();
        self.heading_history
            .push_back((time as f64, pose.rot.to_degrees() as f64));
        self.speed_history
            .push_back((time as f64, controller.velocity().length() as f64));

        if self.heading_history.len() > MAX_HISTORY_POINTS {
            self.heading_history.pop_front();
        }
        if self.speed_history.len() > MAX_HISTORY_POINTS {
            self.speed_history.pop_front();
        }
    }
}

pub fn draw_ui(state: &mut UIState, controller: &SteeringController) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::telemetry::draw_telemetry_panel(egui_ctx, state, controller);
        super::events::draw_events_panel(egui_ctx, controller);

        state.pointer_over_ui = egui_ctx.wants_pointer_input() || egui_ctx.is_pointer_over_area();
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
