use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use space_traffic::simulation::controller::SteeringController;
use space_traffic::simulation::ship::MotionState;
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_telemetry_panel(
    egui_ctx: &egui::Context,
    state: &UIState,
    controller: &SteeringController,
) {
    egui::SidePanel::right("telemetry_panel")
        .default_width(state.telemetry_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Ship Telemetry");
            ui.separator();

            let pose = controller.pose();
            let velocity = controller.velocity();
            let (state_text, state_color) = match controller.state() {
                MotionState::Idle => ("Idle", egui::Color32::from_rgb(150, 150, 150)),
                MotionState::Seeking => ("Seeking", egui::Color32::from_rgb(100, 255, 100)),
            };
            ui.label(egui::RichText::new(state_text).color(state_color).strong());
            ui.label(format!("Position: ({:.1}, {:.1})", pose.pos.x, pose.pos.y));
            ui.label(format!("Heading: {:.1}°", pose.rot.to_degrees()));
            ui.label(format!("Velocity: ({:.1}, {:.1})", velocity.x, velocity.y));
            match controller.target() {
                Some(target) => ui.label(format!("Target: ({:.1}, {:.1})", target.x, target.y)),
                None => ui.label("Target: none"),
            };
            ui.label(format!("Time: {:.1}s", controller.time()));

            ui.collapsing("Parameters", |ui| {
                let params = controller.params();
                let rect = controller.playable_rect();
                ui.label(format!("Speed: {:.0} pt/s", params.move_speed));
                ui.label(format!(
                    "Turn rate: {:.0}°/s",
                    params.rotate_speed.to_degrees()
                ));
                ui.label(format!(
                    "Playable: x {:.0}..{:.0}, y {:.0}..{:.0}",
                    rect.min_x, rect.max_x, rect.min_y, rect.max_y
                ));
            });

            ui.separator();
            ui.label("Heading (deg)");
            draw_history_plot(ui, "heading_plot", &state.heading_history, "Time", "Heading");
            ui.label("Speed (pt/s)");
            draw_history_plot(ui, "speed_plot", &state.speed_history, "Time", "Speed");
        });
}

fn draw_history_plot(
    ui: &mut egui::Ui,
    id: &str,
    data: &VecDeque<(f64, f64)>,
    x_label: &str,
    y_label: &str,
) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
    let line = Line::new(points);

    Plot::new(id)
        .height(150.0)
        .show_axes([true, true])
        .label_formatter(|_name, value| {
            format!("{}: {:.1}\n{}: {:.1}", x_label, value.x, y_label, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
