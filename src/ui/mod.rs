// UI module - debug overlay drawn with egui

mod events;
mod telemetry;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
