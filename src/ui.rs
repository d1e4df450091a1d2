/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. The simulation parameters are fixed, so the panel only
 * shows them; the controls pause, step and reset the simulation.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Toggles owned by the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub paused: bool,
    pub show_debug: bool,
}

// One-shot actions requested through the UI this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiRequests {
    pub reset: bool,
    pub step: bool,
}

// Update the UI and return the actions the user asked for
pub fn update_ui(
    egui: &mut Egui,
    controls: &mut Controls,
    params: &SimulationParams,
    debug_info: &DebugInfo,
) -> UiRequests {
    let mut requests = UiRequests::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.checkbox(&mut controls.paused, "Pause Simulation");

            ui.horizontal(|ui| {
                // Stepping only makes sense while paused
                if ui.button("Step").clicked() && controls.paused {
                    requests.step = true;
                }
                if ui.button("Reset School").clicked() {
                    requests.reset = true;
                }
            });

            ui.checkbox(&mut controls.show_debug, "Show Debug Info");

            ui.collapsing("Parameters", |ui| {
                ui.label(format!("Fish: {}", params.fish_count));
                ui.label(format!("Predators: {}", params.predator_count));
                ui.label(format!("Fish speed: {} (max {})", params.fish_speed, params.max_speed()));
                ui.label(format!("Predator speed: {}", params.predator_speed));
                ui.label(format!("Vision radius: {}", params.vision_radius));
                ui.label(format!("Avoidance radius: {}", params.avoidance_radius));
                ui.label(format!("Predator avoidance radius: {}", params.predator_avoidance_radius));
                ui.label(format!(
                    "Weights: alignment {} / cohesion {} / separation {} / flee {}",
                    params.alignment_weight, params.cohesion_weight, params.separation_weight, params.flee_weight
                ));
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Tick: {}", debug_info.ticks));
        });

    requests
}

// Lines shown in the debug overlay, top to bottom
pub fn debug_lines(debug_info: &DebugInfo) -> Vec<String> {
    vec![
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Tick: {}", debug_info.ticks),
        format!("Fish: {}", debug_info.fish_count),
        format!("Predators: {}", debug_info.predator_count),
        format!("Fleeing: {}", debug_info.threatened_fish),
        format!("World Size: {:.0}x{:.0}", debug_info.world_size.0, debug_info.world_size.1),
    ]
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = debug_lines(debug_info);

    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Text is centered on its position, so shift right by roughly half a line
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
