/*
 * Application Module
 *
 * This module defines the main application model for the fish school.
 * It opens the window, builds the world to fill it and advances the world
 * exactly one tick per frame; nannou drives the frame loop.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::bounds::Bounds;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui::{self, Controls};
use crate::world::World;

// Window size used when the monitor size is unavailable
const FALLBACK_WINDOW_SIZE: (u32, u32) = (1280, 720);

// Main model for the application
pub struct Model {
    pub world: World,
    pub egui: Egui,
    pub controls: Controls,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Calculate window size based on monitor size (80% of monitor size)
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            ((size.width as f32 * 0.8) as u32, (size.height as f32 * 0.8) as u32)
        })
        .unwrap_or(FALLBACK_WINDOW_SIZE);

    let window_id = app
        .new_window()
        .title("Fish School")
        .size(window_width, window_height)
        .view(renderer::view)
        .resized(input::resized)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window closed during setup");
    let egui = Egui::from_window(&window);

    // The world spans the window in points, origin at the top-left corner
    let rect = window.rect();
    let bounds = Bounds::new(rect.w() as f64, rect.h() as f64);

    let world = match World::initialize(SimulationParams::default(), bounds, &mut rand::thread_rng()) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Cannot start simulation: {}", e);
            std::process::exit(1);
        }
    };

    Model {
        world,
        egui,
        controls: Controls::default(),
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    let requests = ui::update_ui(
        &mut model.egui,
        &mut model.controls,
        model.world.params(),
        &model.debug_info,
    );

    if requests.reset {
        model.world.reset(&mut rand::thread_rng());
    }

    if !model.controls.paused || requests.step {
        model.world.tick();
    }

    model.debug_info.record(app.fps(), update.since_last, &model.world);
}
