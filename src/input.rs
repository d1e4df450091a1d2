/*
 * Input Module
 *
 * This module handles window events for the simulation:
 * - Keyboard shortcuts mirroring the control panel
 * - Window resizes, which become the world's new bounds
 * - Raw events forwarded to egui
 */

use nannou::prelude::*;

use crate::app::Model;

// Keyboard shortcuts: Space pauses, S steps while paused, R resets, D toggles the overlay
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Let egui keep keystrokes aimed at its widgets
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => model.controls.paused = !model.controls.paused,
        Key::S if model.controls.paused => model.world.tick(),
        Key::R => model.world.reset(&mut rand::thread_rng()),
        Key::D => model.controls.show_debug = !model.controls.show_debug,
        _ => {}
    }
}

// The window is the world: keep the bounds in step with its size
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.world.resize(size.x as f64, size.y as f64);
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
