/*
 * Renderer Module
 *
 * This module turns the world into draw calls.
 * The world hands out one Sprite per agent; a sprite is drawn as a filled
 * triangle pointing along its heading. World coordinates have their origin in
 * the top-left corner with y growing downwards, so every vertex is flipped
 * into nannou's centered, y-up window space before drawing.
 */

use glam::DVec2;
use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::{FISH_SIZE, PREDATOR_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Fish,
    Predator,
}

impl AgentKind {
    pub fn size(self) -> f64 {
        match self {
            AgentKind::Fish => FISH_SIZE,
            AgentKind::Predator => PREDATOR_SIZE,
        }
    }

    pub fn color(self) -> Rgba {
        match self {
            AgentKind::Fish => rgba(0.0, 200.0 / 255.0, 1.0, 0.9),
            AgentKind::Predator => rgba(1.0, 50.0 / 255.0, 50.0 / 255.0, 0.9),
        }
    }
}

/// Everything a renderer needs to draw one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: AgentKind,
    pub position: DVec2,
    pub heading: f64,
    pub size: f64,
    pub color: Rgba,
}

impl Sprite {
    pub fn new(kind: AgentKind, position: DVec2, heading: f64) -> Self {
        Self {
            kind,
            position,
            heading,
            size: kind.size(),
            color: kind.color(),
        }
    }

    // Triangle corners in world space: tail-left, nose, tail-right
    pub fn vertices(&self) -> [DVec2; 3] {
        let rotation = DVec2::from_angle(self.heading);
        let local = [
            DVec2::new(-self.size, -self.size / 2.0),
            DVec2::new(self.size, 0.0),
            DVec2::new(-self.size, self.size / 2.0),
        ];
        local.map(|corner| self.position + rotation.rotate(corner))
    }
}

// Map a world point onto the window, flipping the y axis
pub fn world_to_window(point: DVec2, window_rect: Rect) -> Point2 {
    pt2(
        window_rect.left() + point.x as f32,
        window_rect.top() - point.y as f32,
    )
}

pub fn draw_sprite(draw: &Draw, sprite: &Sprite, window_rect: Rect) {
    let points = sprite.vertices().map(|v| world_to_window(v, window_rect));
    draw.polygon().color(sprite.color).points(points);
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    for sprite in model.world.sprites() {
        draw_sprite(&draw, &sprite, window_rect);
    }

    if model.controls.show_debug {
        draw_perception(&draw, model, window_rect);
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }

    if let Err(e) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to draw controls: {:?}", e);
    }
}

// Outline the radii that drive the simulation: the first fish's vision and
// avoidance range, and the zone each predator scares fish out of
fn draw_perception(draw: &Draw, model: &Model, window_rect: Rect) {
    let params = model.world.params();

    if let Some(fish) = model.world.school().first() {
        let center = world_to_window(fish.position, window_rect);

        draw.ellipse()
            .xy(center)
            .radius(params.vision_radius as f32)
            .no_fill()
            .stroke(GREEN)
            .stroke_weight(1.0);

        draw.ellipse()
            .xy(center)
            .radius(params.avoidance_radius as f32)
            .no_fill()
            .stroke(YELLOW)
            .stroke_weight(1.0);
    }

    for predator in model.world.predators() {
        draw.ellipse()
            .xy(world_to_window(predator.position, window_rect))
            .radius(params.predator_avoidance_radius as f32)
            .no_fill()
            .stroke(rgba(1.0, 0.2, 0.2, 0.4))
            .stroke_weight(1.0);
    }
}
