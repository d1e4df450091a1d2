/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and simulation counters displayed in the UI and the debug overlay.
 */

use std::time::Duration;

use crate::world::World;

// Debug information to display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub fish_count: usize,
    pub predator_count: usize,
    pub threatened_fish: usize,
    pub world_size: (f64, f64),
}

impl DebugInfo {
    // Refresh every field from the latest frame
    pub fn record(&mut self, fps: f32, frame_time: Duration, world: &World) {
        let bounds = world.bounds();

        self.fps = fps;
        self.frame_time = frame_time;
        self.ticks = world.ticks();
        self.fish_count = world.school().len();
        self.predator_count = world.predators().len();
        self.threatened_fish = world.threatened_fish();
        self.world_size = (bounds.width, bounds.height);
    }
}
