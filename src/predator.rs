/*
 * Predator Module
 *
 * Predators have no inertia: every tick they turn to face the nearest fish
 * and swim a fixed distance towards it.
 */

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

use crate::bounds::Bounds;
use crate::fish::Fish;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predator {
    pub position: DVec2,
    pub heading: f64,
    pub speed: f64,
}

impl Predator {
    pub fn new(position: DVec2, heading: f64, speed: f64) -> Self {
        Self {
            position,
            heading,
            speed,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(bounds: &Bounds, speed: f64, rng: &mut R) -> Self {
        let position = bounds.random_point(rng);
        let heading = rng.gen_range(0.0..TAU);
        Self::new(position, heading, speed)
    }

    // Index of the closest fish. On a tie the fish scanned first wins.
    pub fn nearest(&self, school: &[Fish]) -> Option<usize> {
        let mut nearest = None;
        let mut min_distance = f64::INFINITY;

        for (i, fish) in school.iter().enumerate() {
            let distance = fish.position.distance(self.position);
            if distance < min_distance {
                min_distance = distance;
                nearest = Some(i);
            }
        }

        nearest
    }

    // Turn towards the nearest fish and advance on it.
    // With no fish left to chase the predator stays put.
    pub fn chase(&mut self, school: &[Fish], bounds: &Bounds) {
        if let Some(target) = self.nearest(school) {
            let offset = school[target].position - self.position;
            self.heading = offset.y.atan2(offset.x);
            self.position += DVec2::from_angle(self.heading) * self.speed;
        }

        self.position = bounds.wrap(self.position);
    }
}
