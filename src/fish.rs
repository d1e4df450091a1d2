/*
 * Fish Module
 *
 * This module defines the Fish struct and its schooling behavior.
 * Each tick a fish looks at every other fish it can see and:
 * 1. Alignment: steers towards the average velocity of its neighbors
 * 2. Cohesion: steers towards the average position of its neighbors
 * 3. Separation: pushes away from neighbors that are too close
 * It then flees from any predator inside its avoidance radius.
 */

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

use crate::bounds::Bounds;
use crate::params::SimulationParams;
use crate::predator::Predator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fish {
    pub position: DVec2,
    /// Displacement per tick.
    pub velocity: DVec2,
    /// Direction of travel in radians, kept for drawing.
    pub heading: f64,
}

/// Sums gathered from the fish within vision range during one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub alignment: DVec2,
    pub cohesion: DVec2,
    pub separation: DVec2,
    pub count: usize,
}

impl Fish {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self {
            position,
            velocity,
            heading: velocity.y.atan2(velocity.x),
        }
    }

    // Create a fish at a random spot, swimming in a random direction at base speed
    pub fn spawn<R: Rng + ?Sized>(bounds: &Bounds, speed: f64, rng: &mut R) -> Self {
        let position = bounds.random_point(rng);
        let heading = rng.gen_range(0.0..TAU);

        Self {
            position,
            velocity: DVec2::from_angle(heading) * speed,
            heading,
        }
    }

    // Gather alignment, cohesion and separation sums over every other fish in sight.
    // `index` is this fish's own slot in `school` and is skipped.
    pub fn scan_neighbors(&self, index: usize, school: &[Fish], params: &SimulationParams) -> Neighborhood {
        let mut hood = Neighborhood::default();

        for (i, other) in school.iter().enumerate() {
            if i == index {
                continue;
            }

            let offset = other.position - self.position;
            let distance = offset.length();

            if distance < params.vision_radius {
                hood.alignment += other.velocity;
                hood.cohesion += other.position;

                if distance < params.avoidance_radius {
                    hood.separation -= offset;
                }

                hood.count += 1;
            }
        }

        hood
    }

    // Blend the three schooling rules into the velocity.
    // With nobody in sight the velocity passes through untouched.
    pub fn apply_schooling(&self, mut velocity: DVec2, hood: &Neighborhood, params: &SimulationParams) -> DVec2 {
        if hood.count == 0 {
            return velocity;
        }

        let count = hood.count as f64;

        // Alignment
        let average_velocity = hood.alignment / count;
        velocity += (average_velocity - velocity) * params.alignment_weight;

        // Cohesion
        let centroid = hood.cohesion / count;
        velocity += (centroid - self.position) * params.cohesion_weight;

        // Separation
        velocity += hood.separation * params.separation_weight;

        velocity
    }

    // Push away from every predator in range. Threats add up rather than average.
    pub fn flee(&self, mut velocity: DVec2, predators: &[Predator], params: &SimulationParams) -> DVec2 {
        for predator in predators {
            let offset = predator.position - self.position;
            if offset.length() < params.predator_avoidance_radius {
                velocity -= offset * params.flee_weight;
            }
        }

        velocity
    }

    pub fn is_threatened(&self, predators: &[Predator], params: &SimulationParams) -> bool {
        predators
            .iter()
            .any(|p| p.position.distance(self.position) < params.predator_avoidance_radius)
    }

    // Compute this fish's state for the next tick.
    // Reads the school and predators as they are right now and never touches them.
    pub fn schooled(
        &self,
        index: usize,
        school: &[Fish],
        predators: &[Predator],
        params: &SimulationParams,
        bounds: &Bounds,
    ) -> Fish {
        let hood = self.scan_neighbors(index, school, params);

        let velocity = self.apply_schooling(self.velocity, &hood, params);
        let velocity = self.flee(velocity, predators, params);
        let velocity = limit_speed(velocity, params.max_speed());

        let position = bounds.wrap(self.position + velocity);

        Fish {
            position,
            velocity,
            heading: velocity.y.atan2(velocity.x),
        }
    }
}

// Rescale a velocity to `max_speed` if it is faster, keeping its direction
pub fn limit_speed(velocity: DVec2, max_speed: f64) -> DVec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity / speed * max_speed
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(1000.0, 1000.0)
    }

    #[test]
    fn lone_fish_coasts() {
        let params = SimulationParams::default();
        let school = [Fish::new(DVec2::new(50.0, 50.0), DVec2::new(2.0, 0.0))];

        let next = school[0].schooled(0, &school, &[], &params, &bounds());

        assert_eq!(next.position, DVec2::new(52.0, 50.0));
        assert_eq!(next.velocity, DVec2::new(2.0, 0.0));
        assert_eq!(next.heading, 0.0);
    }

    #[test]
    fn fish_out_of_sight_are_ignored() {
        let params = SimulationParams::default();
        let school = [
            Fish::new(DVec2::new(100.0, 100.0), DVec2::new(1.0, 1.0)),
            Fish::new(DVec2::new(170.0, 100.0), DVec2::new(-3.0, 0.0)),
        ];

        let hood = school[0].scan_neighbors(0, &school, &params);
        assert_eq!(hood.count, 0);

        let next = school[0].schooled(0, &school, &[], &params, &bounds());
        assert_eq!(next.velocity, DVec2::new(1.0, 1.0));
    }

    #[test]
    fn scan_separates_only_close_neighbors() {
        let params = SimulationParams::default();
        let school = [
            Fish::new(DVec2::new(100.0, 100.0), DVec2::ZERO),
            Fish::new(DVec2::new(120.0, 100.0), DVec2::new(1.0, 0.0)),
            Fish::new(DVec2::new(100.0, 160.0), DVec2::new(0.0, 1.0)),
        ];

        let hood = school[0].scan_neighbors(0, &school, &params);

        assert_eq!(hood.count, 2);
        assert_eq!(hood.alignment, DVec2::new(1.0, 1.0));
        assert_eq!(hood.cohesion, DVec2::new(220.0, 260.0));
        assert_eq!(hood.separation, DVec2::new(-20.0, 0.0));
    }

    #[test]
    fn close_pairs_repel_more_than_distant_pairs() {
        let params = SimulationParams::default();

        let close = [
            Fish::new(DVec2::new(100.0, 100.0), DVec2::ZERO),
            Fish::new(DVec2::new(130.0, 100.0), DVec2::ZERO),
        ];
        let far = [
            Fish::new(DVec2::new(100.0, 100.0), DVec2::ZERO),
            Fish::new(DVec2::new(155.0, 100.0), DVec2::ZERO),
        ];

        // Repulsion for fish 0 points along -x
        let close_push = -close[0].schooled(0, &close, &[], &params, &bounds()).velocity.x;
        let far_push = -far[0].schooled(0, &far, &[], &params, &bounds()).velocity.x;

        assert!(close_push > 0.0);
        assert!(close_push > far_push);

        // And fish 1 is pushed the other way by the same amount
        let close_push_other = close[1].schooled(1, &close, &[], &params, &bounds()).velocity.x;
        assert!((close_push - close_push_other).abs() < 1e-12);
    }

    #[test]
    fn predator_threats_add_up() {
        let params = SimulationParams::default();
        let fish = Fish::new(DVec2::new(100.0, 100.0), DVec2::ZERO);
        let predator = Predator::new(DVec2::new(105.0, 100.0), 0.0, 3.0);

        let one = fish.flee(DVec2::ZERO, &[predator], &params);
        let two = fish.flee(DVec2::ZERO, &[predator, predator], &params);

        assert_eq!(one, DVec2::new(-1.0, 0.0));
        assert_eq!(two, DVec2::new(-2.0, 0.0));
    }

    #[test]
    fn distant_predators_are_ignored() {
        let params = SimulationParams::default();
        let fish = Fish::new(DVec2::new(100.0, 100.0), DVec2::new(1.0, 0.0));
        let predator = Predator::new(DVec2::new(250.0, 100.0), 0.0, 3.0);

        assert!(!fish.is_threatened(&[predator], &params));
        assert_eq!(fish.flee(fish.velocity, &[predator], &params), fish.velocity);
    }

    #[test]
    fn speed_is_clamped_to_max() {
        let params = SimulationParams::default();
        let fish = Fish::new(DVec2::new(500.0, 500.0), DVec2::new(3.0, 0.0));
        let predator = Predator::new(DVec2::new(550.0, 500.0), 0.0, 3.0);

        let next = fish.schooled(0, &[fish], &[predator], &params, &bounds());

        assert!((next.velocity.length() - params.max_speed()).abs() < 1e-12);
        assert!(next.velocity.x < 0.0);
        assert!((next.heading.abs() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn coincident_fish_stay_finite() {
        let params = SimulationParams::default();
        let school = [
            Fish::new(DVec2::new(10.0, 10.0), DVec2::new(1.0, 0.0)),
            Fish::new(DVec2::new(10.0, 10.0), DVec2::new(0.0, 1.0)),
        ];

        let next = school[0].schooled(0, &school, &[], &params, &bounds());

        assert!(next.position.is_finite());
        assert!(next.velocity.is_finite());
        assert!(next.heading.is_finite());
    }

    #[test]
    fn fish_on_far_edge_is_not_wrapped() {
        let params = SimulationParams::default();
        let fish = Fish::new(DVec2::new(1000.0, 500.0), DVec2::ZERO);

        let next = fish.schooled(0, &[fish], &[], &params, &bounds());

        assert_eq!(next.position, DVec2::new(1000.0, 500.0));
    }

    #[test]
    fn limit_speed_keeps_slow_velocities() {
        assert_eq!(limit_speed(DVec2::new(1.0, 1.0), 4.0), DVec2::new(1.0, 1.0));
        assert_eq!(limit_speed(DVec2::new(0.0, 8.0), 4.0), DVec2::new(0.0, 4.0));
    }
}
