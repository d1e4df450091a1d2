/*
 * Bounds Module
 *
 * The rectangular extent of the world, with the origin in the top-left
 * corner. Agents leaving one edge re-enter at the opposite edge.
 */

use glam::DVec2;
use rand::Rng;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    // Both dimensions must be finite and positive for agents to be placed
    pub fn validate(&self) -> Result<(), ConfigError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            Err(ConfigError::EmptyBounds {
                width: self.width,
                height: self.height,
            })
        }
    }

    // Wrap a position around the world edges.
    // Only positions strictly outside are moved; a coordinate sitting exactly
    // on 0 or on the far edge is left where it is.
    pub fn wrap(&self, mut position: DVec2) -> DVec2 {
        if position.x < 0.0 {
            position.x = self.width;
        } else if position.x > self.width {
            position.x = 0.0;
        }

        if position.y < 0.0 {
            position.y = self.height;
        } else if position.y > self.height {
            position.y = 0.0;
        }

        position
    }

    pub fn contains(&self, position: DVec2) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }

    // Uniformly random point inside the bounds
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        DVec2::new(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wraps_negative_to_far_edge() {
        let bounds = Bounds::new(100.0, 50.0);
        assert_eq!(bounds.wrap(DVec2::new(-1.0, -0.5)), DVec2::new(100.0, 50.0));
    }

    #[test]
    fn wraps_overshoot_to_origin() {
        let bounds = Bounds::new(100.0, 50.0);
        assert_eq!(bounds.wrap(DVec2::new(100.5, 51.0)), DVec2::new(0.0, 0.0));
    }

    #[test]
    fn edge_values_are_not_wrapped() {
        let bounds = Bounds::new(100.0, 50.0);
        assert_eq!(bounds.wrap(DVec2::new(100.0, 0.0)), DVec2::new(100.0, 0.0));
        assert_eq!(bounds.wrap(DVec2::new(0.0, 50.0)), DVec2::new(0.0, 50.0));
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert!(Bounds::new(0.0, 10.0).validate().is_err());
        assert!(Bounds::new(10.0, f64::INFINITY).validate().is_err());
        assert!(Bounds::new(10.0, 10.0).validate().is_ok());
    }

    #[test]
    fn random_points_stay_inside() {
        let bounds = Bounds::new(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(bounds.contains(bounds.random_point(&mut rng)));
        }
    }
}
