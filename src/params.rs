/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct holding every tunable
 * constant of the simulation: population sizes, speeds, perception radii and
 * the weights of the flocking rules. Parameters are fixed once a world has
 * been built from them.
 */

use crate::error::ConfigError;

// Parameters for the simulation, fixed at construction
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub fish_count: usize,
    pub predator_count: usize,
    pub fish_speed: f64,
    pub predator_speed: f64,
    pub vision_radius: f64,
    pub avoidance_radius: f64,
    pub predator_avoidance_radius: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
    pub separation_weight: f64,
    pub flee_weight: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            fish_count: 200,
            predator_count: 3,
            fish_speed: 2.0,
            predator_speed: 3.0,
            vision_radius: 70.0,
            avoidance_radius: 40.0,
            predator_avoidance_radius: 150.0,
            alignment_weight: 0.05,
            cohesion_weight: 0.01,
            separation_weight: 0.1,
            flee_weight: 0.2,
        }
    }
}

impl SimulationParams {
    /// Upper bound on a fish's speed: twice its base speed.
    pub fn max_speed(&self) -> f64 {
        self.fish_speed * 2.0
    }

    // Check that the parameters describe a simulation that can run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("fish_speed", self.fish_speed),
            ("predator_speed", self.predator_speed),
            ("vision_radius", self.vision_radius),
            ("avoidance_radius", self.avoidance_radius),
            ("predator_avoidance_radius", self.predator_avoidance_radius),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("separation_weight", self.separation_weight),
            ("flee_weight", self.flee_weight),
        ];

        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }

        if self.fish_speed == 0.0 {
            return Err(ConfigError::ZeroSpeed("fish_speed"));
        }
        if self.predator_speed == 0.0 {
            return Err(ConfigError::ZeroSpeed("predator_speed"));
        }

        if self.avoidance_radius > self.vision_radius {
            return Err(ConfigError::AvoidanceExceedsVision {
                avoidance: self.avoidance_radius,
                vision: self.vision_radius,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = SimulationParams::default();
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.max_speed(), 4.0);
    }

    #[test]
    fn rejects_negative_radius() {
        let params = SimulationParams {
            vision_radius: -1.0,
            ..SimulationParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::Negative("vision_radius")));
    }

    #[test]
    fn rejects_nan_weight() {
        let params = SimulationParams {
            flee_weight: f64::NAN,
            ..SimulationParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::NotFinite("flee_weight")));
    }

    #[test]
    fn rejects_zero_speed() {
        let params = SimulationParams {
            predator_speed: 0.0,
            ..SimulationParams::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::ZeroSpeed("predator_speed")));
    }

    #[test]
    fn rejects_avoidance_outside_vision() {
        let params = SimulationParams {
            avoidance_radius: 80.0,
            ..SimulationParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::AvoidanceExceedsVision { .. })
        ));
    }
}
