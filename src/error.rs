/*
 * Error Module
 *
 * Errors raised while setting up the simulation. Once a world is running,
 * ticking and resizing cannot fail.
 */

use std::fmt;

/// Errors produced by parameter and bounds validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter is NaN or infinite.
    NotFinite(&'static str),
    /// A parameter that must be zero or greater is negative.
    Negative(&'static str),
    /// A speed that must be strictly positive is zero.
    ZeroSpeed(&'static str),
    /// The avoidance radius lies outside the vision radius.
    AvoidanceExceedsVision { avoidance: f64, vision: f64 },
    /// The world bounds have no usable area.
    EmptyBounds { width: f64, height: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite(name) => write!(f, "Parameter `{}` must be a finite number", name),
            ConfigError::Negative(name) => write!(f, "Parameter `{}` must not be negative", name),
            ConfigError::ZeroSpeed(name) => write!(f, "Parameter `{}` must be greater than zero", name),
            ConfigError::AvoidanceExceedsVision { avoidance, vision } => write!(
                f,
                "Avoidance radius {} is larger than vision radius {}; fish would separate from neighbours they cannot see",
                avoidance, vision
            ),
            ConfigError::EmptyBounds { width, height } => {
                write!(f, "World bounds {}x{} must be finite and positive", width, height)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
