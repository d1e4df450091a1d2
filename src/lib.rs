/*
 * Fish School Simulation - Module Definitions
 *
 * This file defines the module structure for the fish school simulation.
 * The simulation core (bounds, fish, predator, world) has no window
 * dependency beyond the Sprite it hands to the renderer; the remaining
 * modules make up the nannou application around it.
 */

// Re-export key components for easier access
pub use bounds::Bounds;
pub use error::ConfigError;
pub use fish::Fish;
pub use predator::Predator;
pub use params::SimulationParams;
pub use renderer::{AgentKind, Sprite};
pub use world::World;
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod bounds;
pub mod error;
pub mod fish;
pub mod predator;
pub mod params;
pub mod world;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const FISH_SIZE: f64 = 5.0;
pub const PREDATOR_SIZE: f64 = 15.0;
