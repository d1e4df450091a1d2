/*
 * Fish School Simulation
 *
 * A school of fish swims together following three rules:
 * 1. Alignment: Match the average velocity of nearby fish
 * 2. Cohesion: Drift towards the center of nearby fish
 * 3. Separation: Keep away from fish that are too close
 *
 * A few predators chase whichever fish is closest, and fish flee from any
 * predator that comes near. Set RUST_LOG to change the log level.
 */

use fish_school::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model).update(app::update).run();
}
