/*
 * World Module
 *
 * The World owns the school, the predators and the bounds they live in, and
 * advances all of them one tick at a time. Fish are updated in place one after
 * another, so a fish later in the school already sees the new state of the
 * fish before it. Predators move after the whole school and chase the fish
 * where they ended up this tick.
 */

use rand::Rng;

use crate::bounds::Bounds;
use crate::error::ConfigError;
use crate::fish::Fish;
use crate::params::SimulationParams;
use crate::predator::Predator;
use crate::renderer::{AgentKind, Sprite};

pub struct World {
    school: Vec<Fish>,
    predators: Vec<Predator>,
    bounds: Bounds,
    params: SimulationParams,
    ticks: u64,
}

impl World {
    // Build a world and scatter the school and predators across it
    pub fn initialize<R: Rng + ?Sized>(
        params: SimulationParams,
        bounds: Bounds,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        bounds.validate()?;

        let mut world = Self::from_agents(params, bounds, Vec::new(), Vec::new());
        world.populate(rng);

        log::info!(
            "Initialized world {}x{} with {} fish and {} predators",
            bounds.width,
            bounds.height,
            world.school.len(),
            world.predators.len()
        );

        Ok(world)
    }

    // Build a world from hand-placed agents.
    // Unlike `initialize` nothing is validated, which lets tests set up exact layouts.
    pub fn from_agents(
        params: SimulationParams,
        bounds: Bounds,
        school: Vec<Fish>,
        predators: Vec<Predator>,
    ) -> Self {
        Self {
            school,
            predators,
            bounds,
            params,
            ticks: 0,
        }
    }

    // Throw away every agent and spawn a fresh population in the current bounds
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.populate(rng);
        self.ticks = 0;
        log::info!("Reset world with {} fish and {} predators", self.school.len(), self.predators.len());
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let bounds = self.bounds;
        let params = &self.params;

        self.school = (0..params.fish_count)
            .map(|_| Fish::spawn(&bounds, params.fish_speed, &mut *rng))
            .collect();

        self.predators = (0..params.predator_count)
            .map(|_| Predator::spawn(&bounds, params.predator_speed, &mut *rng))
            .collect();
    }

    // Advance the simulation by one step
    pub fn tick(&mut self) {
        // Resizes can only land between ticks; the whole pass uses one set of bounds
        let bounds = self.bounds;

        for i in 0..self.school.len() {
            let next = self.school[i].schooled(i, &self.school, &self.predators, &self.params, &bounds);
            self.school[i] = next;
        }

        for predator in &mut self.predators {
            predator.chase(&self.school, &bounds);
        }

        self.ticks += 1;
        log::trace!("Tick {} done", self.ticks);
    }

    // Update the bounds after the window changed size. Agents keep their state.
    // A zero-sized window (e.g. minimized) keeps the last usable bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        let bounds = Bounds::new(width, height);
        if bounds.validate().is_err() {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }

        log::debug!("Resized world to {}x{}", width, height);
        self.bounds = bounds;
    }

    // One sprite per agent: the school first, then the predators
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        let fish = self
            .school
            .iter()
            .map(|f| Sprite::new(AgentKind::Fish, f.position, f.heading));
        let predators = self
            .predators
            .iter()
            .map(|p| Sprite::new(AgentKind::Predator, p.position, p.heading));

        fish.chain(predators)
    }

    // Number of fish currently inside some predator's avoidance radius
    pub fn threatened_fish(&self) -> usize {
        self.school
            .iter()
            .filter(|f| f.is_threatened(&self.predators, &self.params))
            .count()
    }

    pub fn school(&self) -> &[Fish] {
        &self.school
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
