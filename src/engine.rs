use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{PopulationParams, SimulationConfig};
use crate::error::PopulationError;
use crate::population::{Census, Population};
use crate::rng::{RngManager, PLACEMENT_STREAM};
use crate::scenario::Scenario;

/// What changed during one tick.
#[derive(Clone, Debug, Serialize)]
pub struct TickSummary {
    pub tick: u64,
    pub census: Census,
    pub new_infections: usize,
    pub recoveries: usize,
    pub duration_ms: f64,
}

/// How a run ended.
#[derive(Clone, Debug, Serialize)]
pub struct RunOutcome {
    pub ticks: u64,
    pub completed: bool,
    pub peak_infected: usize,
    pub final_census: Census,
}

/// Drives a population tick by tick and reports on it.
#[derive(Debug)]
pub struct Engine {
    population: Population,
    seed: u64,
}

impl Engine {
    pub fn new(
        config: SimulationConfig,
        params: PopulationParams,
        seed: u64,
    ) -> Result<Self, PopulationError> {
        let mut rng = RngManager::new(seed);
        let population = Population::new(config, params, &mut rng.stream(PLACEMENT_STREAM))?;
        info!(
            seed,
            size = params.size,
            infected = params.initial_infected,
            immune = params.initial_immune,
            "population seeded"
        );
        Ok(Self { population, seed })
    }

    pub fn from_scenario(scenario: &Scenario) -> Result<Self, PopulationError> {
        Self::new(
            scenario.simulation_config(),
            scenario.population,
            scenario.seed,
        )
    }

    /// Runs over an already placed population.
    pub fn with_population(population: Population) -> Self {
        Self {
            population,
            seed: 0,
        }
    }

    pub fn step(&mut self) -> TickSummary {
        let before = self.population.census();
        let start = Instant::now();
        self.population.advance_tick();
        let duration_ms = start.elapsed().as_secs_f64() * 1_000.0;
        let census = self.population.census();

        let summary = TickSummary {
            tick: self.population.tick_count(),
            census,
            new_infections: before.susceptible.saturating_sub(census.susceptible),
            recoveries: census.immune.saturating_sub(before.immune),
            duration_ms,
        };
        debug!(
            tick = summary.tick,
            susceptible = census.susceptible,
            infected = census.infected,
            immune = census.immune,
            new_infections = summary.new_infections,
            recoveries = summary.recoveries,
            "tick"
        );
        summary
    }

    pub fn run(&mut self, max_ticks: u64) -> RunOutcome {
        self.run_with_hook(max_ticks, |_| {})
    }

    /// Steps until no entity is infected or `max_ticks` more ticks have run.
    pub fn run_with_hook<F>(&mut self, max_ticks: u64, mut hook: F) -> RunOutcome
    where
        F: FnMut(&TickSummary),
    {
        let mut peak_infected = self.population.census().infected;
        let mut ticks = 0;
        while ticks < max_ticks && !self.population.is_complete() {
            let summary = self.step();
            peak_infected = peak_infected.max(summary.census.infected);
            hook(&summary);
            ticks += 1;
        }

        let outcome = RunOutcome {
            ticks,
            completed: self.population.is_complete(),
            peak_infected,
            final_census: self.population.census(),
        };
        if outcome.completed {
            info!(
                ticks = outcome.ticks,
                peak_infected,
                immune = outcome.final_census.immune,
                untouched = outcome.final_census.susceptible,
                "outbreak over"
            );
        } else {
            warn!(
                ticks = outcome.ticks,
                infected = outcome.final_census.infected,
                "tick limit reached with infections remaining"
            );
        }
        outcome
    }

    pub fn is_complete(&self) -> bool {
        self.population.is_complete()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
