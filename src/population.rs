use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{PopulationParams, SimulationConfig};
use crate::entity::Entity;
use crate::error::PopulationError;

/// Head count per health state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Census {
    pub susceptible: usize,
    pub infected: usize,
    pub immune: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.immune
    }
}

/// Fixed-size set of entities sharing one arena and one clock.
#[derive(Debug, Clone)]
pub struct Population {
    config: SimulationConfig,
    entities: Vec<Entity>,
    tick_count: u64,
}

impl Population {
    /// Generates a randomly placed population.
    ///
    /// Non-infected entities come first, with the first `initial_immune` of
    /// them immunized, followed by the `initial_infected` seeds.
    pub fn new<R: Rng + ?Sized>(
        config: SimulationConfig,
        params: PopulationParams,
        rng: &mut R,
    ) -> Result<Self, PopulationError> {
        validate_counts(&params)?;

        let arena = config.arena;
        let spawn = |rng: &mut R| {
            let position = arena.random_location(rng);
            let velocity = arena.random_heading(rng, params.speed);
            Entity::new(position, velocity)
        };

        let mut entities = Vec::with_capacity(params.size);
        for index in 0..params.size - params.initial_infected {
            let mut entity = spawn(rng);
            if index < params.initial_immune {
                entity.immunize();
            }
            entities.push(entity);
        }
        for _ in 0..params.initial_infected {
            let mut entity = spawn(rng);
            entity.infect();
            entities.push(entity);
        }

        Ok(Self::from_entities(config, entities))
    }

    /// Wraps entities that were placed by the caller.
    pub fn from_entities(config: SimulationConfig, entities: Vec<Entity>) -> Self {
        Self {
            config,
            entities,
            tick_count: 0,
        }
    }

    /// One tick: move and age every entity, keep it inside the arena, then
    /// let every pair in contact transmit.
    pub fn advance_tick(&mut self) {
        self.tick_count += 1;
        let arena = self.config.arena;
        let recovery_period = self.config.recovery_period;
        for entity in &mut self.entities {
            entity.advance(recovery_period);
            arena.reflect(entity);
        }
        self.resolve_contacts();
    }

    /// Checks all `n(n-1)/2` unordered pairs once, in index order.
    pub fn resolve_contacts(&mut self) {
        let radius = self.config.contact_radius;
        for i in 0..self.entities.len() {
            let (head, tail) = self.entities.split_at_mut(i + 1);
            let current = &mut head[i];
            for other in tail.iter_mut() {
                if current.position.distance(other.position) < radius {
                    current.resolve_contact_with(other);
                }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.entities.iter().any(Entity::is_infected)
    }

    pub fn census(&self) -> Census {
        self.entities
            .iter()
            .fold(Census::default(), |mut census, entity| {
                if entity.is_infected() {
                    census.infected += 1;
                } else if entity.is_immune() {
                    census.immune += 1;
                } else {
                    census.susceptible += 1;
                }
                census
            })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

fn validate_counts(params: &PopulationParams) -> Result<(), PopulationError> {
    if params.initial_infected >= params.size {
        return Err(PopulationError::invalid(format!(
            "infected count {} must be below population size {}",
            params.initial_infected, params.size
        )));
    }
    if params.initial_infected == 0 {
        return Err(PopulationError::invalid(
            "infected count must be greater than zero",
        ));
    }
    if params.initial_immune >= params.size {
        return Err(PopulationError::invalid(format!(
            "immune count {} must be below population size {}",
            params.initial_immune, params.size
        )));
    }
    if params.initial_infected + params.initial_immune > params.size {
        return Err(PopulationError::invalid(format!(
            "infected ({}) plus immune ({}) exceeds population size {}",
            params.initial_infected, params.initial_immune, params.size
        )));
    }
    Ok(())
}
