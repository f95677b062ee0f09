use serde::{Deserialize, Serialize};

use crate::arena::Arena;

pub const DEFAULT_CONTACT_RADIUS: f64 = 15.0;
pub const DEFAULT_RECOVERY_PERIOD: u32 = 90;
pub const DEFAULT_POPULATION_SIZE: usize = 50;
pub const DEFAULT_SPEED: f64 = 5.0;
pub const DEFAULT_INITIAL_INFECTED: usize = 3;

/// World rules shared by every entity of a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub arena: Arena,
    /// Two entities strictly closer than this are in contact.
    pub contact_radius: f64,
    /// Ticks an entity may stay infected; one more makes it immune.
    pub recovery_period: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            contact_radius: DEFAULT_CONTACT_RADIUS,
            recovery_period: DEFAULT_RECOVERY_PERIOD,
        }
    }
}

/// How a freshly generated population is composed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationParams {
    pub size: usize,
    pub speed: f64,
    pub initial_infected: usize,
    pub initial_immune: usize,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_POPULATION_SIZE,
            speed: DEFAULT_SPEED,
            initial_infected: DEFAULT_INITIAL_INFECTED,
            initial_immune: 0,
        }
    }
}
