use serde::{Deserialize, Serialize};

/// Disease state of a single entity.
///
/// Only the infected branch carries a counter: the number of ticks the
/// entity has spent infected since it was last infected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected {
        elapsed_ticks: u32,
    },
    Immune,
}

impl HealthState {
    pub fn is_susceptible(&self) -> bool {
        matches!(self, HealthState::Susceptible)
    }

    pub fn is_infected(&self) -> bool {
        matches!(self, HealthState::Infected { .. })
    }

    pub fn is_immune(&self) -> bool {
        matches!(self, HealthState::Immune)
    }

    /// One tick of aging. Infected entities accumulate time and recover
    /// once the counter passes `recovery_period`.
    pub fn aged(self, recovery_period: u32) -> HealthState {
        match self {
            HealthState::Infected { elapsed_ticks } => {
                let elapsed_ticks = elapsed_ticks.saturating_add(1);
                if elapsed_ticks > recovery_period {
                    HealthState::Immune
                } else {
                    HealthState::Infected { elapsed_ticks }
                }
            }
            other => other,
        }
    }

    /// Marker colour a renderer should draw this state with.
    pub fn color(&self) -> &'static str {
        match self {
            HealthState::Susceptible => "gray",
            HealthState::Infected { .. } => "red",
            HealthState::Immune => "orange",
        }
    }
}
