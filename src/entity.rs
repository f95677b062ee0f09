use serde::{Deserialize, Serialize};

use crate::geometry::Vector2;
use crate::health::HealthState;

/// One moving, disease-bearing particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub position: Vector2,
    pub velocity: Vector2,
    pub health: HealthState,
}

impl Entity {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            health: HealthState::Susceptible,
        }
    }

    pub fn with_health(mut self, health: HealthState) -> Self {
        self.health = health;
        self
    }

    /// Moves one step along the velocity and ages the infection, if any.
    /// Called exactly once per tick.
    pub fn advance(&mut self, recovery_period: u32) {
        self.position = self.position.add(self.velocity);
        self.health = self.health.aged(recovery_period);
    }

    pub fn infect(&mut self) {
        self.health = HealthState::Infected { elapsed_ticks: 0 };
    }

    pub fn immunize(&mut self) {
        self.health = HealthState::Immune;
    }

    pub fn is_susceptible(&self) -> bool {
        self.health.is_susceptible()
    }

    pub fn is_infected(&self) -> bool {
        self.health.is_infected()
    }

    pub fn is_immune(&self) -> bool {
        self.health.is_immune()
    }

    /// Applies transmission for a contact between `self` and `other`.
    /// At most one side changes, and only from susceptible to infected.
    pub fn resolve_contact_with(&mut self, other: &mut Entity) {
        if self.is_susceptible() && other.is_infected() {
            self.infect();
        } else if self.is_infected() && other.is_susceptible() {
            other.infect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(health: HealthState) -> Entity {
        Entity::new(Vector2::ZERO, Vector2::ZERO).with_health(health)
    }

    #[test]
    fn advance_moves_by_velocity() {
        let mut entity = Entity::new(Vector2::new(1.0, 2.0), Vector2::new(0.5, -1.0));
        entity.advance(10);
        assert_eq!(entity.position, Vector2::new(1.5, 1.0));
        entity.advance(10);
        assert_eq!(entity.position, Vector2::new(2.0, 0.0));
        assert!(entity.is_susceptible());
    }

    #[test]
    fn infection_counter_climbs_until_recovery() {
        let mut entity = still(HealthState::Susceptible);
        entity.infect();
        for expected in 1..=5 {
            entity.advance(5);
            assert_eq!(
                entity.health,
                HealthState::Infected {
                    elapsed_ticks: expected
                }
            );
        }
        entity.advance(5);
        assert!(entity.is_immune());
        entity.advance(5);
        assert!(entity.is_immune());
    }

    #[test]
    fn infect_resets_counter() {
        let mut entity = still(HealthState::Infected { elapsed_ticks: 7 });
        entity.infect();
        assert_eq!(entity.health, HealthState::Infected { elapsed_ticks: 0 });
    }

    #[test]
    fn susceptible_receiver_catches_from_infected_argument() {
        let mut receiver = still(HealthState::Susceptible);
        let mut carrier = still(HealthState::Infected { elapsed_ticks: 3 });
        receiver.resolve_contact_with(&mut carrier);
        assert_eq!(receiver.health, HealthState::Infected { elapsed_ticks: 0 });
        assert_eq!(carrier.health, HealthState::Infected { elapsed_ticks: 3 });
    }

    #[test]
    fn infected_receiver_passes_to_susceptible_argument() {
        let mut carrier = still(HealthState::Infected { elapsed_ticks: 3 });
        let mut other = still(HealthState::Susceptible);
        carrier.resolve_contact_with(&mut other);
        assert_eq!(other.health, HealthState::Infected { elapsed_ticks: 0 });
        assert_eq!(carrier.health, HealthState::Infected { elapsed_ticks: 3 });
    }

    #[test]
    fn contacts_without_a_susceptible_infected_pair_do_nothing() {
        let states = [
            HealthState::Susceptible,
            HealthState::Infected { elapsed_ticks: 2 },
            HealthState::Immune,
        ];
        for a in states {
            for b in states {
                let transmits = (a.is_susceptible() && b.is_infected())
                    || (a.is_infected() && b.is_susceptible());
                if transmits {
                    continue;
                }
                let mut left = still(a);
                let mut right = still(b);
                left.resolve_contact_with(&mut right);
                assert_eq!((left.health, right.health), (a, b));
            }
        }
    }
}
