//! Bounded arena - placement and reflective walls

use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::geometry::Vector2;

/// Axis-aligned rectangle centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub half_width: f64,
    pub half_height: f64,
}

impl Arena {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    pub fn min_x(&self) -> f64 {
        -self.half_width
    }

    pub fn max_x(&self) -> f64 {
        self.half_width
    }

    pub fn min_y(&self) -> f64 {
        -self.half_height
    }

    pub fn max_y(&self) -> f64 {
        self.half_height
    }

    pub fn contains(&self, point: Vector2) -> bool {
        (self.min_x()..=self.max_x()).contains(&point.x)
            && (self.min_y()..=self.max_y()).contains(&point.y)
    }

    /// Uniform point inside the arena.
    pub fn random_location<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2 {
        let x = rng.gen::<f64>() * 2.0 * self.half_width - self.half_width;
        let y = rng.gen::<f64>() * 2.0 * self.half_height - self.half_height;
        Vector2::new(x, y)
    }

    /// Velocity with a uniform heading in `[0, 2π)` and length `speed`.
    pub fn random_heading<R: Rng + ?Sized>(&self, rng: &mut R, speed: f64) -> Vector2 {
        let angle = TAU * rng.gen::<f64>();
        Vector2::from_angle(angle, speed)
    }

    /// Bounces an entity off the walls: each axis is clamped back to the
    /// wall it crossed and that velocity component flips sign.
    pub fn reflect(&self, entity: &mut Entity) {
        let Entity {
            position, velocity, ..
        } = entity;

        if position.x > self.max_x() {
            *position = position.with_x(self.max_x());
            *velocity = velocity.with_x(-velocity.x);
        } else if position.x < self.min_x() {
            *position = position.with_x(self.min_x());
            *velocity = velocity.with_x(-velocity.x);
        }

        if position.y > self.max_y() {
            *position = position.with_y(self.max_y());
            *velocity = velocity.with_y(-velocity.y);
        } else if position.y < self.min_y() {
            *position = position.with_y(self.min_y());
            *velocity = velocity.with_y(-velocity.y);
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(200.0, 200.0)
    }
}
