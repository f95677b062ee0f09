use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A 2-D coordinate or displacement in arena units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Heading of length `magnitude` pointing at `angle` radians.
    pub fn from_angle(angle: f64, magnitude: f64) -> Self {
        Self {
            x: angle.cos() * magnitude,
            y: angle.sin() * magnitude,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn distance(self, other: Vector2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(self) -> f64 {
        self.distance(Vector2::ZERO)
    }

    pub fn with_x(self, x: f64) -> Vector2 {
        Vector2 { x, ..self }
    }

    pub fn with_y(self, y: f64) -> Vector2 {
        Vector2 { y, ..self }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn add_is_component_wise() {
        let sum = Vector2::new(1.5, -2.0).add(Vector2::new(0.5, 4.0));
        assert_eq!(sum, Vector2::new(2.0, 2.0));
        assert_eq!(Vector2::new(1.0, 1.0) + Vector2::ZERO, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Vector2::new(-13.25, 88.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vector2::new(3.0, 0.0);
        let b = Vector2::new(0.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn from_angle_scales_to_magnitude() {
        let heading = Vector2::from_angle(PI / 3.0, 5.0);
        assert!((heading.length() - 5.0).abs() < 1e-12);

        let east = Vector2::from_angle(0.0, 2.0);
        assert!((east.x - 2.0).abs() < 1e-12);
        assert!(east.y.abs() < 1e-12);
    }
}
