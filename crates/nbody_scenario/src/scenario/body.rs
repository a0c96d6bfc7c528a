//! Plain value records for the bodies of a scenario.
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 2D velocity in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    /// Velocity of a body at rest.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point mass with its initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// Initial position in meters.
    pub position: Position,
    /// Mass in kilograms.
    pub mass: f64,
    /// Initial velocity.
    pub velocity: Velocity,
}

impl Body {
    pub const fn new(position: Position, mass: f64, velocity: Velocity) -> Self {
        Self {
            position,
            mass,
            velocity,
        }
    }

    /// Create a body with zero initial velocity.
    pub const fn at_rest(position: Position, mass: f64) -> Self {
        Self::new(position, mass, Velocity::ZERO)
    }
}

impl From<Vector2<f64>> for Position {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for Vector2<f64> {
    fn from(p: Position) -> Self {
        Vector2 { x: p.x, y: p.y }
    }
}

impl From<Vector2<f64>> for Velocity {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Velocity> for Vector2<f64> {
    fn from(v: Velocity) -> Self {
        Vector2 { x: v.x, y: v.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_rest_has_zero_velocity() {
        let body = Body::at_rest(Position::new(1.0, 2.0), 3.0);
        assert_eq!(body.velocity, Velocity::ZERO);
        assert_eq!(body.position, Position::new(1.0, 2.0));
        assert_eq!(body.mass, 3.0);
    }

    #[test]
    fn mint_conversions_keep_components() {
        let p: Vector2<f64> = Position::new(-4.5, 8.25).into();
        assert_eq!((p.x, p.y), (-4.5, 8.25));
        assert_eq!(Position::from(p), Position::new(-4.5, 8.25));

        let v = Velocity::from(Vector2 { x: 1.0, y: -1.0 });
        assert_eq!(v, Velocity::new(1.0, -1.0));
    }
}
