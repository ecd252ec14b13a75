use uom::si::f64::{Power, Torque};

use crate::support::units::{power_from_horsepower, torque_from_newton_meters};

/// An engine described by its horsepower and torque.
///
/// Engines are plain values: copying one into a [`Car`](super::Car) gives the
/// car its own engine, independent of the original.
///
/// # Example
///
/// ```
/// use race_models::models::vehicle::Engine;
///
/// let engine = Engine::new(450, 550.5);
/// assert_eq!(engine.rating(), 1000.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    /// Peak power in mechanical horsepower.
    pub horsepower: i32,

    /// Peak torque in N·m.
    pub torque: f32,
}

impl Engine {
    /// Creates an engine from raw horsepower and torque values.
    #[must_use]
    pub fn new(horsepower: i32, torque: f32) -> Self {
        Self { horsepower, torque }
    }

    /// Returns horsepower plus torque, computed in single precision.
    ///
    /// The horsepower is promoted to `f32` before the addition.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rating(&self) -> f32 {
        self.horsepower as f32 + self.torque
    }

    /// Returns the engine power as a quantity.
    #[must_use]
    pub fn power(&self) -> Power {
        power_from_horsepower(self.horsepower)
    }

    /// Returns the engine torque as a quantity.
    #[must_use]
    pub fn torque_quantity(&self) -> Torque {
        torque_from_newton_meters(self.torque)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::kilowatt, torque::newton_meter};

    #[test]
    fn rating_adds_horsepower_and_torque() {
        let engine = Engine::new(450, 550.5);
        assert_relative_eq!(engine.rating(), 1000.5);
        assert_eq!(format!("{:.2}", engine.rating()), "1000.50");

        let engine = Engine::new(0, 0.0);
        assert_relative_eq!(engine.rating(), 0.0);

        let engine = Engine::new(-10, 2.25);
        assert_relative_eq!(engine.rating(), -7.75);
    }

    #[test]
    fn quantities() {
        let engine = Engine::new(450, 550.5);
        assert_relative_eq!(engine.power().get::<kilowatt>(), 335.564_9, epsilon = 1e-3);
        assert_relative_eq!(engine.torque_quantity().get::<newton_meter>(), 550.5);
    }

    #[test]
    fn copies_are_independent() {
        let original = Engine::new(450, 550.5);
        let mut copy = original;
        copy.horsepower = 500;
        copy.torque = 600.0;

        assert_eq!(original, Engine::new(450, 550.5));
        assert_ne!(original, copy);
    }
}
