use uom::si::f64::{Mass, Velocity};

use crate::support::units::{SpecificPower, mass_from_kilograms, velocity_from_kph};

use super::Engine;

/// A car composed of an owned [`Engine`] and its body attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    /// Top speed in km/h.
    pub max_speed: i32,

    /// Weight in kg.
    pub weight: i32,

    /// The car's own engine.
    pub engine: Engine,

    /// Paint color.
    pub color: String,
}

impl Car {
    /// Creates a car from raw values and an engine.
    #[must_use]
    pub fn new(max_speed: i32, weight: i32, engine: Engine, color: impl Into<String>) -> Self {
        Self {
            max_speed,
            weight,
            engine,
            color: color.into(),
        }
    }

    /// Returns the top speed as a quantity.
    #[must_use]
    pub fn top_speed(&self) -> Velocity {
        velocity_from_kph(self.max_speed)
    }

    /// Returns the car's mass as a quantity.
    #[must_use]
    pub fn mass(&self) -> Mass {
        mass_from_kilograms(self.weight)
    }

    /// Returns engine power per unit mass.
    ///
    /// A zero weight yields an infinite (or `NaN`) ratio; no check is made.
    #[must_use]
    pub fn power_to_weight(&self) -> SpecificPower {
        self.engine.power() / self.mass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass::kilogram, velocity::meter_per_second};

    fn supercar() -> Car {
        Car::new(320, 1200, Engine::new(450, 550.5), "red")
    }

    #[test]
    fn body_quantities() {
        let car = supercar();
        assert_relative_eq!(car.top_speed().get::<meter_per_second>(), 88.888_89, epsilon = 1e-4);
        assert_relative_eq!(car.mass().get::<kilogram>(), 1200.0);
    }

    #[test]
    fn power_to_weight_in_watts_per_kilogram() {
        let car = supercar();
        // 450 hp = 335 564.94 W over 1200 kg.
        assert_relative_eq!(car.power_to_weight().value, 279.637_45, epsilon = 1e-3);
    }

    #[test]
    fn owns_its_engine() {
        let engine = Engine::new(450, 550.5);
        let mut car = Car::new(320, 1200, engine, "red");
        car.engine.horsepower = 600;

        assert_eq!(engine.horsepower, 450);
        assert_eq!(car.engine.horsepower, 600);
    }

    #[test]
    fn clones_do_not_alias() {
        let car = supercar();
        let mut other = car.clone();
        other.color.push_str("dish");
        other.engine.torque = 0.0;

        assert_eq!(car.color, "red");
        assert_relative_eq!(car.engine.torque, 550.5);
        assert_eq!(other.color, "reddish");
    }
}
