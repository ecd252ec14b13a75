//! Extensions to [`uom`] for race records.
//!
//! Race records store plain numbers, the way the generated C structs do:
//! there is no "kg" in C. This module fixes the unit each raw value is
//! measured in and converts it to a [`uom`] quantity:
//!
//! | Raw value    | Unit                    |
//! |--------------|-------------------------|
//! | horsepower   | mechanical horsepower   |
//! | torque       | newton meter            |
//! | max speed    | kilometer per hour      |
//! | weight       | kilogram                |
//!
//! ```
//! use uom::si::power::watt;
//! use race_models::support::units::power_from_horsepower;
//!
//! let power = power_from_horsepower(1);
//! assert!((power.get::<watt>() - 745.7).abs() < 0.1);
//! ```

mod quantities;

pub use quantities::SpecificPower;

use uom::si::{
    f64::{Mass, Power, Torque, Velocity},
    mass::kilogram,
    power::horsepower,
    torque::newton_meter,
    velocity::kilometer_per_hour,
};

/// Converts a raw horsepower value to [`Power`].
#[must_use]
pub fn power_from_horsepower(hp: i32) -> Power {
    Power::new::<horsepower>(f64::from(hp))
}

/// Converts a raw torque value in N·m to [`Torque`].
#[must_use]
pub fn torque_from_newton_meters(torque: f32) -> Torque {
    Torque::new::<newton_meter>(f64::from(torque))
}

/// Converts a raw speed value in km/h to [`Velocity`].
#[must_use]
pub fn velocity_from_kph(speed: i32) -> Velocity {
    Velocity::new::<kilometer_per_hour>(f64::from(speed))
}

/// Converts a raw weight value in kg to [`Mass`].
#[must_use]
pub fn mass_from_kilograms(weight: i32) -> Mass {
    Mass::new::<kilogram>(f64::from(weight))
}
