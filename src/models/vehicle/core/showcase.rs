use std::io::Write;

use super::{Car, Engine, Report, ReportError};

/// A standalone engine displayed next to a car.
///
/// The car carries its own copy of an engine; changing one never changes
/// the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    /// The standalone engine.
    pub engine: Engine,

    /// The car on display.
    pub car: Car,
}

impl Showcase {
    /// Creates a showcase from an engine and a car.
    #[must_use]
    pub fn new(engine: Engine, car: Car) -> Self {
        Self { engine, car }
    }

    /// Returns the reference showcase: a 450 hp, 550.5 N·m engine and a red
    /// 320 km/h, 1200 kg car fitted with an identical engine.
    #[must_use]
    pub fn reference() -> Self {
        let engine = Engine::new(450, 550.5);
        let car = Car::new(320, 1200, Engine::new(450, 550.5), "red");
        Self::new(engine, car)
    }

    /// Collects the values shown by the report.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            result: self.engine.rating(),
            horsepower: self.engine.horsepower,
            torque: self.engine.torque,
            color: self.car.color.clone(),
            max_speed: self.car.max_speed,
            weight: self.car.weight,
        }
    }

    /// Writes the rendered report to `out` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Write`] if writing or flushing fails.
    pub fn write_report(&self, out: &mut impl Write) -> Result<(), ReportError> {
        let report = self.report();
        write!(out, "{report}")?;
        out.flush()?;

        tracing::debug!(
            horsepower = report.horsepower,
            color = %report.color,
            "wrote showcase report"
        );
        Ok(())
    }
}
