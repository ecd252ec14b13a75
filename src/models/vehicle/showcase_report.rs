use std::convert::Infallible;

use twine_core::Model;

use super::{Report, Showcase};

/// Model adapter that turns a [`Showcase`] into its [`Report`].
///
/// ```
/// use race_models::models::vehicle::{Showcase, ShowcaseReport};
/// use twine_core::Model;
///
/// let report = ShowcaseReport.call(&Showcase::reference()).unwrap();
/// assert_eq!(report.horsepower, 450);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowcaseReport;

impl Model for ShowcaseReport {
    type Input = Showcase;
    type Output = Report;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::vehicle::{Car, Engine};

    #[test]
    fn delegates_to_showcase() {
        let showcase = Showcase::reference();
        let report = ShowcaseReport.call(&showcase).unwrap();
        assert_eq!(report, showcase.report());
    }

    #[test]
    fn custom_showcase() {
        let showcase = Showcase::new(
            Engine::new(300, 410.25),
            Car::new(280, 1450, Engine::new(300, 410.25), "blue"),
        );
        let report = ShowcaseReport.call(&showcase).unwrap();

        assert_relative_eq!(report.result, 710.25);
        assert_eq!(report.color, "blue");
        assert_eq!(report.max_speed, 280);
        assert_eq!(report.weight, 1450);
    }
}
