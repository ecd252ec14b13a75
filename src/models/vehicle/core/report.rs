use std::{fmt, io};

use thiserror::Error;

/// The values shown by the showcase report.
///
/// [`Display`](fmt::Display) renders four newline-terminated lines, with
/// floating-point values shown to two decimals:
///
/// ```
/// use race_models::models::vehicle::Showcase;
///
/// let report = Showcase::reference().report();
/// assert_eq!(
///     report.to_string(),
///     "result = 1000.50\n\
///      horsepower = 450\n\
///      torque = 550.50\n\
///      Car: red, maxSpeed=320, weight=1200\n",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Standalone engine horsepower plus torque.
    pub result: f32,

    /// Standalone engine horsepower.
    pub horsepower: i32,

    /// Standalone engine torque.
    pub torque: f32,

    /// Car color.
    pub color: String,

    /// Car top speed.
    pub max_speed: i32,

    /// Car weight.
    pub weight: i32,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "result = {:.2}", self.result)?;
        writeln!(f, "horsepower = {}", self.horsepower)?;
        writeln!(f, "torque = {:.2}", self.torque)?;
        writeln!(
            f,
            "Car: {}, maxSpeed={}, weight={}",
            self.color, self.max_speed, self.weight
        )
    }
}

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output sink rejected the write or flush.
    #[error("failed to write report")]
    Write(#[from] io::Error),
}
