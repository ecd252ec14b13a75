//! Engine and car records and the fixed showcase built from them.
//!
//! Records hold raw numbers in the units documented in
//! [`crate::support::units`]; the unit-aware accessors convert on demand.

mod c_source;
mod car;
mod engine;
mod report;
mod showcase;

pub use car::Car;
pub use engine::Engine;
pub use report::{Report, ReportError};
pub use showcase::Showcase;
