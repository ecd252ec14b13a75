//! Vehicle models.
//!
//! This module provides the [`Engine`] and [`Car`] records, the fixed
//! [`Showcase`] pair, and the [`ShowcaseReport`] adapter implementing
//! [`twine_core::Model`]. The records live in the internal `core` module.

mod core;
mod showcase_report;

pub use self::core::{Car, Engine, Report, ReportError, Showcase};
pub use showcase_report::ShowcaseReport;
