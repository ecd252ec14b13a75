//! # Race Models
//!
//! Engine and car records for a small racing showcase, plus the report
//! program that prints them.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain records and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! The `supercar` binary builds the reference [`Showcase`](models::vehicle::Showcase)
//! and writes its report to standard output:
//!
//! ```text
//! result = 1000.50
//! horsepower = 450
//! torque = 550.50
//! Car: red, maxSpeed=320, weight=1200
//! ```
//!
//! Modules in [`support`] are part of the public API, but their APIs are not
//! stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
