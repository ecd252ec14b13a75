//! Public race models.
//!
//! Models are organized into domain-specific submodules. Only `vehicle`
//! exists today.
//!
//! # Model structure
//!
//! Each domain keeps its records and logic in an internal `core` submodule,
//! which is **not** part of the public API. The types it defines are
//! re-exported by the domain module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the core API.

pub mod vehicle;
