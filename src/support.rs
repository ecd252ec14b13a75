//! Supporting utilities used by models.

pub mod units;
