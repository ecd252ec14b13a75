use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N3, P2, Z0},
};

/// Specific power (power-to-weight ratio), W/kg in SI.
pub type SpecificPower = Quantity<ISQ<P2, Z0, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
