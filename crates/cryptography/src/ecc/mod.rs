//! Elliptic curve points and named curves.

mod eccurve;
mod ecpoint;

pub use eccurve::*;
pub use ecpoint::*;
