// src/math/mod.rs

pub mod comparison;
pub mod error;
pub mod integrator;
pub mod quadrature;

#[cfg(test)]
mod proptests;

pub use comparison::{relative_error, ComparisonRecord};
pub use error::MathError;
pub use integrator::{OdeMethod, TimeGrid, Trajectory};
pub use quadrature::{OddPanelPolicy, QuadratureMethod, QuadratureResult};
