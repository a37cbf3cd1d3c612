// src/config/mod.rs

pub mod parameters;

pub use parameters::{DecayParameters, LuminosityParameters};
