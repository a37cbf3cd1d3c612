// src/models/mod.rs

pub mod decay;
pub mod luminosity;
