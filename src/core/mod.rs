// src/core/mod.rs

pub mod error;
pub mod logging;

pub use error::PolynomialError;
