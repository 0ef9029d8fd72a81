// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod polynomial;

pub use crate::core::error::PolynomialError;
pub use crate::polynomial::{BinaryPolynomial, BitOrder, INT_WIDTH, MAX_LEN};
