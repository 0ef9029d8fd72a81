// src/polynomial/mod.rs

pub mod binary_polynomial;
pub mod bit_order;
pub mod rendering;

pub use binary_polynomial::{BinaryPolynomial, INT_WIDTH, MAX_LEN};
pub use bit_order::BitOrder;
