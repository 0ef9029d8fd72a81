// src/core/error.rs

use thiserror::Error;

/// Errors raised by polynomial conversions.
///
/// Construction, addition, multiplication and shifting are total, so the only
/// failure is a value that does not fit the requested integer width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    #[error("polynomial of length {length} does not fit in a {width}-bit integer")]
    Overflow { length: usize, width: u32 },
}
