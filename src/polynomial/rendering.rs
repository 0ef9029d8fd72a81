// src/polynomial/rendering.rs

use std::fmt::{Display, Formatter, Result};

use crate::polynomial::binary_polynomial::BinaryPolynomial;

impl BinaryPolynomial {
    /// Bits from the highest position down to `x^0`, e.g. `[1 0 0 1 1]`.
    /// The zero polynomial renders as `[]`.
    pub fn to_binary_string(&self) -> String {
        let digits: Vec<&str> = self
            .as_bits()
            .iter()
            .rev()
            .map(|bit| if *bit { "1" } else { "0" })
            .collect();
        format!("[{}]", digits.join(" "))
    }

    /// Algebraic form from highest to lowest degree, e.g. `x^4 + x + 1`.
    /// The zero polynomial renders as `0`.
    pub fn to_polynomial_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let terms: Vec<String> = self
            .as_bits()
            .iter_ones()
            .rev()
            .map(monomial_string)
            .collect();
        terms.join(" + ")
    }
}

fn monomial_string(degree: usize) -> String {
    match degree {
        0 => "1".to_string(),
        1 => "x".to_string(),
        _ => format!("x^{}", degree),
    }
}

impl Display for BinaryPolynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.to_binary_string())
    }
}
