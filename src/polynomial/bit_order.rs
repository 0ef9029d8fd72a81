// src/polynomial/bit_order.rs

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

/// Which end of a bit string holds the highest power of `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitOrder {
    /// First character is the highest degree, as numbers are usually written.
    #[default]
    #[serde(alias = "msb")]
    MsbFirst,
    /// First character is the coefficient of `x^0`.
    #[serde(alias = "lsb")]
    LsbFirst,
}

impl FromStr for BitOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "msb" | "msb_first" | "msb-first" => Ok(BitOrder::MsbFirst),
            "lsb" | "lsb_first" | "lsb-first" => Ok(BitOrder::LsbFirst),
            other => Err(format!("unknown bit order: {}", other)),
        }
    }
}

impl Display for BitOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BitOrder::MsbFirst => write!(f, "msb_first"),
            BitOrder::LsbFirst => write!(f, "lsb_first"),
        }
    }
}
