// src/config/mod.rs

pub mod binpoly_config;

// Re-export main types for convenience
pub use binpoly_config::{BinpolyConfig, OutputFormat};
