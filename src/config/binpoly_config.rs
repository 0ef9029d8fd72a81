// src/config/binpoly_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use crate::polynomial::BitOrder;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `[1 0 1]`
    #[default]
    Binary,
    /// `x^2 + 1`
    Polynomial,
    /// `5`
    Int,
    /// All of the above as a JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(OutputFormat::Binary),
            "polynomial" | "poly" => Ok(OutputFormat::Polynomial),
            "int" | "integer" => Ok(OutputFormat::Int),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Binary => "binary",
            OutputFormat::Polynomial => "polynomial",
            OutputFormat::Int => "int",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// Main binpoly configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinpolyConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Bit order used when reading polynomials from the command line
    pub input_order: BitOrder,

    /// Rendering used for results
    pub output: OutputFormat,
}

impl Default for BinpolyConfig {
    fn default() -> Self {
        BinpolyConfig {
            log_level: "warn".to_string(),
            input_order: BitOrder::MsbFirst,
            output: OutputFormat::Binary,
        }
    }
}

impl BinpolyConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("binpoly.toml").exists() {
            builder = builder.add_source(File::with_name("binpoly.toml"));
        } else if Path::new("binpoly.yaml").exists() {
            builder = builder.add_source(File::with_name("binpoly.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        } else {
            return Err(ConfigError::NotFound(path.as_ref().display().to_string()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "warn")?
            .set_default("input_order", BitOrder::MsbFirst.to_string())?
            .set_default("output", OutputFormat::Binary.to_string())
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (BINPOLY__OUTPUT=int)
        let config = builder
            .add_source(Environment::with_prefix("BINPOLY").separator("__"))
            .build()?;
        config.try_deserialize()
    }
}
