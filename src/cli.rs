// src/cli.rs
// Command runner for the binpoly binary, kept out of main.rs so it can be tested

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config::{BinpolyConfig, OutputFormat};
use crate::core::error::PolynomialError;
use crate::core::logging;
use crate::polynomial::{BinaryPolynomial, BitOrder, MAX_LEN};

pub const USAGE: &str = "\
usage: binpoly [--msb | --lsb] [--format binary|polynomial|int|json] [--config PATH] <command>

commands:
  show <p>        render a polynomial
  add <a> <b>     a + b (coefficient-wise XOR)
  mul <a> <b>     a * b (carry-less, unreduced)
  shl <p> <n>     shift p left by n bits (negative n shifts right)
  shr <p> <n>     shift p right by n bits (negative n shifts left)
  int <p>         integer value of p";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(String),
    Add(String, String),
    Mul(String, String),
    Shl(String, isize),
    Shr(String, isize),
    Int(String),
}

/// Parsed command line, with options left unset when not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub order: Option<BitOrder>,
    pub format: Option<OutputFormat>,
    pub config_path: Option<String>,
    pub command: Command,
}

#[derive(Debug, Serialize)]
struct Report {
    binary: String,
    polynomial: String,
    length: usize,
    int: Option<u64>,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut order = None;
    let mut format = None;
    let mut config_path = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--msb" => order = Some(BitOrder::MsbFirst),
            "--lsb" => order = Some(BitOrder::LsbFirst),
            "--format" => {
                let value = iter.next().ok_or_else(|| usage("--format needs a value"))?;
                format = Some(value.parse::<OutputFormat>().map_err(CliError::Usage)?);
            }
            "--config" => {
                let value = iter.next().ok_or_else(|| usage("--config needs a path"))?;
                config_path = Some(value.clone());
            }
            // single-dash values such as "-2" stay positional
            flag if flag.starts_with("--") => return Err(usage(&format!("unknown option {}", flag))),
            other => positional.push(other),
        }
    }

    let command = match positional.as_slice() {
        ["show", p] => Command::Show(p.to_string()),
        ["add", a, b] => Command::Add(a.to_string(), b.to_string()),
        ["mul", a, b] => Command::Mul(a.to_string(), b.to_string()),
        ["shl", p, n] => Command::Shl(p.to_string(), parse_amount(n)?),
        ["shr", p, n] => Command::Shr(p.to_string(), parse_amount(n)?),
        ["int", p] => Command::Int(p.to_string()),
        [] => return Err(usage("missing command")),
        [name, ..] => return Err(usage(&format!("bad arguments for command {}", name))),
    };

    Ok(Invocation {
        order,
        format,
        config_path,
        command,
    })
}

fn parse_amount(text: &str) -> Result<isize, CliError> {
    let amount = text
        .trim()
        .parse::<isize>()
        .map_err(|_| usage(&format!("shift amount must be an integer, got {}", text)))?;
    if amount.unsigned_abs() > MAX_LEN {
        return Err(usage(&format!("shift amount {} exceeds {}", amount, MAX_LEN)));
    }
    Ok(amount)
}

fn shift_out_of_range(amount: isize, poly: &BinaryPolynomial) -> CliError {
    usage(&format!(
        "shifting a polynomial of length {} by {} exceeds {} bits",
        poly.len(),
        amount,
        MAX_LEN
    ))
}

fn usage(message: &str) -> CliError {
    CliError::Usage(message.to_string())
}

/// Evaluate a command, reading operands in the given bit order.
pub fn execute(command: &Command, order: BitOrder) -> Result<BinaryPolynomial, CliError> {
    let read = |text: &str| BinaryPolynomial::parse(text, order);

    let result = match command {
        Command::Show(p) | Command::Int(p) => read(p),
        Command::Add(a, b) => read(a).add(&read(b)),
        Command::Mul(a, b) => read(a).multiply(&read(b)),
        Command::Shl(p, n) => {
            let poly = read(p);
            poly.checked_shift_left(*n)
                .ok_or_else(|| shift_out_of_range(*n, &poly))?
        }
        Command::Shr(p, n) => {
            let poly = read(p);
            poly.checked_shift_right(*n)
                .ok_or_else(|| shift_out_of_range(*n, &poly))?
        }
    };
    Ok(result)
}

/// Render a result in the requested format.
pub fn render(poly: &BinaryPolynomial, format: OutputFormat) -> Result<String, CliError> {
    let output = match format {
        OutputFormat::Binary => poly.to_binary_string(),
        OutputFormat::Polynomial => poly.to_polynomial_string(),
        OutputFormat::Int => poly.to_int()?.to_string(),
        OutputFormat::Json => {
            let report = Report {
                binary: poly.to_binary_string(),
                polynomial: poly.to_polynomial_string(),
                length: poly.len(),
                int: poly.to_int().ok(),
            };
            serde_json::to_string(&report)?
        }
    };
    Ok(output)
}

/// Run a full invocation: parse arguments, load configuration, start logging,
/// evaluate and render.
pub fn run(args: &[String]) -> Result<String, CliError> {
    let invocation = parse_args(args)?;

    let config = match &invocation.config_path {
        Some(path) => BinpolyConfig::load_from_file(path)?,
        None => BinpolyConfig::load()?,
    };
    logging::init(&config.log_level);
    debug!("loaded configuration: {:?}", config);

    let order = invocation.order.unwrap_or(config.input_order);
    let format = match invocation.command {
        Command::Int(_) => OutputFormat::Int,
        _ => invocation.format.unwrap_or(config.output),
    };

    let result = execute(&invocation.command, order)?;
    info!("{:?} -> {}", invocation.command, result);
    render(&result, format)
}
