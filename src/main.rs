// src/main.rs

use log::error;

use binpoly::cli::{self, CliError};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::run(&args) {
        Ok(output) => println!("{}", output),
        Err(CliError::Usage(message)) => {
            eprintln!("{}\n\n{}", message, cli::USAGE);
            std::process::exit(2);
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
