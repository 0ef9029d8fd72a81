// src/core/logging.rs

use env_logger::Env;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BINPOLY_LOG";
/// Environment variable holding the log write style.
pub const LOG_STYLE_ENV: &str = "BINPOLY_LOG_STYLE";

/// Initialize the global logger.
///
/// `BINPOLY_LOG` wins over `default_level`. Calling this more than once is
/// harmless: later calls leave the first logger in place.
pub fn init(default_level: &str) {
    let env = Env::default()
        .filter_or(LOG_ENV, default_level)
        .write_style_or(LOG_STYLE_ENV, "auto");

    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::trace!("logger already initialized");
    }
}
