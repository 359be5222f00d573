//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use crate::io::error::{Result, invalid_parameter};

/// Log filter for the given verbosity, `RUST_LOG` taking precedence
pub fn log_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if quiet {
            QUIET_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    })
}

/// Install a global stderr subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init_logging(quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| invalid_parameter("logging", &"global subscriber", &e))
}
