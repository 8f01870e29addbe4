use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Install the fmt subscriber. RUST_LOG wins over the configured filter.
pub fn init_tracing(fallback: &str) -> CliResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback).map_err(|e| CliError::LogFilter(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::LogFilter(e.to_string()))
}
