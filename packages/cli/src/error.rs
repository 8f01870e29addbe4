use thiserror::Error;
use xpe_config::ConfigError;
use xpe_overlays::OverlayError;
use xpe_settings::SettingsError;
use xpe_storage::StorageError;

/// Errors surfaced by the host
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),
}

pub type CliResult<T> = Result<T, CliError>;
