// ABOUTME: Error types for the settings package
// ABOUTME: Storage, validation, missing resource, and unavailable feature failures

use thiserror::Error;
use xpe_storage::StorageError;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Missing resource: {0}")]
    MissingResource(String),

    #[error("Feature unavailable, property not set: {0}")]
    Unavailable(String),

    #[error("Search index provider already registered: {0}")]
    DuplicateProvider(String),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
