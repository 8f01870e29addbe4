use thiserror::Error;
use xpe_storage::StorageError;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Resource {resource} not found in package {package}")]
    MissingResource { package: String, resource: String },

    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Not a choice for this picker: {0}")]
    UnknownChoice(String),

    #[error("Overlay manager error: {0}")]
    Manager(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
