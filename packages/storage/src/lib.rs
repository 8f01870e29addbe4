// ABOUTME: Data layer for XPerience settings
// ABOUTME: Settings store trait with SQLite and in-memory backends, plus system properties

use thiserror::Error;
use xpe_core::SettingScope;

pub mod memory;
pub mod properties;
pub mod sqlite;
pub mod store;

pub use memory::MemorySettingsStore;
pub use properties::{load_prop_file, parse_props, MapPropertyStore, PropertyStore};
pub use sqlite::SqliteSettingsStore;
pub use store::SettingsStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Permission denied writing {scope} setting: {key}")]
    PermissionDenied { scope: SettingScope, key: String },
    #[error("Invalid setting key: {0:?}")]
    InvalidKey(String),
    #[error("Invalid property line {line}: {content}")]
    InvalidPropertyLine { line: usize, content: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Reject keys the platform store would refuse
pub(crate) fn check_key(key: &str) -> StorageResult<()> {
    if key.trim().is_empty() {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
