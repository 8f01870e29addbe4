// ABOUTME: Host configuration loaded from the environment
// ABOUTME: Database location, acting user, property file, device profile, and log filter

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::constants::{XPE_DATABASE_URL, XPE_LOG, XPE_PROFILE, XPE_PROPS_FILE, XPE_USER_ID};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(#[from] ParseIntError),
    #[error("User id {0} is out of valid range (must be >= 0)")]
    UserIdOutOfRange(i32),
    #[error("Database URL cannot be empty")]
    EmptyDatabaseUrl,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection string of the settings store
    pub database_url: String,
    /// User the host resolves `UserId::CURRENT` to
    pub user_id: i32,
    /// `build.prop` style file backing the system property store
    pub props_file: Option<PathBuf>,
    /// JSON device profile listing installed overlays and package resources
    pub profile: Option<PathBuf>,
    /// Fallback tracing filter when RUST_LOG is not set
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var(XPE_DATABASE_URL).unwrap_or_else(|_| {
            format!("sqlite://{}?mode=rwc", xpe_core::settings_db_file().display())
        });

        if database_url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        let user_id = env::var(XPE_USER_ID)
            .unwrap_or_else(|_| "0".to_string())
            .trim()
            .parse::<i32>()?;

        if user_id < 0 {
            return Err(ConfigError::UserIdOutOfRange(user_id));
        }

        let props_file = env::var(XPE_PROPS_FILE)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let profile = env::var(XPE_PROFILE)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = env::var(XPE_LOG).unwrap_or_else(|_| "warn".to_string());

        debug!(%database_url, user_id, "Loaded host configuration");

        Ok(Config {
            database_url,
            user_id,
            props_file,
            profile,
            log_filter,
        })
    }
}
