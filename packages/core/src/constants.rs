use std::env;
use std::path::PathBuf;

/// Get the path to the XPerience data directory (~/.xpe)
pub fn xpe_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".xpe")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".xpe")
    }
}

/// Get the path to the settings database (~/.xpe/settings.db)
pub fn settings_db_file() -> PathBuf {
    xpe_dir().join("settings.db")
}
