// ABOUTME: Host context shared by every command
// ABOUTME: Settings store, system properties, device profile, and search registration

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use xpe_config::Config;
use xpe_core::UserId;
use xpe_overlays::{DeviceProfile, MemoryOverlayManager};
use xpe_settings::{BatterySearchProvider, SearchIndexRegistry};
use xpe_storage::{load_prop_file, MapPropertyStore, SqliteSettingsStore};

use crate::error::CliResult;

pub struct HostContext {
    pub config: Config,
    pub store: Arc<SqliteSettingsStore>,
    pub props: Arc<MapPropertyStore>,
    pub profile: DeviceProfile,
}

impl HostContext {
    pub async fn open(config: Config) -> CliResult<Self> {
        if let Some(dir) = database_dir(&config.database_url) {
            std::fs::create_dir_all(&dir)?;
        }

        let store = SqliteSettingsStore::connect(&config.database_url)
            .await?
            .with_current_user(config.user_id);

        let props = match &config.props_file {
            Some(path) => load_prop_file(path)?,
            None => MapPropertyStore::new(),
        };

        let profile = match &config.profile {
            Some(path) if path.exists() => DeviceProfile::load(path)?,
            Some(path) => {
                warn!(path = %path.display(), "Device profile not found, starting empty");
                DeviceProfile::default()
            }
            None => DeviceProfile::default(),
        };

        debug!(
            user = config.user_id,
            properties = props.len(),
            overlays = profile.overlays.len(),
            "Host context ready"
        );

        Ok(Self {
            config,
            store: Arc::new(store),
            props: Arc::new(props),
            profile,
        })
    }

    /// Controllers act for the configured user through `UserId::CURRENT`
    pub fn user(&self) -> UserId {
        UserId::CURRENT
    }

    /// Screens this host exposes to settings search
    pub fn search_registry(&self) -> CliResult<SearchIndexRegistry> {
        let mut registry = SearchIndexRegistry::new();
        registry.register(BatterySearchProvider::SCREEN, Box::new(BatterySearchProvider))?;
        Ok(registry)
    }

    /// Write overlay state back to the profile file. Returns false when no
    /// profile file is configured.
    pub fn persist_overlays(&mut self, manager: &MemoryOverlayManager) -> CliResult<bool> {
        self.profile.sync_overlays(manager)?;

        match &self.config.profile {
            Some(path) => {
                self.profile.save(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Parent directory of a file-backed SQLite URL
pub fn database_dir(url: &str) -> Option<PathBuf> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
