// ABOUTME: JSON device profile
// ABOUTME: Installed overlays and package resources for hosts without an overlay service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::manager::{MemoryOverlayManager, OverlayInfo};
use crate::resources::{MemoryResources, PackageEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    #[serde(default)]
    pub overlays: Vec<OverlayInfo>,
    #[serde(default)]
    pub packages: BTreeMap<String, PackageEntry>,
}

impl DeviceProfile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let profile: Self = serde_json::from_str(&content)?;

        debug!(
            path = %path.display(),
            overlays = profile.overlays.len(),
            packages = profile.packages.len(),
            "Loaded device profile"
        );
        Ok(profile)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn overlay_manager(&self) -> MemoryOverlayManager {
        MemoryOverlayManager::new(self.overlays.clone())
    }

    pub fn resources(&self) -> MemoryResources {
        MemoryResources::new(self.packages.clone())
    }

    /// Copy overlay state back from a manager built with `overlay_manager`
    pub fn sync_overlays(&mut self, manager: &MemoryOverlayManager) -> Result<()> {
        self.overlays = manager.snapshot()?;
        Ok(())
    }
}
