// ABOUTME: Overlay manager seam
// ABOUTME: Trait over the platform overlay service plus an in-memory implementation

use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::{debug, info};

use crate::error::{OverlayError, Result};

/// One installed overlay package as the overlay service reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayInfo {
    pub package: String,
    pub target: String,
    pub category: String,
    #[serde(default)]
    pub enabled: bool,
}

/// The platform overlay service. It owns overlay lifecycle and enforces
/// single selection within a category.
pub trait OverlayManager: Send + Sync {
    /// All overlays installed against `target`
    fn overlays_for_target(&self, target: &str) -> Result<Vec<OverlayInfo>>;

    /// Enable `package` and disable every other overlay in its category
    fn set_enabled_exclusive_in_category(&self, package: &str) -> Result<()>;

    fn set_enabled(&self, package: &str, enabled: bool) -> Result<()>;

    fn overlays_in_category(&self, category: &str, target: &str) -> Result<Vec<OverlayInfo>> {
        Ok(self
            .overlays_for_target(target)?
            .into_iter()
            .filter(|info| info.category == category)
            .collect())
    }

    /// Package of the enabled overlay in the category, if any
    fn enabled_in_category(&self, category: &str, target: &str) -> Result<Option<String>> {
        Ok(self
            .overlays_in_category(category, target)?
            .into_iter()
            .find(|info| info.enabled)
            .map(|info| info.package))
    }
}

#[derive(Debug, Default)]
pub struct MemoryOverlayManager {
    overlays: RwLock<Vec<OverlayInfo>>,
}

impl MemoryOverlayManager {
    pub fn new(overlays: Vec<OverlayInfo>) -> Self {
        Self {
            overlays: RwLock::new(overlays),
        }
    }

    pub fn snapshot(&self) -> Result<Vec<OverlayInfo>> {
        let overlays = self.overlays.read().map_err(poisoned)?;
        Ok(overlays.clone())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> OverlayError {
    OverlayError::Manager("overlay state lock poisoned".to_string())
}

impl OverlayManager for MemoryOverlayManager {
    fn overlays_for_target(&self, target: &str) -> Result<Vec<OverlayInfo>> {
        let overlays = self.overlays.read().map_err(poisoned)?;
        Ok(overlays
            .iter()
            .filter(|info| info.target == target)
            .cloned()
            .collect())
    }

    fn set_enabled_exclusive_in_category(&self, package: &str) -> Result<()> {
        let mut overlays = self.overlays.write().map_err(poisoned)?;

        let (category, target) = overlays
            .iter()
            .find(|info| info.package == package)
            .map(|info| (info.category.clone(), info.target.clone()))
            .ok_or_else(|| OverlayError::PackageNotFound(package.to_string()))?;

        for info in overlays
            .iter_mut()
            .filter(|info| info.category == category && info.target == target)
        {
            info.enabled = info.package == package;
        }

        info!(package, category = %category, "Enabled overlay exclusively in category");
        Ok(())
    }

    fn set_enabled(&self, package: &str, enabled: bool) -> Result<()> {
        let mut overlays = self.overlays.write().map_err(poisoned)?;

        let info = overlays
            .iter_mut()
            .find(|info| info.package == package)
            .ok_or_else(|| OverlayError::PackageNotFound(package.to_string()))?;
        info.enabled = enabled;

        debug!(package, enabled, "Set overlay state");
        Ok(())
    }
}
