// ABOUTME: Overlay picker for one overlay category
// ABOUTME: Lists the base package and its category overlays, and applies a choice

use serde::Serialize;
use tracing::{debug, info, warn};
use xpe_config::constants::{SYSTEMUI_PACKAGE, VOLTE_ICON_CATEGORY, VOLTE_ICON_DRAWABLE};
use xpe_core::UserId;
use xpe_storage::SettingsStore;

use crate::customization::ThemeCustomization;
use crate::error::{OverlayError, Result};
use crate::grid::OptionGrid;
use crate::manager::OverlayManager;
use crate::resources::{AssetRef, PackageResources};

const DEFAULT_LABEL: &str = "Default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayChoice {
    pub package: String,
    pub label: String,
    /// None when the package has no preview drawable
    pub preview: Option<AssetRef>,
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPicker {
    category: String,
    target: String,
    preview_drawable: String,
}

impl OverlayPicker {
    pub fn new(
        category: impl Into<String>,
        target: impl Into<String>,
        preview_drawable: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            target: target.into(),
            preview_drawable: preview_drawable.into(),
        }
    }

    /// VoLTE status bar icon styles
    pub fn volte_icons() -> Self {
        Self::new(VOLTE_ICON_CATEGORY, SYSTEMUI_PACKAGE, VOLTE_ICON_DRAWABLE)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn preview_drawable(&self) -> &str {
        &self.preview_drawable
    }

    /// The base package first, then every overlay in the category.
    /// At most one choice is marked applied.
    pub fn list_choices<M, R>(&self, manager: &M, resources: &R) -> Result<Vec<OverlayChoice>>
    where
        M: OverlayManager + ?Sized,
        R: PackageResources + ?Sized,
    {
        let overlays = manager.overlays_in_category(&self.category, &self.target)?;
        let applied = overlays
            .iter()
            .find(|info| info.enabled)
            .map(|info| info.package.as_str())
            .unwrap_or(self.target.as_str());

        let packages = std::iter::once(self.target.as_str())
            .chain(overlays.iter().map(|info| info.package.as_str()));

        let choices: Vec<_> = packages
            .map(|package| OverlayChoice {
                package: package.to_string(),
                label: self.label(resources, package),
                preview: self.preview(resources, package),
                applied: package == applied,
            })
            .collect();

        debug!(
            category = %self.category,
            choices = choices.len(),
            applied,
            "Listed overlay choices"
        );
        Ok(choices)
    }

    /// Choices laid out in a grid with the applied choice selected
    pub fn grid<M, R>(&self, manager: &M, resources: &R) -> Result<OptionGrid<OverlayChoice>>
    where
        M: OverlayManager + ?Sized,
        R: PackageResources + ?Sized,
    {
        let choices = self.list_choices(manager, resources)?;
        let applied = choices.iter().position(|choice| choice.applied);
        Ok(OptionGrid::new(choices, applied))
    }

    /// Apply `package` in this category and record it in the theme
    /// customization setting. The base package clears the category.
    pub async fn select<M, S>(
        &self,
        manager: &M,
        store: &S,
        user: UserId,
        package: &str,
    ) -> Result<()>
    where
        M: OverlayManager + ?Sized,
        S: SettingsStore + ?Sized,
    {
        if package == self.target {
            if let Some(enabled) = manager.enabled_in_category(&self.category, &self.target)? {
                manager.set_enabled(&enabled, false)?;
            }
            ThemeCustomization::record(store, user, &self.category, None).await?;
            info!(category = %self.category, "Restored default overlay");
            return Ok(());
        }

        let known = manager
            .overlays_in_category(&self.category, &self.target)?
            .iter()
            .any(|info| info.package == package);
        if !known {
            return Err(OverlayError::UnknownChoice(package.to_string()));
        }

        manager.set_enabled_exclusive_in_category(package)?;
        ThemeCustomization::record(store, user, &self.category, Some(package)).await?;

        info!(category = %self.category, package, "Applied overlay");
        Ok(())
    }

    fn label<R: PackageResources + ?Sized>(&self, resources: &R, package: &str) -> String {
        if package == self.target {
            return DEFAULT_LABEL.to_string();
        }

        resources.label(package).unwrap_or_else(|e| {
            warn!(package, error = %e, "No label for overlay package");
            package.to_string()
        })
    }

    fn preview<R: PackageResources + ?Sized>(&self, resources: &R, package: &str) -> Option<AssetRef> {
        match resources.drawable(package, &self.preview_drawable) {
            Ok(asset) => Some(asset),
            Err(e) => {
                warn!(package, error = %e, "No preview for overlay package");
                None
            }
        }
    }
}
