// ABOUTME: Theme customization record
// ABOUTME: JSON map of overlay category to package kept in a secure setting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use xpe_config::constants::THEME_CUSTOMIZATION_OVERLAY_PACKAGES;
use xpe_core::{SettingScope, UserId};
use xpe_storage::SettingsStore;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeCustomization {
    packages: BTreeMap<String, String>,
}

impl ThemeCustomization {
    /// Read the record. A missing or unparsable value is an empty record.
    pub async fn load<S>(store: &S, user: UserId) -> Result<Self>
    where
        S: SettingsStore + ?Sized,
    {
        let raw = store
            .get_string(
                SettingScope::Secure,
                THEME_CUSTOMIZATION_OVERLAY_PACKAGES,
                user,
            )
            .await?;

        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return Ok(Self::default());
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(error = %e, "Ignoring unparsable theme customization record");
                Ok(Self::default())
            }
        }
    }

    pub async fn save<S>(&self, store: &S, user: UserId) -> Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        let raw = serde_json::to_string(self)?;
        store
            .put_string(
                SettingScope::Secure,
                THEME_CUSTOMIZATION_OVERLAY_PACKAGES,
                &raw,
                user,
            )
            .await?;

        debug!(record = %raw, "Saved theme customization record");
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.packages.get(category).map(String::as_str)
    }

    /// Set or clear the package for a category. `None` means the default.
    pub fn set(&mut self, category: &str, package: Option<&str>) {
        match package {
            Some(package) => {
                self.packages
                    .insert(category.to_string(), package.to_string());
            }
            None => {
                self.packages.remove(category);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Load, update one category, and save
    pub async fn record<S>(
        store: &S,
        user: UserId,
        category: &str,
        package: Option<&str>,
    ) -> Result<Self>
    where
        S: SettingsStore + ?Sized,
    {
        let mut record = Self::load(store, user).await?;
        record.set(category, package);
        record.save(store, user).await?;
        Ok(record)
    }
}
