// ABOUTME: Search index registration for settings screens
// ABOUTME: Screens expose indexable resources; the host registers them explicitly

use std::collections::BTreeMap;
use tracing::debug;
use xpe_config::constants::STATUSBAR_BATTERY_SETTINGS_XML;

use crate::error::{Result, SettingsError};

/// A screen definition the settings search should index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexableResource {
    pub screen: String,
    pub xml_resource: String,
}

pub trait SearchIndexProvider: Send + Sync {
    fn xml_resources(&self) -> Vec<IndexableResource>;

    /// Keys on the screen that must not show up in search results
    fn non_indexable_keys(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Providers keyed by screen name, iterated in name order
#[derive(Default)]
pub struct SearchIndexRegistry {
    providers: BTreeMap<String, Box<dyn SearchIndexProvider>>,
}

impl SearchIndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        screen: impl Into<String>,
        provider: Box<dyn SearchIndexProvider>,
    ) -> Result<()> {
        let screen = screen.into();
        if self.providers.contains_key(&screen) {
            return Err(SettingsError::DuplicateProvider(screen));
        }

        debug!(screen = %screen, "Registered search index provider");
        self.providers.insert(screen, provider);
        Ok(())
    }

    pub fn screens(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }

    pub fn xml_resources(&self) -> Vec<IndexableResource> {
        self.providers
            .values()
            .flat_map(|provider| provider.xml_resources())
            .collect()
    }

    pub fn non_indexable_keys(&self) -> Vec<String> {
        self.providers
            .values()
            .flat_map(|provider| provider.non_indexable_keys())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Indexes the status bar battery screen
pub struct BatterySearchProvider;

impl BatterySearchProvider {
    pub const SCREEN: &'static str = "StatusBarBatterySettings";
}

impl SearchIndexProvider for BatterySearchProvider {
    fn xml_resources(&self) -> Vec<IndexableResource> {
        vec![IndexableResource {
            screen: Self::SCREEN.to_string(),
            xml_resource: STATUSBAR_BATTERY_SETTINGS_XML.to_string(),
        }]
    }
}
