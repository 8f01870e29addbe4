// ABOUTME: Device theme list preference controller
// ABOUTME: Reads and writes the secure device_theme setting

use std::sync::Arc;
use tracing::info;
use xpe_config::constants::DEVICE_THEME;
use xpe_core::{SettingScope, UserId};
use xpe_storage::SettingsStore;

use crate::controller::PreferenceController;
use crate::error::{Result, SettingsError};
use crate::types::{ListEntry, ListState, Notice};
use crate::validation::{parse_list_value, ValidationError};

const DEFAULT_THEME: i64 = 0;

/// Result of a successful theme change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChange {
    pub state: ListState,
    pub notice: Notice,
}

pub struct DeviceThemeController<S: SettingsStore + ?Sized> {
    store: Arc<S>,
    user: UserId,
    entries: Vec<ListEntry>,
}

impl<S: SettingsStore + ?Sized> DeviceThemeController<S> {
    pub fn new(store: Arc<S>, user: UserId, entries: Vec<ListEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(SettingsError::MissingResource(format!(
                "{} entries",
                DEVICE_THEME
            )));
        }

        Ok(Self {
            store,
            user,
            entries,
        })
    }

    /// Controller with the stock theme entries
    pub fn with_default_entries(store: Arc<S>, user: UserId) -> Self {
        Self {
            store,
            user,
            entries: default_entries(),
        }
    }

    /// Current selection; a stored value with no entry shows the first entry
    pub async fn display(&self) -> Result<ListState> {
        let stored = self
            .store
            .get_int(SettingScope::Secure, DEVICE_THEME, DEFAULT_THEME, self.user)
            .await?;

        ListState::select(self.entries.clone(), stored)
            .ok_or_else(|| SettingsError::MissingResource(format!("{} entries", DEVICE_THEME)))
    }

    /// Write the value picked in the list. Values that match no entry are
    /// rejected before anything is written.
    pub async fn change(&self, raw: &str) -> Result<ThemeChange> {
        let value = parse_list_value(raw)?;

        let entry = self
            .entries
            .iter()
            .find(|entry| entry.value == value)
            .ok_or_else(|| {
                let allowed = self
                    .entries
                    .iter()
                    .map(|e| e.value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                ValidationError::NotAllowed(value, allowed)
            })?;

        self.store
            .put_int(SettingScope::Secure, DEVICE_THEME, value, self.user)
            .await?;

        info!(value, label = %entry.label, "Applied device theme");

        Ok(ThemeChange {
            state: ListState {
                value,
                summary: entry.label.clone(),
                entries: self.entries.clone(),
            },
            notice: Notice::ThemeApplied,
        })
    }
}

impl<S: SettingsStore + ?Sized> PreferenceController for DeviceThemeController<S> {
    fn preference_key(&self) -> &str {
        DEVICE_THEME
    }
}

pub fn default_entries() -> Vec<ListEntry> {
    vec![
        ListEntry::new(0, "Default"),
        ListEntry::new(1, "Light"),
        ListEntry::new(2, "Dark"),
        ListEntry::new(3, "Black"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xpe_storage::{MemorySettingsStore, StorageError};

    #[tokio::test]
    async fn test_display_matches_stored_value() {
        let store = Arc::new(MemorySettingsStore::new().with_value(SettingScope::Secure, DEVICE_THEME, "2"));
        let controller = DeviceThemeController::with_default_entries(store, UserId::CURRENT);

        let state = controller.display().await.unwrap();

        assert_eq!(state.value, 2);
        assert_eq!(state.summary, "Dark");
    }

    #[tokio::test]
    async fn test_display_unknown_value_selects_first_entry() {
        let store = Arc::new(MemorySettingsStore::new().with_value(SettingScope::Secure, DEVICE_THEME, "17"));
        let controller = DeviceThemeController::with_default_entries(store, UserId::CURRENT);

        let state = controller.display().await.unwrap();

        assert_eq!(state.value, 0);
        assert_eq!(state.summary, "Default");
    }

    #[tokio::test]
    async fn test_change_writes_and_notifies() {
        let store = Arc::new(MemorySettingsStore::new());
        let controller = DeviceThemeController::with_default_entries(store.clone(), UserId::CURRENT);

        let change = controller.change("3").await.unwrap();

        assert_eq!(change.state.summary, "Black");
        assert_eq!(change.notice, Notice::ThemeApplied);
        assert_eq!(
            store
                .get_int(SettingScope::Secure, DEVICE_THEME, 0, UserId::CURRENT)
                .await
                .unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn test_change_rejects_unlisted_value() {
        let store = Arc::new(MemorySettingsStore::new());
        let controller = DeviceThemeController::with_default_entries(store.clone(), UserId::CURRENT);

        let result = controller.change("9").await;

        assert!(matches!(
            result,
            Err(SettingsError::Validation(ValidationError::NotAllowed(9, _)))
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_change_without_permission_has_no_notice() {
        let store = Arc::new(MemorySettingsStore::new().with_read_only(SettingScope::Secure));
        let controller = DeviceThemeController::with_default_entries(store, UserId::CURRENT);

        let result = controller.change("1").await;

        assert!(matches!(
            result,
            Err(SettingsError::Storage(StorageError::PermissionDenied { .. }))
        ));
    }

    #[test]
    fn test_empty_entries_rejected() {
        let store = Arc::new(MemorySettingsStore::new());
        let result = DeviceThemeController::new(store, UserId::CURRENT, Vec::new());
        assert!(matches!(result, Err(SettingsError::MissingResource(_))));
    }

    #[test]
    fn test_preference_key() {
        let store = Arc::new(MemorySettingsStore::new());
        let controller = DeviceThemeController::with_default_entries(store, UserId::CURRENT);
        assert_eq!(controller.preference_key(), "device_theme");
        assert!(controller.is_available());
    }
}
