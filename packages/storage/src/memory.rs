// ABOUTME: In-memory settings store
// ABOUTME: HashMap-backed store for tests and embedding hosts without a database

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use xpe_core::{SettingScope, UserId};

use crate::store::SettingsStore;
use crate::{check_key, StorageError, StorageResult};

type Entry = (SettingScope, i32, String);

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<Entry, String>>,
    current_user: i32,
    read_only: HashSet<SettingScope>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value for the current user before the store is shared
    pub fn with_value(mut self, scope: SettingScope, key: &str, value: impl Into<String>) -> Self {
        let user = self.resolve_user(scope, UserId::CURRENT);
        self.values
            .get_mut()
            .insert((scope, user, key.to_string()), value.into());
        self
    }

    /// Set the user `UserId::CURRENT` resolves to. Per-user values already
    /// seeded for the previous current user move with it, so builder order
    /// does not matter.
    pub fn with_current_user(mut self, user: i32) -> Self {
        let previous = self.current_user;
        let values = self.values.get_mut();

        let seeded: Vec<Entry> = values
            .keys()
            .filter(|(scope, owner, _)| scope.is_per_user() && *owner == previous)
            .cloned()
            .collect();
        for entry in seeded {
            if let Some(value) = values.remove(&entry) {
                let (scope, _, key) = entry;
                values.insert((scope, user, key), value);
            }
        }

        self.current_user = user;
        self
    }

    pub fn with_read_only(mut self, scope: SettingScope) -> Self {
        self.read_only.insert(scope);
        self
    }

    /// Number of stored entries across all scopes and users
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }

    fn resolve_user(&self, scope: SettingScope, user: UserId) -> i32 {
        if !scope.is_per_user() {
            UserId::SYSTEM.as_raw()
        } else if user.is_current() {
            self.current_user
        } else {
            user.as_raw()
        }
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_string(
        &self,
        scope: SettingScope,
        key: &str,
        user: UserId,
    ) -> StorageResult<Option<String>> {
        check_key(key)?;
        let entry = (scope, self.resolve_user(scope, user), key.to_string());
        Ok(self.values.read().await.get(&entry).cloned())
    }

    async fn put_string(
        &self,
        scope: SettingScope,
        key: &str,
        value: &str,
        user: UserId,
    ) -> StorageResult<()> {
        check_key(key)?;

        if self.read_only.contains(&scope) {
            return Err(StorageError::PermissionDenied {
                scope,
                key: key.to_string(),
            });
        }

        let entry = (scope, self.resolve_user(scope, user), key.to_string());
        self.values.write().await.insert(entry, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_int_round_trip_and_default() {
        let store = MemorySettingsStore::new();

        assert_eq!(
            store
                .get_int(SettingScope::System, "answer", 7, UserId::CURRENT)
                .await
                .unwrap(),
            7
        );

        store
            .put_int(SettingScope::System, "answer", 42, UserId::CURRENT)
            .await
            .unwrap();

        assert_eq!(
            store
                .get_int(SettingScope::System, "answer", 7, UserId::CURRENT)
                .await
                .unwrap(),
            42
        );
    }

    #[tokio::test]
    async fn test_non_numeric_value_falls_back_to_default() {
        let store = MemorySettingsStore::new().with_value(SettingScope::System, "style", "landscape");

        let value = store
            .get_int(SettingScope::System, "style", 3, UserId::CURRENT)
            .await
            .unwrap();

        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn test_bool_uses_one_and_zero() {
        let store = MemorySettingsStore::new();

        store
            .put_bool(SettingScope::System, "flag", true, UserId::CURRENT)
            .await
            .unwrap();

        assert_eq!(
            store
                .get_string(SettingScope::System, "flag", UserId::CURRENT)
                .await
                .unwrap(),
            Some("1".to_string())
        );
        assert!(store
            .get_bool(SettingScope::System, "flag", false, UserId::CURRENT)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_seeded_values_follow_current_user_in_any_order() {
        let seeded_first = MemorySettingsStore::new()
            .with_value(SettingScope::System, "style", "4")
            .with_value(SettingScope::Global, "device_name", "Lab phone")
            .with_current_user(10);
        let user_first = MemorySettingsStore::new()
            .with_current_user(10)
            .with_value(SettingScope::System, "style", "4")
            .with_value(SettingScope::Global, "device_name", "Lab phone");

        for store in [seeded_first, user_first] {
            assert_eq!(
                store
                    .get_int(SettingScope::System, "style", 0, UserId::new(10))
                    .await
                    .unwrap(),
                4
            );
            assert_eq!(
                store
                    .get_int(SettingScope::System, "style", 0, UserId::SYSTEM)
                    .await
                    .unwrap(),
                0
            );
            assert_eq!(
                store
                    .get_string(SettingScope::Global, "device_name", UserId::CURRENT)
                    .await
                    .unwrap()
                    .as_deref(),
                Some("Lab phone")
            );
        }
    }

    #[tokio::test]
    async fn test_scopes_are_isolated() {
        let store = MemorySettingsStore::new().with_value(SettingScope::System, "device_theme", "2");

        let secure = store
            .get_int(SettingScope::Secure, "device_theme", 0, UserId::CURRENT)
            .await
            .unwrap();

        assert_eq!(secure, 0);
    }

    #[tokio::test]
    async fn test_current_user_resolution() {
        let store = MemorySettingsStore::new().with_current_user(10);

        store
            .put_int(SettingScope::System, "style", 5, UserId::CURRENT)
            .await
            .unwrap();

        let for_ten = store
            .get_int(SettingScope::System, "style", 0, UserId::new(10))
            .await
            .unwrap();
        let for_owner = store
            .get_int(SettingScope::System, "style", 0, UserId::SYSTEM)
            .await
            .unwrap();

        assert_eq!(for_ten, 5);
        assert_eq!(for_owner, 0);
    }

    #[tokio::test]
    async fn test_global_scope_ignores_user() {
        let store = MemorySettingsStore::new().with_current_user(10);

        store
            .put_string(SettingScope::Global, "device_name", "Phone", UserId::new(11))
            .await
            .unwrap();

        let name = store
            .get_string(SettingScope::Global, "device_name", UserId::CURRENT)
            .await
            .unwrap();

        assert_eq!(name, Some("Phone".to_string()));
    }

    #[tokio::test]
    async fn test_read_only_scope_denies_writes() {
        let store = MemorySettingsStore::new().with_read_only(SettingScope::Secure);

        let result = store
            .put_int(SettingScope::Secure, "device_theme", 1, UserId::CURRENT)
            .await;

        match result {
            Err(StorageError::PermissionDenied { scope, key }) => {
                assert_eq!(scope, SettingScope::Secure);
                assert_eq!(key, "device_theme");
            }
            _ => panic!("Expected PermissionDenied error"),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let store = MemorySettingsStore::new();

        let result = store
            .get_string(SettingScope::System, " ", UserId::CURRENT)
            .await;

        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
