// ABOUTME: Setting accessor contract over the system settings store
// ABOUTME: Raw string get/put per backend, typed int/bool accessors on top

use async_trait::async_trait;
use tracing::warn;
use xpe_core::{bool_to_setting, setting_to_bool, SettingScope, UserId};

use crate::StorageResult;

/// String-keyed settings store scoped by namespace and user.
///
/// Values are kept as text the way the platform store keeps them; the typed
/// accessors parse on every read. Nothing is cached: each call is a round
/// trip to the backend.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the raw value, `None` when the key was never written
    async fn get_string(
        &self,
        scope: SettingScope,
        key: &str,
        user: UserId,
    ) -> StorageResult<Option<String>>;

    async fn put_string(
        &self,
        scope: SettingScope,
        key: &str,
        value: &str,
        user: UserId,
    ) -> StorageResult<()>;

    /// Read an integer, falling back to `default` when the key is absent or
    /// does not hold a number
    async fn get_int(
        &self,
        scope: SettingScope,
        key: &str,
        default: i64,
        user: UserId,
    ) -> StorageResult<i64> {
        match self.get_string(scope, key, user).await? {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(value) => Ok(value),
                Err(_) => {
                    warn!(%scope, key, raw = %raw, "Setting is not an integer, using default");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    async fn put_int(
        &self,
        scope: SettingScope,
        key: &str,
        value: i64,
        user: UserId,
    ) -> StorageResult<()> {
        self.put_string(scope, key, &value.to_string(), user).await
    }

    async fn get_bool(
        &self,
        scope: SettingScope,
        key: &str,
        default: bool,
        user: UserId,
    ) -> StorageResult<bool> {
        let value = self
            .get_int(scope, key, bool_to_setting(default), user)
            .await?;
        Ok(setting_to_bool(value))
    }

    async fn put_bool(
        &self,
        scope: SettingScope,
        key: &str,
        value: bool,
        user: UserId,
    ) -> StorageResult<()> {
        self.put_int(scope, key, bool_to_setting(value), user).await
    }
}
