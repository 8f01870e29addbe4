// ABOUTME: SQLite-backed settings store
// ABOUTME: Persists (namespace, user, key) -> value rows through sqlx

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info};
use xpe_core::{SettingScope, UserId};

use crate::store::SettingsStore;
use crate::{check_key, StorageError, StorageResult};

pub struct SqliteSettingsStore {
    pool: SqlitePool,
    current_user: i32,
    read_only: HashSet<SettingScope>,
}

impl SqliteSettingsStore {
    /// Open (creating if needed) the database at `url` and apply migrations
    pub async fn connect(url: &str) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        info!(url, "Opened settings database");
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, applying migrations first
    pub async fn from_pool(pool: SqlitePool) -> StorageResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            current_user: UserId::SYSTEM.as_raw(),
            read_only: HashSet::new(),
        })
    }

    /// User that `UserId::CURRENT` resolves to
    pub fn with_current_user(mut self, user: i32) -> Self {
        self.current_user = user;
        self
    }

    /// Refuse writes to `scope`, as an unprivileged caller would see
    pub fn with_read_only(mut self, scope: SettingScope) -> Self {
        self.read_only.insert(scope);
        self
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
impl SettingsStore for SqliteSettingsStore {
    async fn get_string(
        &self,
        scope: SettingScope,
        key: &str,
        user: UserId,
    ) -> StorageResult<Option<String>> {
        check_key(key)?;

        let row = sqlx::query(
            "SELECT value FROM settings WHERE namespace = ? AND user_id = ? AND name = ?",
        )
        .bind(scope.as_str())
        .bind(self.resolve_user(scope, user))
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        match row {
            Some(row) => Ok(Some(row.try_get("value").map_err(StorageError::Sqlx)?)),
            None => Ok(None),
        }
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

        let user_id = self.resolve_user(scope, user);

        sqlx::query(
            "INSERT INTO settings (namespace, user_id, name, value, updated_at)
             VALUES (?, ?, ?, ?, datetime('now', 'utc'))
             ON CONFLICT(namespace, user_id, name)
             DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(scope.as_str())
        .bind(user_id)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        debug!(%scope, key, value, user_id, "Wrote setting");
        Ok(())
    }
}
