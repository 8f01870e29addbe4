// ABOUTME: Enumerated integer setting bound to a store key
// ABOUTME: Self-healing reads and validated writes against an allow-list

use tracing::{info, warn};
use xpe_core::{SettingScope, UserId};
use xpe_storage::SettingsStore;

use crate::error::Result;
use crate::validation::{AllowedValueSet, Validated, ValidationError};

#[derive(Debug, Clone)]
pub struct EnumeratedSetting {
    key: String,
    scope: SettingScope,
    allowed: AllowedValueSet,
    default: i64,
}

impl EnumeratedSetting {
    pub fn new(
        key: impl Into<String>,
        scope: SettingScope,
        allowed: AllowedValueSet,
        default: i64,
    ) -> std::result::Result<Self, ValidationError> {
        if !allowed.contains(default) {
            return Err(ValidationError::DefaultNotAllowed(default));
        }

        Ok(Self {
            key: key.into(),
            scope,
            allowed,
            default,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_value(&self) -> i64 {
        self.default
    }

    pub fn allowed(&self) -> &AllowedValueSet {
        &self.allowed
    }

    /// Read the stored value. A value outside the allow-list, or one that is
    /// not an integer at all, is replaced by the default and the replacement
    /// is written back before returning.
    pub async fn load<S>(&self, store: &S, user: UserId) -> Result<Validated>
    where
        S: SettingsStore + ?Sized,
    {
        let Some(raw) = store.get_string(self.scope, &self.key, user).await? else {
            return Ok(Validated {
                value: self.default,
                coerced: false,
            });
        };

        let validated = match raw.trim().parse::<i64>() {
            Ok(stored) => self.allowed.validate(stored, self.default)?,
            Err(_) => Validated {
                value: self.default,
                coerced: true,
            },
        };

        if validated.coerced {
            warn!(
                key = %self.key,
                stored = %raw,
                default = self.default,
                "Stored value outside allow-list, resetting to default"
            );
            store
                .put_int(self.scope, &self.key, validated.value, user)
                .await?;
        }

        Ok(validated)
    }

    /// Persist `candidate` if it is allowed; nothing is written otherwise
    pub async fn store<S>(&self, store: &S, candidate: i64, user: UserId) -> Result<i64>
    where
        S: SettingsStore + ?Sized,
    {
        let value = self.allowed.check(candidate)?;
        store.put_int(self.scope, &self.key, value, user).await?;
        info!(key = %self.key, value, "Updated enumerated setting");
        Ok(value)
    }
}
