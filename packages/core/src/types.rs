// ABOUTME: Shared domain types for settings controllers
// ABOUTME: Setting namespaces, user identities, and controller availability

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown setting scope: {0}. Must be one of: system, secure, global")]
pub struct ParseScopeError(pub String);

/// Namespace of the system settings store a key lives in.
///
/// `Secure` and `Global` require elevated permissions to write on a real
/// device; stores are free to refuse writes there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingScope {
    System,
    Secure,
    Global,
}

impl SettingScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingScope::System => "system",
            SettingScope::Secure => "secure",
            SettingScope::Global => "global",
        }
    }

    /// Global settings are device-wide and ignore the user identity.
    pub fn is_per_user(&self) -> bool {
        !matches!(self, SettingScope::Global)
    }
}

impl fmt::Display for SettingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(SettingScope::System),
            "secure" => Ok(SettingScope::Secure),
            "global" => Ok(SettingScope::Global),
            _ => Err(ParseScopeError(s.to_string())),
        }
    }
}

/// User identity a setting is read or written for.
///
/// Mirrors the platform user handles: `CURRENT` is resolved by the store to
/// whichever user is in the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i32);

impl UserId {
    pub const CURRENT: UserId = UserId(-2);
    pub const SYSTEM: UserId = UserId(0);

    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn is_current(&self) -> bool {
        *self == Self::CURRENT
    }

    pub fn as_raw(&self) -> i32 {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_current() {
            f.write_str("current")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Whether a controller's entry should be shown on its hosting screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    /// A prerequisite (usually a system property) is missing on this build
    ConditionallyUnavailable,
    UnsupportedOnDevice,
    DisabledForUser,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("system", SettingScope::System)]
    #[case("Secure", SettingScope::Secure)]
    #[case("GLOBAL", SettingScope::Global)]
    fn test_scope_from_str(#[case] input: &str, #[case] expected: SettingScope) {
        assert_eq!(input.parse::<SettingScope>().unwrap(), expected);
    }

    #[test]
    fn test_scope_from_str_rejects_unknown() {
        let err = "vendor".parse::<SettingScope>().unwrap_err();
        assert_eq!(err, ParseScopeError("vendor".to_string()));
        assert!(err.to_string().contains("system, secure, global"));
    }

    #[test]
    fn test_scope_serializes_lowercase() {
        let json = serde_json::to_string(&SettingScope::Secure).unwrap();
        assert_eq!(json, "\"secure\"");
    }

    #[test]
    fn test_global_scope_is_not_per_user() {
        assert!(SettingScope::System.is_per_user());
        assert!(SettingScope::Secure.is_per_user());
        assert!(!SettingScope::Global.is_per_user());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::CURRENT.to_string(), "current");
        assert_eq!(UserId::new(10).to_string(), "10");
        assert_eq!(UserId::default(), UserId::CURRENT);
    }

    #[test]
    fn test_availability() {
        assert!(Availability::Available.is_available());
        assert!(!Availability::ConditionallyUnavailable.is_available());
    }
}
