// ABOUTME: Integration tests for the SQLite settings store
// ABOUTME: Round trips, user scoping, permission denial, and persistence across reopen

use rstest::rstest;
use sqlx::sqlite::SqlitePoolOptions;
use xpe_core::{SettingScope, UserId};
use xpe_storage::{SettingsStore, SqliteSettingsStore, StorageError};

/// Helper to create an in-memory database for testing
async fn create_test_store() -> SqliteSettingsStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    SqliteSettingsStore::from_pool(pool).await.unwrap()
}

#[tokio::test]
async fn test_missing_key_returns_default() {
    let store = create_test_store().await;

    let value = store
        .get_int(SettingScope::System, "status_bar_battery_style", 0, UserId::CURRENT)
        .await
        .unwrap();

    assert_eq!(value, 0);
    assert!(store
        .get_string(SettingScope::System, "status_bar_battery_style", UserId::CURRENT)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_put_then_get_overwrites() {
    let store = create_test_store().await;

    store
        .put_int(SettingScope::System, "status_bar_battery_style", 5, UserId::CURRENT)
        .await
        .unwrap();
    store
        .put_int(SettingScope::System, "status_bar_battery_style", 7, UserId::CURRENT)
        .await
        .unwrap();

    let value = store
        .get_int(SettingScope::System, "status_bar_battery_style", 0, UserId::CURRENT)
        .await
        .unwrap();

    assert_eq!(value, 7);
}

#[rstest]
#[case(SettingScope::System)]
#[case(SettingScope::Secure)]
#[tokio::test]
async fn test_users_are_isolated(#[case] scope: SettingScope) {
    let store = create_test_store().await.with_current_user(10);

    store
        .put_bool(scope, "status_bar_show_battery_percent", true, UserId::CURRENT)
        .await
        .unwrap();

    assert!(store
        .get_bool(scope, "status_bar_show_battery_percent", false, UserId::new(10))
        .await
        .unwrap());
    assert!(!store
        .get_bool(scope, "status_bar_show_battery_percent", false, UserId::SYSTEM)
        .await
        .unwrap());
}

#[rstest]
#[case("5", 5)]
#[case(" 12 ", 12)]
#[case("-1", -1)]
#[case("abc", 3)]
#[case("1.5", 3)]
#[case("", 3)]
#[tokio::test]
async fn test_get_int_parses_stored_text(#[case] raw: &str, #[case] expected: i64) {
    let store = create_test_store().await;

    store
        .put_string(SettingScope::System, "udfps_anim_style", raw, UserId::CURRENT)
        .await
        .unwrap();

    let value = store
        .get_int(SettingScope::System, "udfps_anim_style", 3, UserId::CURRENT)
        .await
        .unwrap();

    assert_eq!(value, expected);
}

#[rstest]
#[case("1", true)]
#[case("0", false)]
#[case("2", false)]
#[tokio::test]
async fn test_only_one_reads_as_true(#[case] raw: &str, #[case] expected: bool) {
    let store = create_test_store().await;

    store
        .put_string(SettingScope::System, "status_bar_show_battery_percent", raw, UserId::CURRENT)
        .await
        .unwrap();

    let value = store
        .get_bool(SettingScope::System, "status_bar_show_battery_percent", true, UserId::CURRENT)
        .await
        .unwrap();

    assert_eq!(value, expected);
}

#[tokio::test]
async fn test_global_scope_shared_between_users() {
    let store = create_test_store().await.with_current_user(10);

    store
        .put_string(SettingScope::Global, "device_name", "Lab phone", UserId::CURRENT)
        .await
        .unwrap();

    let name = store
        .get_string(SettingScope::Global, "device_name", UserId::SYSTEM)
        .await
        .unwrap();

    assert_eq!(name.as_deref(), Some("Lab phone"));
}

#[tokio::test]
async fn test_read_only_scope_denies_writes() {
    let store = create_test_store().await.with_read_only(SettingScope::Secure);

    let result = store
        .put_int(SettingScope::Secure, "device_theme", 1, UserId::CURRENT)
        .await;

    assert!(matches!(
        result,
        Err(StorageError::PermissionDenied { scope: SettingScope::Secure, .. })
    ));

    // Other scopes stay writable
    store
        .put_int(SettingScope::System, "udfps_anim_style", 3, UserId::CURRENT)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_values_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("settings.db").display());

    {
        let store = SqliteSettingsStore::connect(&url).await.unwrap();
        store
            .put_int(SettingScope::Secure, "device_theme", 2, UserId::CURRENT)
            .await
            .unwrap();
    }

    let reopened = SqliteSettingsStore::connect(&url).await.unwrap();
    let value = reopened
        .get_int(SettingScope::Secure, "device_theme", 0, UserId::CURRENT)
        .await
        .unwrap();

    assert_eq!(value, 2);
}
