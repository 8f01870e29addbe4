// ABOUTME: Integration tests for the status bar battery screen
// ABOUTME: Load, self-healing, event handling, and rendering against a SQLite store

use pretty_assertions::assert_eq;
use std::sync::Arc;
use xpe_core::{SettingScope, UserId};
use xpe_settings::{
    render, BatteryEvent, BatteryInputs, BatteryState, BatteryStyle, StatusBarBatteryController,
};
use xpe_storage::{SettingsStore, SqliteSettingsStore};

const STYLE: &str = "status_bar_battery_style";
const PERCENT: &str = "status_bar_show_battery_percent";
const INSIDE: &str = "status_bar_show_battery_percent_inside";
const CHARGING: &str = "status_bar_show_battery_percent_charging";

async fn create_test_store() -> Arc<SqliteSettingsStore> {
    Arc::new(SqliteSettingsStore::connect("sqlite::memory:").await.unwrap())
}

#[tokio::test]
async fn test_load_defaults_on_empty_store() {
    let store = create_test_store().await;
    let controller = StatusBarBatteryController::new(store, UserId::CURRENT).unwrap();

    let state = controller.load().await.unwrap();

    assert_eq!(
        state,
        BatteryState {
            inputs: BatteryInputs::default(),
            charging_checked: false,
        }
    );

    let screen = render(&state);
    assert!(screen.percent.enabled);
    assert!(!screen.percent_inside.enabled);
    assert!(!screen.percent_charging.enabled);
}

#[tokio::test]
async fn test_corrupt_style_is_healed_on_load() {
    let store = create_test_store().await;
    store
        .put_int(SettingScope::System, STYLE, 99, UserId::CURRENT)
        .await
        .unwrap();
    let controller = StatusBarBatteryController::new(store.clone(), UserId::CURRENT).unwrap();

    let state = controller.load().await.unwrap();

    assert_eq!(state.inputs.style, BatteryStyle::Portrait.code());
    assert_eq!(
        store
            .get_int(SettingScope::System, STYLE, -1, UserId::CURRENT)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_non_numeric_style_is_healed_on_load() {
    let store = create_test_store().await;
    store
        .put_string(SettingScope::System, STYLE, "landscape", UserId::CURRENT)
        .await
        .unwrap();
    let controller = StatusBarBatteryController::new(store.clone(), UserId::CURRENT).unwrap();

    let state = controller.load().await.unwrap();

    assert_eq!(state.inputs.style, BatteryStyle::Portrait.code());
    assert_eq!(
        store
            .get_string(SettingScope::System, STYLE, UserId::CURRENT)
            .await
            .unwrap()
            .as_deref(),
        Some("0")
    );
}

#[tokio::test]
async fn test_loads_stored_toggles() {
    let store = create_test_store().await;
    for key in [PERCENT, INSIDE, CHARGING] {
        store
            .put_bool(SettingScope::System, key, true, UserId::CURRENT)
            .await
            .unwrap();
    }
    store
        .put_int(SettingScope::System, STYLE, BatteryStyle::Circle.code(), UserId::CURRENT)
        .await
        .unwrap();
    let controller = StatusBarBatteryController::new(store, UserId::CURRENT).unwrap();

    let state = controller.load().await.unwrap();
    let screen = render(&state);

    assert_eq!(screen.style.summary, "Circle");
    assert!(screen.percent.checked && screen.percent.enabled);
    assert!(screen.percent_inside.checked && screen.percent_inside.enabled);
    assert!(screen.percent_charging.checked && screen.percent_charging.enabled);
}

#[tokio::test]
async fn test_switching_to_text_style_disables_percent_controls() {
    let store = create_test_store().await;
    let controller = StatusBarBatteryController::new(store.clone(), UserId::CURRENT).unwrap();
    let state = controller.load().await.unwrap();

    let change = controller
        .handle(&state, BatteryEvent::PercentToggled(true))
        .await
        .unwrap();
    let change = controller
        .handle(&change.state, BatteryEvent::InsideToggled(true))
        .await
        .unwrap();
    assert!(render(&change.state).percent_charging.enabled);

    let change = controller
        .handle(&change.state, BatteryEvent::StyleChanged(BatteryStyle::Text.code()))
        .await
        .unwrap();

    assert!(change.accepted);
    let screen = render(&change.state);
    assert!(!screen.percent.enabled);
    assert!(screen.percent.checked);
    assert!(!screen.percent_inside.enabled);
    assert!(!screen.percent_charging.enabled);

    assert_eq!(
        store
            .get_int(SettingScope::System, STYLE, 0, UserId::CURRENT)
            .await
            .unwrap(),
        BatteryStyle::Text.code()
    );
    assert!(store
        .get_bool(SettingScope::System, INSIDE, false, UserId::CURRENT)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_invalid_style_is_rejected_and_previous_kept() {
    let store = create_test_store().await;
    let controller = StatusBarBatteryController::new(store.clone(), UserId::CURRENT).unwrap();
    let state = controller
        .handle(
            &controller.load().await.unwrap(),
            BatteryEvent::StyleChanged(BatteryStyle::Ios16.code()),
        )
        .await
        .unwrap()
        .state;

    let change = controller
        .handle(&state, BatteryEvent::StyleChanged(42))
        .await
        .unwrap();

    assert!(!change.accepted);
    assert_eq!(change.state, state);
    assert_eq!(
        store
            .get_int(SettingScope::System, STYLE, 0, UserId::CURRENT)
            .await
            .unwrap(),
        BatteryStyle::Ios16.code()
    );
}

#[tokio::test]
async fn test_percent_charging_toggle_persists() {
    let store = create_test_store().await;
    let controller = StatusBarBatteryController::new(store.clone(), UserId::CURRENT).unwrap();
    let state = controller.load().await.unwrap();

    let state = controller.set_percent_charging(&state, true).await.unwrap();

    assert!(state.charging_checked);
    assert!(store
        .get_bool(SettingScope::System, CHARGING, false, UserId::CURRENT)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_handling_same_event_twice_is_idempotent() {
    let store = create_test_store().await;
    let controller = StatusBarBatteryController::new(store, UserId::CURRENT).unwrap();
    let state = controller.load().await.unwrap();

    let once = controller
        .handle(&state, BatteryEvent::PercentToggled(true))
        .await
        .unwrap();
    let twice = controller
        .handle(&once.state, BatteryEvent::PercentToggled(true))
        .await
        .unwrap();

    assert_eq!(once, twice);
    assert_eq!(render(&once.state), render(&twice.state));
}
