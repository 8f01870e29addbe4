// ABOUTME: Preference controllers for XPerience system settings
// ABOUTME: Validation, dependent-control propagation, and per-screen controllers

pub mod battery;
pub mod controller;
pub mod device_info;
pub mod enumerated;
pub mod error;
pub mod firmware;
pub mod search;
pub mod status_bar;
pub mod theme;
pub mod types;
pub mod validation;

pub use battery::{propagate, reduce, BatteryControls, BatteryEvent, BatteryInputs, BatteryStyle};
pub use controller::PreferenceController;
pub use device_info::{BuildStatus, DeviceInfo, DeviceInfoController, HardwareInfo};
pub use enumerated::EnumeratedSetting;
pub use error::{Result, SettingsError};
pub use firmware::{CloVersion, CloVersionController};
pub use search::{BatterySearchProvider, IndexableResource, SearchIndexProvider, SearchIndexRegistry};
pub use status_bar::{render, BatteryChange, BatteryScreen, BatteryState, StatusBarBatteryController};
pub use theme::{DeviceThemeController, ThemeChange};
pub use types::{ListEntry, ListState, Notice, ToggleState};
pub use validation::{parse_list_value, validate_enumerated, AllowedValueSet, Validated, ValidationError};
