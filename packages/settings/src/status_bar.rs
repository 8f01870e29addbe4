// ABOUTME: Status bar battery settings screen controller
// ABOUTME: Loads and persists battery style and percent toggles, renders view state

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use xpe_config::constants::{
    STATUS_BAR_BATTERY_STYLE, STATUS_BAR_SHOW_BATTERY_PERCENT,
    STATUS_BAR_SHOW_BATTERY_PERCENT_CHARGING, STATUS_BAR_SHOW_BATTERY_PERCENT_INSIDE,
};
use xpe_core::{SettingScope, UserId};
use xpe_storage::SettingsStore;

use crate::battery::{propagate, BatteryEvent, BatteryInputs, BatteryStyle};
use crate::enumerated::EnumeratedSetting;
use crate::error::Result;
use crate::types::{ListEntry, ListState, ToggleState};
use crate::validation::AllowedValueSet;

/// Everything the battery screen is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryState {
    pub inputs: BatteryInputs,
    pub charging_checked: bool,
}

/// View model for the battery screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryScreen {
    pub style: ListState,
    pub percent: ToggleState,
    pub percent_inside: ToggleState,
    pub percent_charging: ToggleState,
}

/// Result of handling one battery event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryChange {
    pub state: BatteryState,
    /// False when the event was rejected and `state` is the previous state
    pub accepted: bool,
}

fn style_entries() -> Vec<ListEntry> {
    BatteryStyle::DISPLAY_ORDER
        .iter()
        .map(|style| ListEntry::new(style.code(), style.label()))
        .collect()
}

/// Stateless render of the battery screen
pub fn render(state: &BatteryState) -> BatteryScreen {
    let controls = propagate(&state.inputs);
    let style = BatteryStyle::from_code(state.inputs.style).unwrap_or(BatteryStyle::DEFAULT);

    BatteryScreen {
        style: ListState {
            value: style.code(),
            summary: style.label().to_string(),
            entries: style_entries(),
        },
        percent: ToggleState {
            checked: state.inputs.percent_shown,
            enabled: controls.percent_enabled,
        },
        percent_inside: ToggleState {
            checked: state.inputs.percent_inside,
            enabled: controls.inside_enabled,
        },
        percent_charging: ToggleState {
            checked: state.charging_checked,
            enabled: controls.charging_enabled,
        },
    }
}

pub struct StatusBarBatteryController<S: SettingsStore + ?Sized> {
    store: Arc<S>,
    user: UserId,
    style: EnumeratedSetting,
}

impl<S: SettingsStore + ?Sized> StatusBarBatteryController<S> {
    pub fn new(store: Arc<S>, user: UserId) -> Result<Self> {
        let style = EnumeratedSetting::new(
            STATUS_BAR_BATTERY_STYLE,
            SettingScope::System,
            AllowedValueSet::new(BatteryStyle::allowed_codes())?,
            BatteryStyle::DEFAULT.code(),
        )?;

        Ok(Self { store, user, style })
    }

    /// Read the screen's settings, healing a corrupt style value
    pub async fn load(&self) -> Result<BatteryState> {
        let percent_shown = self.get_flag(STATUS_BAR_SHOW_BATTERY_PERCENT).await?;
        let percent_inside = self.get_flag(STATUS_BAR_SHOW_BATTERY_PERCENT_INSIDE).await?;
        let charging_checked = self
            .get_flag(STATUS_BAR_SHOW_BATTERY_PERCENT_CHARGING)
            .await?;
        let style = self.style.load(self.store.as_ref(), self.user).await?;

        debug!(
            style = style.value,
            percent_shown, percent_inside, "Loaded battery settings"
        );

        Ok(BatteryState {
            inputs: BatteryInputs {
                style: style.value,
                percent_shown,
                percent_inside,
            },
            charging_checked,
        })
    }

    /// Persist the changed input and return the recomputed state.
    ///
    /// A style outside the catalogue is rejected: nothing is written and the
    /// previous state comes back with `accepted == false`.
    pub async fn handle(&self, state: &BatteryState, event: BatteryEvent) -> Result<BatteryChange> {
        match event {
            BatteryEvent::StyleChanged(style) => {
                if !self.style.allowed().contains(style) {
                    info!(style, "Rejected battery style outside catalogue");
                    return Ok(BatteryChange {
                        state: *state,
                        accepted: false,
                    });
                }
                self.style.store(self.store.as_ref(), style, self.user).await?;
            }
            BatteryEvent::PercentToggled(enabled) => {
                self.put_flag(STATUS_BAR_SHOW_BATTERY_PERCENT, enabled).await?;
            }
            BatteryEvent::InsideToggled(enabled) => {
                self.put_flag(STATUS_BAR_SHOW_BATTERY_PERCENT_INSIDE, enabled)
                    .await?;
            }
        }

        Ok(BatteryChange {
            state: BatteryState {
                inputs: state.inputs.apply(event),
                charging_checked: state.charging_checked,
            },
            accepted: true,
        })
    }

    /// The charging switch persists itself; it feeds no other control
    pub async fn set_percent_charging(
        &self,
        state: &BatteryState,
        checked: bool,
    ) -> Result<BatteryState> {
        self.put_flag(STATUS_BAR_SHOW_BATTERY_PERCENT_CHARGING, checked)
            .await?;

        Ok(BatteryState {
            charging_checked: checked,
            ..*state
        })
    }

    async fn get_flag(&self, key: &str) -> Result<bool> {
        Ok(self
            .store
            .get_bool(SettingScope::System, key, false, self.user)
            .await?)
    }

    async fn put_flag(&self, key: &str, value: bool) -> Result<()> {
        Ok(self
            .store
            .put_bool(SettingScope::System, key, value, self.user)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text_style() {
        let state = BatteryState {
            inputs: BatteryInputs {
                style: BatteryStyle::Text.code(),
                percent_shown: true,
                percent_inside: true,
            },
            charging_checked: true,
        };

        let screen = render(&state);

        assert_eq!(screen.style.summary, "Text");
        assert_eq!(screen.style.entries.len(), 28);
        assert_eq!(
            screen.percent,
            ToggleState {
                checked: true,
                enabled: false
            }
        );
        assert!(!screen.percent_inside.enabled);
        assert_eq!(
            screen.percent_charging,
            ToggleState {
                checked: true,
                enabled: false
            }
        );
    }

    #[test]
    fn test_render_entries_follow_display_order() {
        let screen = render(&BatteryState {
            inputs: BatteryInputs::default(),
            charging_checked: false,
        });

        let first: Vec<i64> = screen.style.entries.iter().take(3).map(|e| e.value).collect();
        assert_eq!(first, vec![0, 5, 6]);
        assert_eq!(screen.style.summary, "Portrait");
    }
}
