// ABOUTME: Status bar battery style catalogue and dependent-control rules
// ABOUTME: Pure reducer from battery events to percent toggle enablement

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Battery icon styles understood by SystemUI, by stored code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryStyle {
    Portrait,
    Circle,
    DottedCircle,
    FullCircle,
    Text,
    RLandscape,
    Landscape,
    Ios15,
    Ios16,
    LandscapeBuddy,
    LandscapeLine,
    LandscapeMusku,
    LandscapePill,
    LandscapeSignal,
    RLandscapeStyleA,
    LandscapeStyleA,
    RLandscapeStyleB,
    LandscapeStyleB,
    LandscapeOrigami,
    LandscapeMiuiPill,
    LandscapeSimply,
    LandscapeNenine,
    LandscapeColorOs,
    LandscapeLove,
    LandscapeStrip,
    LandscapeIosOutline,
    LandscapeRuler,
    LandscapeWindows,
}

impl BatteryStyle {
    pub const DEFAULT: BatteryStyle = BatteryStyle::Portrait;

    /// Order the styles are offered in the list preference
    pub const DISPLAY_ORDER: [BatteryStyle; 28] = [
        BatteryStyle::Portrait,
        BatteryStyle::RLandscape,
        BatteryStyle::Landscape,
        BatteryStyle::Ios15,
        BatteryStyle::Ios16,
        BatteryStyle::LandscapeBuddy,
        BatteryStyle::LandscapeLine,
        BatteryStyle::LandscapeMusku,
        BatteryStyle::LandscapePill,
        BatteryStyle::LandscapeSignal,
        BatteryStyle::RLandscapeStyleA,
        BatteryStyle::LandscapeStyleA,
        BatteryStyle::RLandscapeStyleB,
        BatteryStyle::LandscapeStyleB,
        BatteryStyle::LandscapeOrigami,
        BatteryStyle::LandscapeMiuiPill,
        BatteryStyle::LandscapeSimply,
        BatteryStyle::LandscapeNenine,
        BatteryStyle::LandscapeColorOs,
        BatteryStyle::LandscapeLove,
        BatteryStyle::LandscapeStrip,
        BatteryStyle::LandscapeIosOutline,
        BatteryStyle::LandscapeRuler,
        BatteryStyle::LandscapeWindows,
        BatteryStyle::FullCircle,
        BatteryStyle::Circle,
        BatteryStyle::DottedCircle,
        BatteryStyle::Text,
    ];

    pub fn code(self) -> i64 {
        match self {
            BatteryStyle::Portrait => 0,
            BatteryStyle::Circle => 1,
            BatteryStyle::DottedCircle => 2,
            BatteryStyle::FullCircle => 3,
            BatteryStyle::Text => 4,
            BatteryStyle::RLandscape => 5,
            BatteryStyle::Landscape => 6,
            BatteryStyle::Ios15 => 7,
            BatteryStyle::Ios16 => 8,
            BatteryStyle::LandscapeBuddy => 9,
            BatteryStyle::LandscapeLine => 10,
            BatteryStyle::LandscapeMusku => 11,
            BatteryStyle::LandscapePill => 12,
            BatteryStyle::LandscapeSignal => 13,
            BatteryStyle::RLandscapeStyleA => 14,
            BatteryStyle::LandscapeStyleA => 15,
            BatteryStyle::RLandscapeStyleB => 16,
            BatteryStyle::LandscapeStyleB => 17,
            BatteryStyle::LandscapeOrigami => 18,
            BatteryStyle::LandscapeMiuiPill => 19,
            BatteryStyle::LandscapeSimply => 20,
            BatteryStyle::LandscapeNenine => 21,
            BatteryStyle::LandscapeColorOs => 22,
            BatteryStyle::LandscapeLove => 23,
            BatteryStyle::LandscapeStrip => 24,
            BatteryStyle::LandscapeIosOutline => 25,
            BatteryStyle::LandscapeRuler => 26,
            BatteryStyle::LandscapeWindows => 27,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::DISPLAY_ORDER
            .iter()
            .copied()
            .find(|style| style.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            BatteryStyle::Portrait => "Portrait",
            BatteryStyle::Circle => "Circle",
            BatteryStyle::DottedCircle => "Dotted circle",
            BatteryStyle::FullCircle => "Full circle",
            BatteryStyle::Text => "Text",
            BatteryStyle::RLandscape => "Landscape (reversed)",
            BatteryStyle::Landscape => "Landscape",
            BatteryStyle::Ios15 => "iOS 15",
            BatteryStyle::Ios16 => "iOS 16",
            BatteryStyle::LandscapeBuddy => "Buddy",
            BatteryStyle::LandscapeLine => "Line",
            BatteryStyle::LandscapeMusku => "Musku",
            BatteryStyle::LandscapePill => "Pill",
            BatteryStyle::LandscapeSignal => "Signal",
            BatteryStyle::RLandscapeStyleA => "Style A (reversed)",
            BatteryStyle::LandscapeStyleA => "Style A",
            BatteryStyle::RLandscapeStyleB => "Style B (reversed)",
            BatteryStyle::LandscapeStyleB => "Style B",
            BatteryStyle::LandscapeOrigami => "Origami",
            BatteryStyle::LandscapeMiuiPill => "MIUI pill",
            BatteryStyle::LandscapeSimply => "Simply",
            BatteryStyle::LandscapeNenine => "Nenine",
            BatteryStyle::LandscapeColorOs => "ColorOS",
            BatteryStyle::LandscapeLove => "Love",
            BatteryStyle::LandscapeStrip => "Strip",
            BatteryStyle::LandscapeIosOutline => "iOS outline",
            BatteryStyle::LandscapeRuler => "Ruler",
            BatteryStyle::LandscapeWindows => "Windows",
        }
    }

    /// Allowed codes in display order
    pub fn allowed_codes() -> Vec<i64> {
        Self::DISPLAY_ORDER.iter().map(|style| style.code()).collect()
    }
}

/// The three values the battery screen's dependent controls are derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryInputs {
    pub style: i64,
    pub percent_shown: bool,
    pub percent_inside: bool,
}

impl Default for BatteryInputs {
    fn default() -> Self {
        Self {
            style: BatteryStyle::DEFAULT.code(),
            percent_shown: false,
            percent_inside: false,
        }
    }
}

impl BatteryInputs {
    /// Replace the input the event refers to
    pub fn apply(self, event: BatteryEvent) -> Self {
        match event {
            BatteryEvent::StyleChanged(style) => Self { style, ..self },
            BatteryEvent::PercentToggled(percent_shown) => Self {
                percent_shown,
                ..self
            },
            BatteryEvent::InsideToggled(percent_inside) => Self {
                percent_inside,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum BatteryEvent {
    StyleChanged(i64),
    PercentToggled(bool),
    InsideToggled(bool),
}

/// Enablement of the controls that depend on the battery style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryControls {
    pub percent_enabled: bool,
    pub inside_enabled: bool,
    pub charging_enabled: bool,
}

/// Compute dependent-control enablement from scratch.
///
/// An unknown style is treated as the default style.
pub fn propagate(inputs: &BatteryInputs) -> BatteryControls {
    let style = match BatteryStyle::from_code(inputs.style) {
        Some(style) => style,
        None => {
            warn!(style = inputs.style, "Unknown battery style, assuming default");
            BatteryStyle::DEFAULT
        }
    };

    let shows_icon = style != BatteryStyle::Text;

    BatteryControls {
        percent_enabled: shows_icon,
        inside_enabled: shows_icon && inputs.percent_shown,
        charging_enabled: shows_icon && inputs.percent_shown && inputs.percent_inside,
    }
}

/// Apply one event and recompute every dependent control
pub fn reduce(inputs: BatteryInputs, event: BatteryEvent) -> (BatteryInputs, BatteryControls) {
    let next = inputs.apply(event);
    (next, propagate(&next))
}
