// ABOUTME: Shared output helpers for CLI commands
// ABOUTME: Table presets, toggle rendering, and on/off arguments

use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use xpe_settings::ToggleState;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn enabled(self) -> bool {
        self == Switch::On
    }
}

pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn toggle_text(toggle: &ToggleState) -> String {
    let value = if toggle.checked { "on" } else { "off" };
    if toggle.enabled {
        value.to_string()
    } else {
        format!("{} (disabled)", value)
    }
}

pub fn marker(active: bool) -> String {
    if active {
        "●".green().to_string()
    } else {
        " ".to_string()
    }
}
