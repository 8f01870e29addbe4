// ABOUTME: View-model types handed to the hosting UI
// ABOUTME: Switch and list preference state, plus transient user notices

use serde::{Deserialize, Serialize};

/// State of a switch preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleState {
    pub checked: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub value: i64,
    pub label: String,
}

impl ListEntry {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// State of a list preference; `summary` is the label of the selected entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub value: i64,
    pub summary: String,
    pub entries: Vec<ListEntry>,
}

impl ListState {
    /// Select `value` among `entries`, or the first entry when it is not listed
    pub fn select(entries: Vec<ListEntry>, value: i64) -> Option<Self> {
        let index = entries.iter().position(|e| e.value == value).unwrap_or(0);
        let selected = entries.get(index)?.clone();

        Some(Self {
            value: selected.value,
            summary: selected.label,
            entries,
        })
    }
}

/// Transient message shown after a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    ThemeApplied,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ThemeApplied => "Theme applied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_selects_matching_entry() {
        let entries = vec![ListEntry::new(0, "Light"), ListEntry::new(2, "Dark")];

        let state = ListState::select(entries, 2).unwrap();

        assert_eq!(state.value, 2);
        assert_eq!(state.summary, "Dark");
    }

    #[test]
    fn test_list_state_falls_back_to_first_entry() {
        let entries = vec![ListEntry::new(0, "Light"), ListEntry::new(2, "Dark")];

        let state = ListState::select(entries, 5).unwrap();

        assert_eq!(state.value, 0);
        assert_eq!(state.summary, "Light");
    }

    #[test]
    fn test_list_state_without_entries() {
        assert!(ListState::select(Vec::new(), 0).is_none());
    }
}
