// ABOUTME: Core types, traits, and utilities for XPerience settings
// ABOUTME: Foundational package providing shared functionality across all settings packages

pub mod constants;
pub mod types;
pub mod utils;

// Re-export main types
pub use types::{Availability, ParseScopeError, SettingScope, UserId};

// Re-export constants
pub use constants::{settings_db_file, xpe_dir};

// Re-export utilities
pub use utils::{bool_to_setting, capitalize_first, non_blank, setting_to_bool};
