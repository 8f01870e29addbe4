// ABOUTME: Configuration and well-known names for XPerience settings
// ABOUTME: Setting keys, system property names, and environment-driven host config

pub mod config;
pub mod constants;

pub use config::{Config, ConfigError};
