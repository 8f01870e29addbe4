// ABOUTME: Host composition for the xpe-settings binary
// ABOUTME: Opens the settings store, property file, and device profile from configuration

pub mod context;
pub mod error;
pub mod logging;

pub use context::HostContext;
pub use error::{CliError, CliResult};
pub use logging::init_tracing;
