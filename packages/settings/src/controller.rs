// ABOUTME: Common contract of single-preference controllers
// ABOUTME: Preference key and availability reported to the hosting screen

use xpe_core::Availability;

/// A controller bound to one preference on a settings screen
pub trait PreferenceController {
    fn preference_key(&self) -> &str;

    fn availability(&self) -> Availability {
        Availability::Available
    }

    /// Unavailable controllers are hidden by the hosting screen
    fn is_available(&self) -> bool {
        self.availability().is_available()
    }
}
