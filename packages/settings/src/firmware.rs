// ABOUTME: CLO firmware version preference controller
// ABOUTME: Summarises the QSSI system and vendor versions from system properties

use std::sync::Arc;
use xpe_config::constants::{PROP_CLO_VENDOR, PROP_CLO_VERSION};
use xpe_core::Availability;
use xpe_storage::PropertyStore;

use crate::controller::PreferenceController;
use crate::error::{Result, SettingsError};

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloVersion {
    pub system: String,
    pub vendor: String,
}

pub struct CloVersionController<P: PropertyStore + ?Sized> {
    props: Arc<P>,
    key: String,
}

impl<P: PropertyStore + ?Sized> CloVersionController<P> {
    pub fn new(props: Arc<P>, key: impl Into<String>) -> Self {
        Self {
            props,
            key: key.into(),
        }
    }

    /// Both versions, or `Unavailable` naming the first missing property
    pub fn version(&self) -> Result<CloVersion> {
        let system = self.required(PROP_CLO_VERSION)?;
        let vendor = self.required(PROP_CLO_VENDOR)?;
        Ok(CloVersion { system, vendor })
    }

    pub fn summary(&self) -> String {
        match self.version() {
            Ok(version) => format!("{}\n{}", version.system, version.vendor),
            Err(_) => UNKNOWN.to_string(),
        }
    }

    fn required(&self, name: &str) -> Result<String> {
        match self.props.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(SettingsError::Unavailable(name.to_string())),
        }
    }
}

impl<P: PropertyStore + ?Sized> PreferenceController for CloVersionController<P> {
    fn preference_key(&self) -> &str {
        &self.key
    }

    fn availability(&self) -> Availability {
        if self.props.is_set(PROP_CLO_VERSION) && self.props.is_set(PROP_CLO_VENDOR) {
            Availability::Available
        } else {
            Availability::ConditionallyUnavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpe_storage::MapPropertyStore;

    fn controller(props: MapPropertyStore) -> CloVersionController<MapPropertyStore> {
        CloVersionController::new(Arc::new(props), "clo_version")
    }

    #[test]
    fn test_available_with_both_properties() {
        let controller = controller(
            MapPropertyStore::new()
                .with(PROP_CLO_VERSION, "LA.QSSI.13.0.r1-09800")
                .with(PROP_CLO_VENDOR, "LA.UM.9.12.r1-15800"),
        );

        assert_eq!(controller.availability(), Availability::Available);
        assert_eq!(
            controller.summary(),
            "LA.QSSI.13.0.r1-09800\nLA.UM.9.12.r1-15800"
        );
        assert_eq!(controller.preference_key(), "clo_version");
    }

    #[test]
    fn test_unavailable_when_vendor_missing() {
        let controller = controller(MapPropertyStore::new().with(PROP_CLO_VERSION, "LA.QSSI.13.0"));

        assert_eq!(
            controller.availability(),
            Availability::ConditionallyUnavailable
        );
        assert!(!controller.is_available());
        assert_eq!(controller.summary(), "Unknown");

        match controller.version() {
            Err(SettingsError::Unavailable(prop)) => assert_eq!(prop, PROP_CLO_VENDOR),
            _ => panic!("Expected Unavailable error"),
        }
    }

    #[test]
    fn test_empty_property_counts_as_missing() {
        let controller = controller(
            MapPropertyStore::new()
                .with(PROP_CLO_VERSION, "")
                .with(PROP_CLO_VENDOR, "LA.UM.9.12"),
        );

        assert!(!controller.is_available());
        assert_eq!(controller.summary(), "Unknown");
    }
}
