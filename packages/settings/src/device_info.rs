// ABOUTME: Device info header controller
// ABOUTME: ROM build status, maintainer, hardware summary, and device renaming

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use xpe_config::constants::{
    DEVICE_NAME, PROP_MANUFACTURER, PROP_MODEL, PROP_SECURITY_PATCH, PROP_XPE_BATTERY,
    PROP_XPE_BUILD_VERSION, PROP_XPE_CHIPSET, PROP_XPE_DISPLAY, PROP_XPE_MAINTAINER,
    PROP_XPE_RELEASETYPE, PROP_XPE_VERSION,
};
use xpe_core::{capitalize_first, non_blank, SettingScope, UserId};
use xpe_storage::{PropertyStore, SettingsStore};

use crate::controller::PreferenceController;
use crate::error::Result;
use crate::validation::ValidationError;

const KEY_DEVICE_INFO: &str = "my_device_info_header";
const DEFAULT_FALLBACK: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Official,
    Community,
}

impl BuildStatus {
    /// Anything but "official" (any case) is a community build
    pub fn from_release_type(release_type: &str) -> Self {
        if release_type.eq_ignore_ascii_case("official") {
            BuildStatus::Official
        } else {
            BuildStatus::Community
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuildStatus::Official => "Official build",
            BuildStatus::Community => "Community build",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareInfo {
    pub chipset: String,
    pub battery: String,
    pub resolution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub device_name: String,
    pub build_status: BuildStatus,
    pub maintainer: String,
    pub release_type: String,
    /// Empty when the build does not set a mod version
    pub version: String,
    pub build_version: String,
    pub security_patch: String,
    pub hardware: HardwareInfo,
}

pub struct DeviceInfoController<S, P>
where
    S: SettingsStore + ?Sized,
    P: PropertyStore + ?Sized,
{
    store: Arc<S>,
    props: Arc<P>,
    user: UserId,
}

impl<S, P> DeviceInfoController<S, P>
where
    S: SettingsStore + ?Sized,
    P: PropertyStore + ?Sized,
{
    pub fn new(store: Arc<S>, props: Arc<P>, user: UserId) -> Self {
        Self { store, props, user }
    }

    pub async fn display(&self) -> Result<DeviceInfo> {
        let release_type = self.prop(PROP_XPE_RELEASETYPE);

        Ok(DeviceInfo {
            device_name: self.device_name().await?,
            build_status: BuildStatus::from_release_type(&release_type),
            maintainer: self.maintainer_summary(),
            release_type: capitalize_first(&release_type),
            version: self.props.get(PROP_XPE_VERSION).unwrap_or_default(),
            build_version: self.prop(PROP_XPE_BUILD_VERSION),
            security_patch: self.prop(PROP_SECURITY_PATCH),
            hardware: HardwareInfo {
                chipset: self.prop(PROP_XPE_CHIPSET),
                battery: self.prop(PROP_XPE_BATTERY),
                resolution: self.prop(PROP_XPE_DISPLAY),
            },
        })
    }

    /// User-assigned name, or "manufacturer model" when none is set
    pub async fn device_name(&self) -> Result<String> {
        let stored = self
            .store
            .get_string(SettingScope::Global, DEVICE_NAME, self.user)
            .await?;

        Ok(non_blank(stored).unwrap_or_else(|| {
            format!(
                "{} {}",
                self.prop(PROP_MANUFACTURER),
                self.prop(PROP_MODEL)
            )
        }))
    }

    /// Store a new device name, trimmed. Blank names are rejected.
    pub async fn rename_device(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyValue.into());
        }

        self.store
            .put_string(SettingScope::Global, DEVICE_NAME, name, self.user)
            .await?;

        info!(name, "Renamed device");
        Ok(name.to_string())
    }

    fn maintainer_summary(&self) -> String {
        let maintainer = self.prop(PROP_XPE_MAINTAINER);
        if maintainer.eq_ignore_ascii_case(DEFAULT_FALLBACK) {
            "Maintainer unknown".to_string()
        } else {
            format!("Maintained by {}", maintainer)
        }
    }

    fn prop(&self, name: &str) -> String {
        self.props.get_or(name, DEFAULT_FALLBACK)
    }
}

impl<S, P> PreferenceController for DeviceInfoController<S, P>
where
    S: SettingsStore + ?Sized,
    P: PropertyStore + ?Sized,
{
    fn preference_key(&self) -> &str {
        KEY_DEVICE_INFO
    }
}
