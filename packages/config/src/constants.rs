// ABOUTME: Well-known setting keys, system property names, and package names
// ABOUTME: Centralized definitions of every external name the controllers touch

// Status bar battery (system scope)
pub const STATUS_BAR_BATTERY_STYLE: &str = "status_bar_battery_style";
pub const STATUS_BAR_SHOW_BATTERY_PERCENT: &str = "status_bar_show_battery_percent";
pub const STATUS_BAR_SHOW_BATTERY_PERCENT_CHARGING: &str =
    "status_bar_show_battery_percent_charging";
pub const STATUS_BAR_SHOW_BATTERY_PERCENT_INSIDE: &str = "status_bar_show_battery_percent_inside";

// Display (secure scope)
pub const DEVICE_THEME: &str = "device_theme";
pub const THEME_CUSTOMIZATION_OVERLAY_PACKAGES: &str = "theme_customization_overlay_packages";

// Lock screen (system scope)
pub const UDFPS_ANIM_STYLE: &str = "udfps_anim_style";

// Device (global scope)
pub const DEVICE_NAME: &str = "device_name";

// Firmware properties
pub const PROP_CLO_VERSION: &str = "ro.qcom.system";
pub const PROP_CLO_VENDOR: &str = "ro.qcom.vendor";

// ROM build properties
pub const PROP_XPE_VERSION: &str = "ro.xpe.modversion";
pub const PROP_XPE_RELEASETYPE: &str = "ro.xpe.releasetype";
pub const PROP_XPE_MAINTAINER: &str = "ro.xpe.maintainer";
pub const PROP_XPE_BUILD_VERSION: &str = "ro.xperience.build.version";
pub const PROP_XPE_CHIPSET: &str = "ro.xpe.chipset";
pub const PROP_XPE_BATTERY: &str = "ro.xpe.battery";
pub const PROP_XPE_DISPLAY: &str = "ro.xpe.display_resolution";
pub const PROP_SECURITY_PATCH: &str = "ro.build.version.security_patch";
pub const PROP_MANUFACTURER: &str = "ro.product.manufacturer";
pub const PROP_MODEL: &str = "ro.product.model";

// Packages and overlay categories
pub const SYSTEMUI_PACKAGE: &str = "com.android.systemui";
pub const VOLTE_ICON_CATEGORY: &str = "android.theme.customization.volte_icon";
pub const VOLTE_ICON_DRAWABLE: &str = "ic_volte";
pub const UDFPS_ANIMATIONS_PACKAGE: &str = "mx.xperience.udfps.animations";
pub const UDFPS_ANIMATION_STYLES: &str = "udfps_animation_styles";
pub const UDFPS_ANIMATION_PREVIEWS: &str = "udfps_animation_previews";
pub const UDFPS_ANIMATION_TITLES: &str = "udfps_animation_titles";

// Screen resources registered for search indexing
pub const STATUSBAR_BATTERY_SETTINGS_XML: &str = "statusbar_battery_settings";

// Host environment variables
pub const XPE_DATABASE_URL: &str = "XPE_DATABASE_URL";
pub const XPE_USER_ID: &str = "XPE_USER_ID";
pub const XPE_PROPS_FILE: &str = "XPE_PROPS_FILE";
pub const XPE_PROFILE: &str = "XPE_PROFILE";
pub const XPE_LOG: &str = "XPE_LOG";

// System Environment Variables
pub const HOME: &str = "HOME";
