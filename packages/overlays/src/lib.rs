// ABOUTME: Theme customization pickers for XPerience settings
// ABOUTME: Overlay manager seam, package resources, option grids, overlay and UDFPS pickers

pub mod customization;
pub mod error;
pub mod grid;
pub mod manager;
pub mod picker;
pub mod profile;
pub mod resources;
pub mod udfps;

pub use customization::ThemeCustomization;
pub use error::{OverlayError, Result};
pub use grid::{GridClick, OptionGrid, GRID_COLUMNS};
pub use manager::{MemoryOverlayManager, OverlayInfo, OverlayManager};
pub use picker::{OverlayChoice, OverlayPicker};
pub use profile::DeviceProfile;
pub use resources::{AssetRef, MemoryResources, PackageEntry, PackageResources};
pub use udfps::{UdfpsAnimation, UdfpsAnimationPicker, DEFAULT_UDFPS_ANIM_STYLE};
