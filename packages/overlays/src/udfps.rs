// ABOUTME: Fingerprint (UDFPS) animation picker
// ABOUTME: Builds the animation grid from the animations package and stores the chosen index

use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use xpe_config::constants::{
    UDFPS_ANIMATIONS_PACKAGE, UDFPS_ANIMATION_PREVIEWS, UDFPS_ANIMATION_STYLES,
    UDFPS_ANIMATION_TITLES, UDFPS_ANIM_STYLE,
};
use xpe_core::{SettingScope, UserId};
use xpe_storage::SettingsStore;

use crate::error::{OverlayError, Result};
use crate::grid::OptionGrid;
use crate::resources::{AssetRef, PackageResources};

pub const DEFAULT_UDFPS_ANIM_STYLE: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UdfpsAnimation {
    pub index: usize,
    /// Drawable name of the animation itself
    pub style: String,
    pub preview: Option<AssetRef>,
    pub title: String,
}

pub struct UdfpsAnimationPicker<S: SettingsStore + ?Sized> {
    store: Arc<S>,
    user: UserId,
}

impl<S: SettingsStore + ?Sized> UdfpsAnimationPicker<S> {
    pub fn new(store: Arc<S>, user: UserId) -> Self {
        Self { store, user }
    }

    /// Animations bundled in the animations package, empty when it is not installed
    pub fn animations<R: PackageResources + ?Sized>(&self, resources: &R) -> Vec<UdfpsAnimation> {
        match load_animations(resources) {
            Ok(animations) => animations,
            Err(e) => {
                error!(package = UDFPS_ANIMATIONS_PACKAGE, error = %e, "Failed to load UDFPS animations");
                Vec::new()
            }
        }
    }

    pub async fn applied_index(&self) -> Result<i64> {
        Ok(self
            .store
            .get_int(
                SettingScope::System,
                UDFPS_ANIM_STYLE,
                DEFAULT_UDFPS_ANIM_STYLE,
                self.user,
            )
            .await?)
    }

    pub async fn grid<R: PackageResources + ?Sized>(
        &self,
        resources: &R,
    ) -> Result<OptionGrid<UdfpsAnimation>> {
        let applied = usize::try_from(self.applied_index().await?).ok();
        Ok(OptionGrid::new(self.animations(resources), applied))
    }

    pub async fn select<R: PackageResources + ?Sized>(
        &self,
        resources: &R,
        index: usize,
    ) -> Result<UdfpsAnimation> {
        let animation = self
            .animations(resources)
            .into_iter()
            .nth(index)
            .ok_or_else(|| OverlayError::UnknownChoice(format!("UDFPS animation {}", index)))?;

        let value = i64::try_from(index)
            .map_err(|_| OverlayError::UnknownChoice(format!("UDFPS animation {}", index)))?;
        self.store
            .put_int(SettingScope::System, UDFPS_ANIM_STYLE, value, self.user)
            .await?;

        info!(index, style = %animation.style, "Applied UDFPS animation");
        Ok(animation)
    }
}

fn load_animations<R: PackageResources + ?Sized>(resources: &R) -> Result<Vec<UdfpsAnimation>> {
    if !resources.has_package(UDFPS_ANIMATIONS_PACKAGE) {
        return Err(OverlayError::PackageNotFound(
            UDFPS_ANIMATIONS_PACKAGE.to_string(),
        ));
    }

    let styles = resources.string_array(UDFPS_ANIMATIONS_PACKAGE, UDFPS_ANIMATION_STYLES)?;
    let previews = resources.string_array(UDFPS_ANIMATIONS_PACKAGE, UDFPS_ANIMATION_PREVIEWS)?;
    let titles = resources.string_array(UDFPS_ANIMATIONS_PACKAGE, UDFPS_ANIMATION_TITLES)?;

    if styles.len() != previews.len() || styles.len() != titles.len() {
        warn!(
            styles = styles.len(),
            previews = previews.len(),
            titles = titles.len(),
            "UDFPS animation arrays differ in length, truncating"
        );
    }

    Ok(styles
        .into_iter()
        .zip(previews)
        .zip(titles)
        .enumerate()
        .map(|(index, ((style, preview), title))| UdfpsAnimation {
            index,
            preview: resources.drawable(UDFPS_ANIMATIONS_PACKAGE, &preview).ok(),
            style,
            title,
        })
        .collect())
}
