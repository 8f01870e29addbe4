// ABOUTME: Package resource lookup
// ABOUTME: Labels, drawables, and string arrays bundled in installed packages

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{OverlayError, Result};

/// Reference to a drawable inside a package. Hosts resolve it to pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    pub package: String,
    pub name: String,
}

pub trait PackageResources: Send + Sync {
    fn has_package(&self, package: &str) -> bool;

    /// Application label of an installed package
    fn label(&self, package: &str) -> Result<String>;

    fn drawable(&self, package: &str, name: &str) -> Result<AssetRef>;

    fn string_array(&self, package: &str, name: &str) -> Result<Vec<String>>;
}

/// Resources bundled in one package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub drawables: BTreeSet<String>,
    #[serde(default)]
    pub arrays: BTreeMap<String, Vec<String>>,
}

impl PackageEntry {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_drawable(mut self, name: impl Into<String>) -> Self {
        self.drawables.insert(name.into());
        self
    }

    pub fn with_array<I, T>(mut self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.arrays
            .insert(name.into(), items.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    packages: BTreeMap<String, PackageEntry>,
}

impl MemoryResources {
    pub fn new(packages: BTreeMap<String, PackageEntry>) -> Self {
        Self { packages }
    }

    pub fn with_package(mut self, package: impl Into<String>, entry: PackageEntry) -> Self {
        self.packages.insert(package.into(), entry);
        self
    }

    fn entry(&self, package: &str) -> Result<&PackageEntry> {
        self.packages
            .get(package)
            .ok_or_else(|| OverlayError::PackageNotFound(package.to_string()))
    }
}

fn missing(package: &str, resource: &str) -> OverlayError {
    OverlayError::MissingResource {
        package: package.to_string(),
        resource: resource.to_string(),
    }
}

impl PackageResources for MemoryResources {
    fn has_package(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    fn label(&self, package: &str) -> Result<String> {
        self.entry(package)?
            .label
            .clone()
            .ok_or_else(|| missing(package, "label"))
    }

    fn drawable(&self, package: &str, name: &str) -> Result<AssetRef> {
        if self.entry(package)?.drawables.contains(name) {
            Ok(AssetRef {
                package: package.to_string(),
                name: name.to_string(),
            })
        } else {
            Err(missing(package, name))
        }
    }

    fn string_array(&self, package: &str, name: &str) -> Result<Vec<String>> {
        self.entry(package)?
            .arrays
            .get(name)
            .cloned()
            .ok_or_else(|| missing(package, name))
    }
}
