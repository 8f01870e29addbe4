// ABOUTME: Read-only system property store
// ABOUTME: Map-backed properties and a build.prop style file reader

use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::{StorageError, StorageResult};

/// String-keyed, read-only property lookup (firmware and build metadata)
pub trait PropertyStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;

    /// Value of `name`, or `default` when the property is unset or empty
    fn get_or(&self, name: &str, default: &str) -> String {
        match self.get(name) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }

    /// Unset and empty properties read the same
    fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapPropertyStore {
    props: HashMap<String, String>,
}

impl MapPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapPropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertyStore for MapPropertyStore {
    fn get(&self, name: &str) -> Option<String> {
        self.props.get(name).cloned()
    }
}

/// Parse `key=value` lines. Blank lines and `#` comments are skipped; a
/// later definition of the same key wins.
pub fn parse_props(content: &str) -> StorageResult<MapPropertyStore> {
    let mut store = MapPropertyStore::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| StorageError::InvalidPropertyLine {
                line: index + 1,
                content: line.to_string(),
            })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(StorageError::InvalidPropertyLine {
                line: index + 1,
                content: line.to_string(),
            });
        }

        store.insert(key, value.trim());
    }

    Ok(store)
}

/// Load a `build.prop` style file
pub fn load_prop_file(path: impl AsRef<Path>) -> StorageResult<MapPropertyStore> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let store = parse_props(&content)?;
    debug!(path = %path.display(), count = store.len(), "Loaded system properties");
    Ok(store)
}
