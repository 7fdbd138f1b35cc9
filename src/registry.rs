use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::IconError;

/// Icon name to SVG markup.
pub type IconMap = HashMap<String, String>;

/// On-disk form of an icon set: a JSON object of icon name to markup.
///
/// Names serialize in sorted order so manifests diff cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconManifest {
    pub icons: BTreeMap<String, String>,
}

impl IconManifest {
    pub fn from_json(json: &str) -> Result<Self, IconError> {
        serde_json::from_str(json).map_err(|e| {
            warn!("Failed to parse icon manifest: {}", e);
            IconError::Manifest(e.to_string())
        })
    }

    pub fn to_json(&self) -> Result<String, IconError> {
        serde_json::to_string_pretty(self).map_err(|e| IconError::Manifest(e.to_string()))
    }
}

/// How [`IconRegistry::register_icons`] treats icons that are already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegisterMode {
    /// Keep existing icons; incoming names overwrite collisions.
    #[default]
    Merge,
    /// Drop every existing icon before registering.
    Reset,
}

/// Registry of SVG icons, keyed by icon name.
///
/// Construct one per app (see [`crate::context::provide_icon_registry`]) or
/// one per test; there is no process-wide instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRegistry {
    icons: IconMap,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icons<I, K, V>(icons: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut registry = Self::new();
        registry.register_icons(icons, RegisterMode::Merge);
        registry
    }

    /// Register icons. Markup is stored as given; it is not validated.
    pub fn register_icons<I, K, V>(&mut self, icons: I, mode: RegisterMode)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if mode == RegisterMode::Reset {
            self.icons.clear();
        }
        let before = self.icons.len();
        let mut count = 0usize;
        for (name, markup) in icons {
            self.icons.insert(name.into(), markup.into());
            count += 1;
        }
        debug!(
            "Registered {} icons ({:?}): {} -> {} total",
            count,
            mode,
            before,
            self.icons.len()
        );
    }

    /// Register icons from a JSON manifest of the form `{"name": "<svg>...</svg>"}`.
    ///
    /// On a parse error the registry is left untouched.
    pub fn register_manifest(&mut self, json: &str, mode: RegisterMode) -> Result<(), IconError> {
        let manifest = IconManifest::from_json(json)?;
        self.register_icons(manifest.icons, mode);
        Ok(())
    }

    /// Serialize the registered icons as a JSON manifest with sorted names.
    pub fn to_manifest(&self) -> Result<String, IconError> {
        let manifest = IconManifest {
            icons: self
                .icons
                .iter()
                .map(|(name, markup)| (name.clone(), markup.clone()))
                .collect(),
        };
        manifest.to_json()
    }

    /// The currently registered icons. Use [`register_icons`](Self::register_icons) to change them.
    pub fn available_icons(&self) -> &IconMap {
        &self.icons
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Registered icon names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.icons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
