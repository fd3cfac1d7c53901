//! Typed view over the project's `package.json`.
//!
//! Only the fields the build reads are modelled; everything else in the
//! manifest is ignored.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Project metadata relevant to bundling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// CommonJS entry (`dist/*.cjs.js`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    /// ES module entry (`dist/*.esm.js`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// Browser field: maps `main`/`module` paths to browser-specific builds
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub browser: IndexMap<String, Value>,

    /// Minified UMD build path, served by CDNs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpkg: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub peer_dependencies: IndexMap<String, String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Read and parse a `package.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidManifest {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Create from serde_json::Value (for manifests already in memory)
    ///
    /// # Example
    ///
    /// ```
    /// use autosize_config::PackageManifest;
    /// use serde_json::json;
    ///
    /// let manifest = PackageManifest::from_value(json!({
    ///     "main": "dist/lib.cjs.js",
    ///     "peerDependencies": { "react": ">=0.14.0" }
    /// }))
    /// .unwrap();
    /// assert_eq!(manifest.main.as_deref(), Some("dist/lib.cjs.js"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidManifest {
            path: None,
            message: e.to_string(),
        })
    }

    /// Look up the browser-specific replacement for a package path.
    ///
    /// Entries mapped to `false` (the "ignore this module" form) yield `None`.
    pub fn browser_path(&self, path: &str) -> Option<&str> {
        self.browser.get(path).and_then(Value::as_str)
    }

    pub fn require_main(&self) -> Result<&str> {
        self.main
            .as_deref()
            .ok_or_else(|| ConfigError::missing_field("main"))
    }

    pub fn require_module(&self) -> Result<&str> {
        self.module
            .as_deref()
            .ok_or_else(|| ConfigError::missing_field("module"))
    }

    pub fn require_unpkg(&self) -> Result<&str> {
        self.unpkg
            .as_deref()
            .ok_or_else(|| ConfigError::missing_field("unpkg"))
    }

    /// Browser build path for the given entry, failing with the field path
    /// (`browser["<entry>"]`) when the mapping is absent.
    pub fn require_browser_path(&self, entry: &str) -> Result<&str> {
        self.browser_path(entry)
            .ok_or_else(|| ConfigError::missing_field(format!("browser[\"{entry}\"]")))
    }

    pub fn dependency_lists(&self) -> DependencyLists {
        DependencyLists::from(self)
    }
}

impl std::str::FromStr for PackageManifest {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| ConfigError::InvalidManifest {
            path: None,
            message: e.to_string(),
        })
    }
}

/// Package names declared by the manifest, in declaration order.
///
/// Names are not deduplicated between the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyLists {
    pub peer: Vec<String>,
    pub regular: Vec<String>,
}

impl DependencyLists {
    pub fn new<P, R, S>(peer: P, regular: R) -> Self
    where
        P: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            peer: peer.into_iter().map(Into::into).collect(),
            regular: regular.into_iter().map(Into::into).collect(),
        }
    }

    /// Names that should stay external for a bundle.
    ///
    /// UMD bundles inline everything except peers; other formats leave both
    /// peers and regular dependencies to the consumer's resolver.
    pub fn external_names(&self, umd: bool) -> Vec<String> {
        if umd {
            return self.peer.clone();
        }
        self.peer.iter().chain(&self.regular).cloned().collect()
    }
}

impl From<&PackageManifest> for DependencyLists {
    fn from(manifest: &PackageManifest) -> Self {
        Self {
            peer: manifest.peer_dependencies.keys().cloned().collect(),
            regular: manifest.dependencies.keys().cloned().collect(),
        }
    }
}
