//! Library identity and transform settings shared by every bundle.
//!
//! Defaults describe the TextareaAutosize package. They can be overridden,
//! in increasing priority, by `autosize.toml` in the project root and by
//! `AUTOSIZE_*` environment variables (nested keys split on `__`, e.g.
//! `AUTOSIZE_GLOBALS__REACT=React`).

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::output::ExportMode;

/// File name looked up in the project root.
pub const SETTINGS_FILE: &str = "autosize.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "AUTOSIZE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Entry module every bundle starts from
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Global export name for UMD builds
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub exports: ExportMode,

    /// External module id → global variable name
    #[serde(default = "default_globals")]
    pub globals: IndexMap<String, String>,

    /// Globs the syntax transform skips
    #[serde(default = "default_transpile_exclude")]
    pub transpile_exclude: Vec<String>,

    /// Prefer the `jsnext:main`/`module` field during resolution
    #[serde(default = "default_true")]
    pub jsnext: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            name: default_name(),
            exports: ExportMode::Named,
            globals: default_globals(),
            transpile_exclude: default_transpile_exclude(),
            jsnext: true,
        }
    }
}

impl BuildSettings {
    /// Figment seeded with the defaults, the settings file under `root`
    /// (if present) and the environment.
    pub fn figment(root: impl AsRef<Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let file = root.as_ref().join(SETTINGS_FILE);
        if file.exists() {
            tracing::debug!(path = %file.display(), "loading build settings file");
            figment = figment.merge(Toml::file(file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load settings for the project rooted at `root`.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(Self::figment(root))
    }

    /// Extract settings from a caller-assembled figment (e.g. with CLI
    /// overrides merged on top).
    pub fn from_figment(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }
}

fn default_entry() -> String {
    "src/index.js".to_string()
}

fn default_name() -> String {
    "TextareaAutosize".to_string()
}

fn default_globals() -> IndexMap<String, String> {
    IndexMap::from([("react".to_string(), "React".to_string())])
}

fn default_transpile_exclude() -> Vec<String> {
    vec!["node_modules/**".to_string()]
}

fn default_true() -> bool {
    true
}
