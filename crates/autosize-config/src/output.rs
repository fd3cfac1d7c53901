//! Output descriptors: what the caller asks for and what the bundler receives.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::settings::BuildSettings;

/// Module format of an emitted file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CommonJS (`require`/`module.exports`)
    Cjs,
    /// ECMAScript modules
    Esm,
    /// Universal module definition, usable from a script tag or a loader
    Umd,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Cjs => "cjs",
            OutputFormat::Esm => "esm",
            OutputFormat::Umd => "umd",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the bundle exposes the entry module's exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Auto,
    Default,
    #[default]
    Named,
    None,
}

/// A single value or an ordered list of values.
///
/// Deserializes from either a bare object or an array of objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Borrow the contents as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    /// Wrap a single value in a one-element list; lists pass through as-is.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<OutputSpec> for OneOrMany<OutputSpec> {
    fn from(spec: OutputSpec) -> Self {
        OneOrMany::One(spec)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

/// Normalize a value-or-list into a list without reordering.
///
/// Normalizing an already normalized list returns it unchanged.
pub fn normalize_to_sequence<T>(value: impl Into<OneOrMany<T>>) -> Vec<T> {
    value.into().into_vec()
}

/// One file the bundler should emit, as requested by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Target file path
    pub file: String,

    pub format: OutputFormat,

    /// Any other bundler output options, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OutputSpec {
    pub fn new(file: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            file: file.into(),
            format,
            extra: Map::new(),
        }
    }

    /// Attach an extra pass-through option (e.g. `sourcemap`).
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Produce the bundler-facing output options.
    ///
    /// The library identity (global name, export mode, globals) is applied
    /// after the spec's own fields, so it wins over same-named extras. The
    /// spec itself is left untouched.
    pub fn augment(&self, settings: &BuildSettings) -> OutputOptions {
        let extra = self
            .extra
            .iter()
            .filter(|(key, _)| !OutputOptions::RESERVED.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        OutputOptions {
            file: self.file.clone(),
            format: self.format,
            name: settings.name.clone(),
            exports: settings.exports,
            globals: settings.globals.clone(),
            extra,
        }
    }
}

/// Output options handed to the bundler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub file: String,

    pub format: OutputFormat,

    /// Global variable name the UMD build assigns to
    pub name: String,

    pub exports: ExportMode,

    /// External module id → global variable, used by UMD builds
    pub globals: IndexMap<String, String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OutputOptions {
    /// Keys owned by the augmentation; never taken from pass-through extras.
    const RESERVED: [&'static str; 5] = ["file", "format", "name", "exports", "globals"];
}
