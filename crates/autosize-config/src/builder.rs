//! Turning a target descriptor into a bundler configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::external::ExternalPredicate;
use crate::manifest::DependencyLists;
use crate::output::{OneOrMany, OutputOptions, OutputSpec};
use crate::plugins::{self, Plugin};
use crate::settings::BuildSettings;

/// What a single bundle should target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    pub output: OneOrMany<OutputSpec>,

    #[serde(default = "default_true")]
    pub browser: bool,

    #[serde(default)]
    pub server: bool,

    /// UMD bundles inline everything except peer dependencies
    #[serde(default)]
    pub umd: bool,

    /// Environment tag (`"production"`, `"development"`, ...); not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
}

impl BuildDescriptor {
    /// Browser-targeted descriptor with default flags.
    pub fn new(output: impl Into<OneOrMany<OutputSpec>>) -> Self {
        Self {
            output: output.into(),
            browser: true,
            server: false,
            umd: false,
            env: None,
        }
    }

    pub fn browser(mut self, browser: bool) -> Self {
        self.browser = browser;
        self
    }

    pub fn server(mut self, server: bool) -> Self {
        self.server = server;
        self
    }

    pub fn umd(mut self, umd: bool) -> Self {
        self.umd = umd;
        self
    }

    pub fn env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Check that exactly one of `browser`/`server` is set.
    pub fn validate(&self) -> Result<()> {
        match (self.browser, self.server) {
            (true, true) => Err(ConfigError::ConflictingTarget),
            (false, false) => Err(ConfigError::MissingTarget),
            _ => Ok(()),
        }
    }
}

/// Configuration handed to the bundler for one bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleConfig {
    pub input: String,
    pub output: Vec<OutputOptions>,
    pub plugins: Vec<Plugin>,
    pub external: ExternalPredicate,
}

impl BundleConfig {
    pub fn is_external(&self, id: &str) -> bool {
        self.external.is_external(id)
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Replacement rules of the `replace` plugin, if present.
    pub fn replace_rules(&self) -> Option<&plugins::ReplaceOptions> {
        self.plugins.iter().find_map(|p| match p {
            Plugin::Replace(rules) => Some(rules),
            _ => None,
        })
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Builds bundle configurations against one project's metadata.
///
/// Holds only shared references; building never mutates the descriptor,
/// the dependency lists or the settings, so one builder can serve any
/// number of calls, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder<'a> {
    deps: &'a DependencyLists,
    settings: &'a BuildSettings,
}

impl<'a> ConfigBuilder<'a> {
    pub fn new(deps: &'a DependencyLists, settings: &'a BuildSettings) -> Self {
        Self { deps, settings }
    }

    pub fn build(&self, descriptor: &BuildDescriptor) -> Result<BundleConfig> {
        descriptor.validate()?;

        let output: Vec<OutputOptions> = descriptor
            .output
            .as_slice()
            .iter()
            .map(|spec| spec.augment(self.settings))
            .collect();

        let plugins = plugins::pipeline(
            self.settings,
            descriptor.env.as_deref(),
            descriptor.browser,
            descriptor.server,
        );

        let external = ExternalPredicate::from_names(self.deps.external_names(descriptor.umd))?;

        tracing::debug!(
            outputs = output.len(),
            plugins = plugins.len(),
            externals = external.names().len(),
            umd = descriptor.umd,
            env = descriptor.env.as_deref().unwrap_or("-"),
            "built bundle config"
        );

        Ok(BundleConfig {
            input: self.settings.entry.clone(),
            output,
            plugins,
            external,
        })
    }
}

/// Build one configuration with the default library settings.
pub fn build_config(descriptor: &BuildDescriptor, deps: &DependencyLists) -> Result<BundleConfig> {
    let settings = BuildSettings::default();
    ConfigBuilder::new(deps, &settings).build(descriptor)
}

fn default_true() -> bool {
    true
}
