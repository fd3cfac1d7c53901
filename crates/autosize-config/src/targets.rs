//! The standard set of bundles published with the package.
//!
//! Output paths come from the manifest: `browser[main]`/`browser[module]`
//! for browser builds, `main`/`module` for server builds and `unpkg` for the
//! UMD builds (development build drops the `.min` suffix).

use serde::{Deserialize, Serialize};

use crate::builder::{BuildDescriptor, BundleConfig, ConfigBuilder};
use crate::error::{ConfigError, Result};
use crate::manifest::PackageManifest;
use crate::output::{OutputFormat, OutputSpec};
use crate::settings::BuildSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildTarget {
    /// Browser CommonJS + ESM
    Browser,
    /// Server CommonJS + ESM
    Server,
    /// Unminified UMD
    UmdDevelopment,
    /// Minified UMD
    UmdProduction,
}

impl BuildTarget {
    /// All targets, in the order the bundler receives them.
    pub const ALL: [BuildTarget; 4] = [
        BuildTarget::Browser,
        BuildTarget::Server,
        BuildTarget::UmdDevelopment,
        BuildTarget::UmdProduction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::Browser => "browser",
            BuildTarget::Server => "server",
            BuildTarget::UmdDevelopment => "umd-development",
            BuildTarget::UmdProduction => "umd-production",
        }
    }

    /// Descriptor for this target, with output paths read from `manifest`.
    pub fn descriptor(&self, manifest: &PackageManifest) -> Result<BuildDescriptor> {
        let descriptor = match self {
            BuildTarget::Browser => {
                let main = manifest.require_browser_path(manifest.require_main()?)?;
                let module = manifest.require_browser_path(manifest.require_module()?)?;
                BuildDescriptor::new(vec![
                    OutputSpec::new(main, OutputFormat::Cjs),
                    OutputSpec::new(module, OutputFormat::Esm),
                ])
            }
            BuildTarget::Server => BuildDescriptor::new(vec![
                OutputSpec::new(manifest.require_main()?, OutputFormat::Cjs),
                OutputSpec::new(manifest.require_module()?, OutputFormat::Esm),
            ])
            .server(true)
            .browser(false),
            BuildTarget::UmdDevelopment => {
                let file = development_path(manifest.require_unpkg()?);
                BuildDescriptor::new(OutputSpec::new(file, OutputFormat::Umd))
                    .umd(true)
                    .env("development")
            }
            BuildTarget::UmdProduction => BuildDescriptor::new(OutputSpec::new(
                manifest.require_unpkg()?,
                OutputFormat::Umd,
            ))
            .umd(true)
            .env("production"),
        };
        Ok(descriptor)
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BuildTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        BuildTarget::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidSettings(format!("unknown build target: {s}")))
    }
}

/// `dist/x.umd.min.js` → `dist/x.umd.js`; other paths are returned unchanged.
pub fn development_path(unpkg: &str) -> String {
    match unpkg.strip_suffix(".min.js") {
        Some(stem) => format!("{stem}.js"),
        None => unpkg.to_string(),
    }
}

/// Descriptors for every standard target.
pub fn default_descriptors(manifest: &PackageManifest) -> Result<Vec<BuildDescriptor>> {
    BuildTarget::ALL
        .iter()
        .map(|target| target.descriptor(manifest))
        .collect()
}

/// Build the configurations for `targets`, in the order given.
pub fn build_targets(
    manifest: &PackageManifest,
    settings: &BuildSettings,
    targets: &[BuildTarget],
) -> Result<Vec<BundleConfig>> {
    let deps = manifest.dependency_lists();
    let builder = ConfigBuilder::new(&deps, settings);

    targets
        .iter()
        .map(|target| {
            let _span = tracing::debug_span!("target", name = target.as_str()).entered();
            builder.build(&target.descriptor(manifest)?)
        })
        .collect()
}

/// Build every standard configuration.
pub fn build_all(manifest: &PackageManifest, settings: &BuildSettings) -> Result<Vec<BundleConfig>> {
    build_targets(manifest, settings, &BuildTarget::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_path_drops_min_suffix() {
        assert_eq!(development_path("dist/a.umd.min.js"), "dist/a.umd.js");
        assert_eq!(development_path("dist/a.umd.js"), "dist/a.umd.js");
        assert_eq!(development_path("dist/a.min.js.map"), "dist/a.min.js.map");
    }

    #[test]
    fn target_names_round_trip() {
        for target in BuildTarget::ALL {
            assert_eq!(target.as_str().parse::<BuildTarget>().unwrap(), target);
        }
        assert!("umd".parse::<BuildTarget>().is_err());
    }

    #[test]
    fn umd_targets_need_unpkg() {
        let err = BuildTarget::UmdProduction
            .descriptor(&PackageManifest::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { ref field } if field == "unpkg"));
    }
}
