//! Project loading shared by the commands.

use std::path::{Path, PathBuf};

use autosize_config::{BuildSettings, PackageManifest};
use figment::providers::Serialized;

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

/// Manifest and settings of the project being configured
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub manifest: PackageManifest,
    pub settings: BuildSettings,
}

impl Project {
    /// Load `package.json` and the layered settings next to it.
    ///
    /// `name` overrides the global export name from every other source.
    pub fn load(args: &ProjectArgs, name: Option<&str>) -> Result<Self> {
        let package = &args.package;
        if !package.is_file() {
            return Err(CliError::FileNotFound(package.clone()));
        }

        let root = project_root(package);
        let manifest = PackageManifest::from_path(package)?;

        let mut figment = BuildSettings::figment(&root);
        if let Some(name) = name {
            figment = figment.merge(Serialized::default("name", name));
        }
        let settings = BuildSettings::from_figment(figment)?;

        tracing::debug!(
            root = %root.display(),
            package = manifest.name.as_deref().unwrap_or("<unnamed>"),
            "loaded project"
        );

        Ok(Self {
            root,
            manifest,
            settings,
        })
    }
}

/// Directory containing the manifest; `.` for a bare file name.
pub fn project_root(package: &Path) -> PathBuf {
    match package.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_of_bare_file_is_cwd() {
        assert_eq!(project_root(Path::new("package.json")), PathBuf::from("."));
    }

    #[test]
    fn root_of_nested_file_is_parent() {
        assert_eq!(
            project_root(Path::new("packages/autosize/package.json")),
            PathBuf::from("packages/autosize")
        );
    }

    #[test]
    fn missing_package_is_file_not_found() {
        let args = ProjectArgs {
            package: PathBuf::from("does/not/exist/package.json"),
        };
        let err = Project::load(&args, None).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
