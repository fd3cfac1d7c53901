//! `check` command: make sure every standard target can be built.

use autosize_config::{BuildTarget, BundleConfig, ConfigBuilder, ConfigError};

use crate::cli::CheckArgs;
use crate::commands::utils::Project;
use crate::error::Result;

pub fn execute(args: CheckArgs) -> Result<()> {
    let project = Project::load(&args.project, None)?;
    let mut first_error = None;

    for (target, outcome) in check_targets(&project) {
        match outcome {
            Ok(config) => tracing::info!(
                "{target}: ok ({} output(s), {} plugin(s), {} external name(s))",
                config.output.len(),
                config.plugins.len(),
                config.external.names().len()
            ),
            Err(err) => {
                tracing::error!("{target}: {err}");
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Build every standard target, keeping failures per target.
pub fn check_targets(
    project: &Project,
) -> Vec<(BuildTarget, std::result::Result<BundleConfig, ConfigError>)> {
    let deps = project.manifest.dependency_lists();
    let builder = ConfigBuilder::new(&deps, &project.settings);

    BuildTarget::ALL
        .into_iter()
        .map(|target| {
            let outcome = target
                .descriptor(&project.manifest)
                .and_then(|descriptor| builder.build(&descriptor));
            (target, outcome)
        })
        .collect()
}
