//! `configs` command: print bundle configurations as JSON.

use std::io::Write;

use autosize_config::{BundleConfig, build_targets};

use crate::cli::{ConfigsArgs, resolve_targets};
use crate::commands::utils::Project;
use crate::error::Result;

pub fn execute(args: ConfigsArgs) -> Result<()> {
    let configs = generate(&args)?;

    let json = if args.compact {
        serde_json::to_string(&configs)?
    } else {
        serde_json::to_string_pretty(&configs)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;

    tracing::info!("Generated {} bundle configuration(s)", configs.len());
    Ok(())
}

/// Build the requested configurations without printing them.
pub fn generate(args: &ConfigsArgs) -> Result<Vec<BundleConfig>> {
    let project = Project::load(&args.project, args.name.as_deref())?;
    let targets = resolve_targets(&args.targets);
    Ok(build_targets(&project.manifest, &project.settings, &targets)?)
}
