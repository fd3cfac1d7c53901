//! `external` command: classify module ids as external or bundled.

use std::io::Write;

use autosize_config::{DependencyLists, ExternalPredicate, PackageManifest};

use crate::cli::ExternalArgs;
use crate::error::{CliError, Result};

pub fn execute(args: ExternalArgs) -> Result<()> {
    if !args.project.package.is_file() {
        return Err(CliError::FileNotFound(args.project.package.clone()));
    }
    let manifest = PackageManifest::from_path(&args.project.package)?;
    let predicate = predicate_for(&manifest.dependency_lists(), args.umd)?;

    let mut stdout = std::io::stdout().lock();
    for (id, external) in classify(&predicate, &args.ids) {
        let verdict = if external { "external" } else { "bundled" };
        writeln!(stdout, "{id}\t{verdict}")?;
    }
    Ok(())
}

fn predicate_for(deps: &DependencyLists, umd: bool) -> Result<ExternalPredicate> {
    let predicate = ExternalPredicate::from_names(deps.external_names(umd))?;
    tracing::debug!(pattern = predicate.pattern().unwrap_or("<none>"), umd, "external predicate");
    Ok(predicate)
}

/// Pair each id with whether it stays external.
pub fn classify<'a>(
    predicate: &ExternalPredicate,
    ids: &'a [String],
) -> impl Iterator<Item = (&'a str, bool)> {
    ids.iter().map(|id| (id.as_str(), predicate.is_external(id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umd_only_keeps_peers_external() {
        let deps = DependencyLists::new(["react"], ["prop-types"]);
        let ids = vec!["react/jsx-runtime".to_string(), "prop-types".to_string()];

        let umd = predicate_for(&deps, true).unwrap();
        let verdicts: Vec<_> = classify(&umd, &ids).collect();
        assert_eq!(verdicts, [("react/jsx-runtime", true), ("prop-types", false)]);

        let cjs = predicate_for(&deps, false).unwrap();
        let verdicts: Vec<_> = classify(&cjs, &ids).collect();
        assert_eq!(verdicts, [("react/jsx-runtime", true), ("prop-types", true)]);
    }
}
