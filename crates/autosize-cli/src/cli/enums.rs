use autosize_config::BuildTarget;
use clap::ValueEnum;

/// Bundle target selectable from the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TargetArg {
    /// Browser CommonJS + ESM builds (`browser` field paths)
    #[value(name = "browser")]
    Browser,

    /// Server CommonJS + ESM builds (`main`/`module` paths)
    #[value(name = "server")]
    Server,

    /// Unminified UMD build
    #[value(name = "umd-development", alias = "umd-dev")]
    UmdDevelopment,

    /// Minified UMD build (`unpkg` path)
    #[value(name = "umd-production", alias = "umd-prod")]
    UmdProduction,
}

impl From<TargetArg> for BuildTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Browser => BuildTarget::Browser,
            TargetArg::Server => BuildTarget::Server,
            TargetArg::UmdDevelopment => BuildTarget::UmdDevelopment,
            TargetArg::UmdProduction => BuildTarget::UmdProduction,
        }
    }
}

/// Selected targets, or all of them when none were given.
pub fn resolve_targets(args: &[TargetArg]) -> Vec<BuildTarget> {
    if args.is_empty() {
        return BuildTarget::ALL.to_vec();
    }
    args.iter().copied().map(Into::into).collect()
}
