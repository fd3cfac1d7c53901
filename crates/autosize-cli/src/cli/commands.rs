use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::TargetArg;
use crate::cli::validation::parse_global;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print bundle configurations as JSON
    ///
    /// Emits an array with one configuration per target, in the order
    /// browser, server, umd-development, umd-production unless --target
    /// selects a subset.
    Configs(ConfigsArgs),

    /// Report whether module ids are left external
    ///
    /// Prints one `<id>\t<external|bundled>` line per id.
    External(ExternalArgs),

    /// Verify package.json provides every standard target
    Check(CheckArgs),
}

/// Options shared by every command: where the project lives
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Path to package.json
    ///
    /// autosize.toml is looked up next to it.
    #[arg(short, long, value_name = "PATH", default_value = "package.json")]
    pub package: PathBuf,
}

/// Arguments for the configs command
#[derive(Args, Debug)]
pub struct ConfigsArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Targets to build (repeatable; default: all)
    #[arg(short, long = "target", value_enum, value_name = "TARGET")]
    pub targets: Vec<TargetArg>,

    /// Override the global export name of UMD builds
    #[arg(long, value_name = "NAME", value_parser = parse_global)]
    pub name: Option<String>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the external command
#[derive(Args, Debug)]
pub struct ExternalArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Module ids to test (e.g. react, react/jsx-runtime)
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,

    /// Use the UMD rules (only peer dependencies stay external)
    #[arg(long)]
    pub umd: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
