//! Command-line interface definition for autosize-build.
//!
//! - `autosize-build configs` - print bundle configurations as JSON
//! - `autosize-build external` - ask whether module ids stay external
//! - `autosize-build check` - verify package.json covers every target

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigsArgs, ExternalArgs, ProjectArgs};
pub use enums::*;
pub use validation::parse_global;

/// autosize-build - bundler configurations for TextareaAutosize
#[derive(Parser, Debug)]
#[command(
    name = "autosize-build",
    version,
    about = "Generate bundler configurations for the TextareaAutosize library",
    long_about = "Reads package.json and emits one bundler configuration per target:\n\
                  browser CJS/ESM, server CJS/ESM, UMD development and UMD production."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
