//! autosize-build - prints the TextareaAutosize bundler configurations.
//!
//! Handles argument parsing, logging initialization and command dispatch.

use autosize_cli::{cli, commands, error, logger};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);

    let result = match args.command {
        cli::Command::Configs(configs_args) => commands::configs_execute(configs_args),
        cli::Command::External(external_args) => commands::external_execute(external_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
