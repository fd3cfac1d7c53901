//! Command-line driver for the TextareaAutosize bundle configurations.
//!
//! Reads the project's `package.json` (and optional `autosize.toml`), builds
//! the bundle configurations with `autosize-config` and writes them as JSON
//! for the bundler runtime.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command implementations
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
