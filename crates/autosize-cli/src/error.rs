//! Error handling for the autosize-build CLI.
//!
//! Library errors from `autosize-config` convert into [`CliError`] via
//! `#[from]`; `main` turns the final error into a miette report.

use std::path::PathBuf;

use autosize_config::ConfigError;
use miette::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}\n\nHint: Run from the package root or pass --package <path>", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::MissingField { field }) => miette::miette!(
            "package.json is missing `{}`\n\nHint: Every standard bundle needs `main`, `module`, `browser` and `unpkg`; use --target to build a subset",
            field
        ),
        CliError::Config(e) if e.is_target_error() => miette::miette!("Invalid target: {}", e),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_has_hint() {
        let err = CliError::FileNotFound(PathBuf::from("pkg/package.json"));
        let msg = err.to_string();
        assert!(msg.contains("pkg/package.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn config_errors_convert() {
        let err: CliError = ConfigError::MissingTarget.into();
        assert!(matches!(err, CliError::Config(ConfigError::MissingTarget)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn missing_field_report_suggests_target_flag() {
        let err: CliError = ConfigError::MissingField {
            field: "unpkg".into(),
        }
        .into();
        let report = cli_error_to_miette(err);
        let msg = report.to_string();
        assert!(msg.contains("`unpkg`"));
        assert!(msg.contains("--target"));
    }
}
