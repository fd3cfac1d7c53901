//! Error types for bundle configuration building and project metadata loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Target validation (the only failures of a single config build)
    #[error(
        "bundle cannot target both `browser` & `server` at the same time; pass `true` only to one of these options"
    )]
    ConflictingTarget,

    #[error(
        "bundle must target `browser` or `server` environment; pass `true` to one of these options"
    )]
    MissingTarget,

    // Project metadata errors
    #[error("package.json is missing required field `{field}`")]
    MissingField { field: String },

    #[error("invalid package.json{}: {message}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    InvalidManifest {
        path: Option<PathBuf>,
        message: String,
    },

    // Settings loading (figment)
    #[error("invalid build settings: {0}")]
    InvalidSettings(String),

    #[error("failed to serialize bundle config: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("could not compile external pattern: {0}")]
    ExternalPattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn missing_field(field: impl Into<String>) -> Self {
        ConfigError::MissingField {
            field: field.into(),
        }
    }

    /// Whether this error comes from target flag validation.
    pub fn is_target_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConflictingTarget | ConfigError::MissingTarget
        )
    }
}
