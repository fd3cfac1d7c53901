//! Bundle configurations for the TextareaAutosize component library.
//!
//! Given a target descriptor (output files plus `browser`/`server`/`umd`/`env`
//! flags) and the package's dependency lists, [`ConfigBuilder`] produces a
//! [`BundleConfig`]: entry point, augmented outputs, the ordered plugin
//! pipeline and the external-module predicate. The bundler runtime that
//! consumes it is out of scope.
//!
//! ```
//! use autosize_config::{build_config, BuildDescriptor, DependencyLists, OutputFormat, OutputSpec};
//!
//! let deps = DependencyLists::new(["react"], ["prop-types"]);
//! let descriptor = BuildDescriptor::new(OutputSpec::new("dist/x.umd.min.js", OutputFormat::Umd))
//!     .umd(true)
//!     .env("production");
//!
//! let config = build_config(&descriptor, &deps).unwrap();
//! assert_eq!(config.plugins.len(), 5);
//! assert!(config.is_external("react"));
//! assert!(!config.is_external("prop-types"));
//! ```

pub mod builder;
pub mod error;
pub mod external;
pub mod manifest;
pub mod output;
pub mod plugins;
pub mod settings;
pub mod targets;

// Re-export main types
pub use builder::{BuildDescriptor, BundleConfig, ConfigBuilder, build_config};
pub use error::*;
pub use external::{ExternalPredicate, build_external_predicate};
pub use manifest::{DependencyLists, PackageManifest};
pub use output::{
    ExportMode, OneOrMany, OutputFormat, OutputOptions, OutputSpec, normalize_to_sequence,
};
pub use plugins::{Plugin, ReplaceOptions};
pub use settings::BuildSettings;
pub use targets::{BuildTarget, build_all, build_targets, default_descriptors};
