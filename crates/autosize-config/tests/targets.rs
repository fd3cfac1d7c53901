//! Tests for the standard target set built from a package.json on disk.

use autosize_config::{
    BuildSettings, BuildTarget, ConfigError, OutputFormat, PackageManifest, build_all,
    build_targets, default_descriptors,
};
use std::fs;
use tempfile::TempDir;

const PACKAGE_JSON: &str = r#"{
  "name": "react-textarea-autosize",
  "main": "dist/react-textarea-autosize.cjs.js",
  "module": "dist/react-textarea-autosize.esm.js",
  "browser": {
    "dist/react-textarea-autosize.cjs.js": "dist/react-textarea-autosize.browser.cjs.js",
    "dist/react-textarea-autosize.esm.js": "dist/react-textarea-autosize.browser.esm.js"
  },
  "unpkg": "dist/react-textarea-autosize.umd.min.js",
  "peerDependencies": { "react": ">=0.14.0 <17.0.0" },
  "dependencies": { "@babel/runtime": "^7.1.2", "prop-types": "^15.6.0" }
}"#;

fn manifest_on_disk() -> (TempDir, PackageManifest) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("package.json");
    fs::write(&path, PACKAGE_JSON).expect("write package.json");
    let manifest = PackageManifest::from_path(&path).expect("load manifest");
    (dir, manifest)
}

#[test]
fn four_configs_in_fixed_order() {
    let (_dir, manifest) = manifest_on_disk();
    let configs = build_all(&manifest, &BuildSettings::default()).expect("build all");
    assert_eq!(configs.len(), 4);

    let browser = &configs[0];
    assert_eq!(
        browser.output[0].file,
        "dist/react-textarea-autosize.browser.cjs.js"
    );
    assert_eq!(browser.output[0].format, OutputFormat::Cjs);
    assert_eq!(
        browser.output[1].file,
        "dist/react-textarea-autosize.browser.esm.js"
    );
    assert_eq!(browser.output[1].format, OutputFormat::Esm);
    assert!(browser.is_external("prop-types"));

    let server = &configs[1];
    assert_eq!(server.output[0].file, "dist/react-textarea-autosize.cjs.js");
    assert_eq!(server.output[1].file, "dist/react-textarea-autosize.esm.js");
    assert_eq!(
        server.replace_rules().and_then(|r| r.get("process.env.SERVER")),
        Some("true")
    );

    let umd_dev = &configs[2];
    assert_eq!(umd_dev.output[0].file, "dist/react-textarea-autosize.umd.js");
    assert_eq!(umd_dev.output[0].format, OutputFormat::Umd);
    assert_eq!(umd_dev.plugins.len(), 4);
    assert!(!umd_dev.is_external("prop-types"));

    let umd_prod = &configs[3];
    assert_eq!(
        umd_prod.output[0].file,
        "dist/react-textarea-autosize.umd.min.js"
    );
    assert_eq!(umd_prod.plugins.len(), 5);
    assert!(umd_prod.is_external("react"));
}

#[test]
fn descriptors_carry_target_flags() {
    let (_dir, manifest) = manifest_on_disk();
    let descriptors = default_descriptors(&manifest).expect("descriptors");

    assert!(descriptors[0].browser && !descriptors[0].server);
    assert!(!descriptors[1].browser && descriptors[1].server);
    assert!(descriptors[2].umd);
    assert_eq!(descriptors[2].env.as_deref(), Some("development"));
    assert_eq!(descriptors[3].env.as_deref(), Some("production"));
}

#[test]
fn selected_targets_only() {
    let (_dir, manifest) = manifest_on_disk();
    let configs = build_targets(
        &manifest,
        &BuildSettings::default(),
        &[BuildTarget::UmdProduction, BuildTarget::Server],
    )
    .expect("build targets");

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].output[0].format, OutputFormat::Umd);
    assert_eq!(configs[1].output[0].format, OutputFormat::Cjs);
}

#[test]
fn browser_target_requires_browser_mapping() {
    let manifest: PackageManifest = r#"{
        "main": "dist/a.cjs.js",
        "module": "dist/a.esm.js",
        "unpkg": "dist/a.umd.min.js"
    }"#
    .parse()
    .expect("parse manifest");

    let err = build_all(&manifest, &BuildSettings::default()).unwrap_err();
    match err {
        ConfigError::MissingField { field } => assert_eq!(field, r#"browser["dist/a.cjs.js"]"#),
        other => panic!("expected MissingField, got {other:?}"),
    }

    // targets that don't read the browser field still build
    let configs = build_targets(
        &manifest,
        &BuildSettings::default(),
        &[BuildTarget::Server, BuildTarget::UmdDevelopment],
    )
    .expect("server and umd");
    assert_eq!(configs[1].output[0].file, "dist/a.umd.js");
}

#[test]
fn missing_manifest_is_an_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = PackageManifest::from_path(dir.path().join("package.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_manifest_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("package.json");
    fs::write(&path, "{ \"main\": ").expect("write");

    let err = PackageManifest::from_path(&path).unwrap_err();
    match err {
        ConfigError::InvalidManifest { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("expected InvalidManifest, got {other:?}"),
    }
}
