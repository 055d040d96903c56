//! Binary tests for `ca-manifest`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const PEM: &str = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ca-manifest"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn ca-manifest")
}

fn provisioning_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("owner")).unwrap();
    fs::write(dir.path().join("owner/ca-cert.pem"), PEM).unwrap();
    fs::write(
        dir.path().join("manifest-template.json"),
        r#"{"sql": ["CREATE DATABASE test"], "debug": false}"#,
    )
    .unwrap();
    dir
}

#[test]
fn test_no_arguments_uses_default_layout() {
    let dir = provisioning_dir();

    let output = run(dir.path(), &[]);

    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
    let manifest = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
    assert_eq!(
        manifest,
        "{\n    \"sql\": [\n        \"CREATE DATABASE test\"\n    ],\n    \"debug\": false,\n    \"ca\": \"-----BEGIN CERTIFICATE-----\\nMIIB\\n-----END CERTIFICATE-----\\n\"\n}"
    );
}

#[test]
fn test_stdout_flag_prints_without_writing() {
    let dir = provisioning_dir();

    let output = run(dir.path(), &["--stdout", "--indent", "2"]);

    assert!(output.status.success(), "{output:?}");
    let printed = String::from_utf8(output.stdout).unwrap();
    assert!(printed.starts_with("{\n  \"sql\": [\n"));
    assert!(printed.ends_with("}\n"));
    assert!(!dir.path().join("manifest.json").exists());
}

#[test]
fn test_flags_override_config_file() {
    let dir = provisioning_dir();
    fs::write(dir.path().join("other.pem"), "OTHER").unwrap();
    fs::write(
        dir.path().join("composer.json"),
        r#"{"ca": "other.pem", "output": "from-config.json", "key": "root_ca"}"#,
    )
    .unwrap();

    let output = run(
        dir.path(),
        &["--config", "composer.json", "--output", "from-flag.json"],
    );

    assert!(output.status.success(), "{output:?}");
    assert!(!dir.path().join("from-config.json").exists());
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("from-flag.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["root_ca"], "OTHER");
    assert!(manifest.get("ca").is_none());
}

#[test]
fn test_missing_certificate_fails() {
    let dir = provisioning_dir();
    fs::remove_file(dir.path().join("owner/ca-cert.pem")).unwrap();

    let output = run(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("certificate file not found"), "{stderr}");
    assert!(!dir.path().join("manifest.json").exists());
}

#[test]
fn test_malformed_template_fails() {
    let dir = provisioning_dir();
    fs::write(dir.path().join("manifest-template.json"), r#"{"debug": false,}"#).unwrap();

    let output = run(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not valid JSON"), "{stderr}");
    assert!(!dir.path().join("manifest.json").exists());
}
