// tests/config_loading.rs

//! Config parsing, defaults, validation and path resolution.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use gruntgate::config::{load_and_validate, load_from_path, validate};
use gruntgate_test_utils::builders::ConfigFileBuilder;
use gruntgate_test_utils::init_tracing;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("Gruntgate.toml");
    fs::write(&path, contents).expect("writing config");
    path
}

#[test]
fn empty_config_gets_defaults() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let path = write_config(&dir, "");

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.runner.command, "grunt");
    assert_eq!(cfg.runner.arguments, "");
    assert_eq!(cfg.runner.working_directory, ".");
    assert!(cfg.gate.triggerfiles.is_empty());
    assert!(cfg.gate.srcdir.is_none());
    assert!(cfg.gate.outputdir.is_none());
    Ok(())
}

#[test]
fn full_config_round_trips() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"
[runner]
command = "gulp"
arguments = "build --silent"
working_directory = "frontend"

[gate]
triggerfiles = ["Gruntfile.js", "package.json"]
srcdir = "src"
outputdir = "dist"
exclude = ["**/*.map"]
"#,
    );

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.runner.command, "gulp");
    assert_eq!(cfg.runner.arguments, "build --silent");
    assert_eq!(cfg.gate.triggerfiles.len(), 2);
    assert_eq!(cfg.gate.srcdir.as_deref(), Some("src"));
    assert_eq!(cfg.gate.outputdir.as_deref(), Some("dist"));
    assert_eq!(cfg.gate.exclude, vec!["**/*.map".to_string()]);
    Ok(())
}

#[test]
fn unparsable_toml_is_an_error() {
    init_tracing();
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[runner\ncommand = ");

    assert!(load_from_path(&path).is_err());
}

#[test]
fn empty_command_fails_validation() {
    init_tracing();
    let cfg = ConfigFileBuilder::new().command("  ").build();
    assert!(validate::validate_config(&cfg).is_err());
}

#[test]
fn blank_trigger_file_entry_fails_validation() {
    init_tracing();
    let cfg = ConfigFileBuilder::new().triggerfile("").build();
    assert!(validate::validate_config(&cfg).is_err());
}

#[test]
fn invalid_exclude_glob_fails_validation() {
    init_tracing();
    let cfg = ConfigFileBuilder::new().exclude("src/[oops").build();
    assert!(validate::validate_config(&cfg).is_err());
}

#[test]
fn builder_defaults_pass_validation() -> TestResult {
    init_tracing();
    let cfg = ConfigFileBuilder::new()
        .arguments("build")
        .srcdir("src")
        .outputdir("dist")
        .build();
    validate::validate_config(&cfg)?;
    Ok(())
}

#[test]
fn relative_paths_resolve_against_the_working_directory() {
    init_tracing();
    let cfg = ConfigFileBuilder::new()
        .working_directory("frontend")
        .triggerfile("package.json")
        .srcdir("src")
        .outputdir("dist")
        .build();

    let resolved = cfg.resolve(Path::new("/repo"));

    assert_eq!(resolved.working_directory, PathBuf::from("/repo/frontend"));
    assert_eq!(
        resolved.triggerfiles,
        vec![PathBuf::from("/repo/frontend/package.json")]
    );
    assert_eq!(resolved.srcdir, Some(PathBuf::from("/repo/frontend/src")));
    assert_eq!(resolved.outputdir, Some(PathBuf::from("/repo/frontend/dist")));
}

#[test]
fn absolute_paths_are_kept_as_is() {
    init_tracing();
    let cfg = ConfigFileBuilder::new()
        .working_directory("/elsewhere/frontend")
        .triggerfile("/shared/Gruntfile.js")
        .build();

    let resolved = cfg.resolve(Path::new("/repo"));

    assert_eq!(
        resolved.working_directory,
        PathBuf::from("/elsewhere/frontend")
    );
    assert_eq!(
        resolved.triggerfiles,
        vec![PathBuf::from("/shared/Gruntfile.js")]
    );
}
