//! Tests for error messages, suggestions and exit codes.

use std::fs;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn dddgen(tmp: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("dddgen");
    cmd.current_dir(tmp.path())
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("DDDGEN_SETTINGS_FILE")
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .arg("--no-color")
        .arg("--settings")
        .arg(tmp.path().join("settings.toml"));
    cmd
}

fn is_empty_dir(tmp: &TempDir) -> bool {
    fs::read_dir(tmp.path()).unwrap().next().is_none()
}

#[test]
fn missing_name_cancels_without_side_effects() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .arg("entity")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"))
        .stderr(predicate::str::contains("entity name"));

    assert!(is_empty_dir(&tmp));
}

#[test]
fn blank_name_cancels() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["project", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Operation cancelled"));
}

#[test]
fn java_without_package_is_refused() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["language", "java"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "A package identifier is required for Java output",
        ))
        .stderr(predicate::str::contains("dddgen language java --package"));

    // Nothing was stored.
    assert!(!tmp.path().join("settings.toml").exists());
}

#[test]
fn config_set_java_without_package_is_refused() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["config", "set", "language", "java"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("package identifier"));
}

#[test]
fn hand_edited_java_settings_block_generation() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("settings.toml"), "language = \"java\"\n").unwrap();

    dddgen(&tmp)
        .args(["project", "Shop"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("package identifier"));
    dddgen(&tmp).args(["entity", "Order"]).assert().code(2);

    assert!(!tmp.path().join("Shop").exists());
    assert!(!tmp.path().join("src").exists());
}

#[test]
fn invalid_package_is_rejected() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["language", "java", "--package", "com..shop"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid package identifier"));
}

#[test]
fn unsupported_language_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["language", "go"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("typescript"));
}

#[test]
fn unknown_stored_language_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("settings.toml"), "language = \"go\"\n").unwrap();

    dddgen(&tmp)
        .arg("layout")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown target language: go"));
}

#[test]
fn missing_workspace_is_not_found() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["entity", "Order", "--root", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Workspace folder not found"))
        .stderr(predicate::str::contains("--root"));
}

#[test]
fn corrupt_settings_file_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("settings.toml"), "language = [").unwrap();

    dddgen(&tmp)
        .args(["config", "get", "language"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Settings error"));
}

#[test]
fn missing_explicit_config_file_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["--config", "nope.toml", "layout"])
        .assert()
        .code(4);
}

#[test]
fn unknown_settings_key() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["config", "get", "colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown settings key: colour"))
        .stderr(predicate::str::contains("language, package"));
}

#[test]
fn verbose_hides_the_hint() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["-v", "entity"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--verbose for more details").not());
}

#[test]
fn names_that_leave_the_workspace_are_refused() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["entity", "../Order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Path leaves the target folder"));

    assert!(is_empty_dir(&tmp));
}

#[test]
fn rooted_names_are_user_errors() {
    let tmp = TempDir::new().unwrap();
    dddgen(&tmp)
        .args(["entity", "/Order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Absolute paths not allowed"))
        .stderr(predicate::str::contains("Internal error").not());
    dddgen(&tmp).args(["project", "/abs/Shop"]).assert().code(2);

    assert!(is_empty_dir(&tmp));
}
