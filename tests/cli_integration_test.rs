//! Integration tests for the `swiftorder` binary.

mod common;

use assert_cmd::Command;
use common::write_swift;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const ORDERED: &str = "struct Foo {\n    init() {}\n    func doSomething() {}\n}\n";
const UNORDERED: &str = "struct Foo {\n    func doSomething() {}\n    init() {}\n}\n";

fn swiftorder() -> Command {
    Command::cargo_bin("swiftorder").expect("binary should build")
}

#[test]
fn test_check_ordered_file_exits_zero() {
    let dir = TempDir::new().unwrap();
    let file = write_swift(dir.path(), "Foo.swift", ORDERED);

    let output = swiftorder().arg("check").arg(&file).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Foo.swift"), "unexpected listing: {}", stdout);
    assert!(stdout.contains("0 need reordering"));
}

#[test]
fn test_check_unordered_file_exits_one() {
    let dir = TempDir::new().unwrap();
    write_swift(dir.path(), "Sources/Foo.swift", UNORDERED);

    let output = swiftorder().arg("check").arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Foo.swift"));
    assert!(stdout.contains("expected init, doSomething"));
}

#[test]
fn test_check_json_output_is_valid() {
    let dir = TempDir::new().unwrap();
    write_swift(dir.path(), "A.swift", ORDERED);
    write_swift(dir.path(), "B.swift", UNORDERED);

    let output = swiftorder()
        .args(["check", "--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["needs_reordering"], 1);
    assert_eq!(json["summary"]["failed"], 0);
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_fix_dry_run_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let file = write_swift(dir.path(), "Foo.swift", UNORDERED);

    let output = swiftorder()
        .args(["fix", "--dry-run"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("would reorder"));
    assert_eq!(fs::read_to_string(&file).unwrap(), UNORDERED);
}

#[test]
fn test_fix_rewrites_in_place() {
    let dir = TempDir::new().unwrap();
    let file = write_swift(dir.path(), "Foo.swift", UNORDERED);

    swiftorder().arg("fix").arg(&file).assert().success();
    assert_eq!(fs::read_to_string(&file).unwrap(), ORDERED);

    swiftorder().arg("check").arg(&file).assert().success();
}

#[test]
fn test_fix_honours_nearest_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".swiftorder.yaml"),
        "ordering:\n  members:\n    - instance_method\n    - initializer\n",
    )
    .unwrap();
    let file = write_swift(dir.path(), "Sources/Foo.swift", ORDERED);

    swiftorder().arg("fix").arg(&file).assert().success();
    assert_eq!(fs::read_to_string(&file).unwrap(), UNORDERED);
}

#[test]
fn test_explicit_config_overrides_discovery() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".swiftorder.yaml"),
        "ordering:\n  members:\n    - instance_method\n",
    )
    .unwrap();
    let explicit = dir.path().join("strict.yaml");
    fs::write(&explicit, "ordering:\n  members:\n    - initializer\n").unwrap();
    let file = write_swift(dir.path(), "Foo.swift", ORDERED);

    swiftorder()
        .arg("check")
        .arg("--config")
        .arg(&explicit)
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_malformed_config_fails_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".swiftorder.yaml"), "ordering: [\n").unwrap();
    let file = write_swift(dir.path(), "Foo.swift", UNORDERED);

    let output = swiftorder().arg("fix").arg(&file).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config error"));
    assert_eq!(fs::read_to_string(&file).unwrap(), UNORDERED);
}

#[test]
fn test_parse_failure_reports_path_and_fails() {
    let dir = TempDir::new().unwrap();
    let good = write_swift(dir.path(), "Good.swift", UNORDERED);
    write_swift(dir.path(), "Bad.swift", "struct Bad { func ( }\n");

    let output = swiftorder().arg("fix").arg(dir.path()).output().unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bad.swift"));
    // Other files still complete.
    assert_eq!(fs::read_to_string(&good).unwrap(), ORDERED);
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();

    swiftorder()
        .arg("init")
        .arg("--path")
        .arg(dir.path())
        .assert()
        .success();
    let config = dir.path().join(".swiftorder.yaml");
    assert!(config.exists());

    fs::write(&config, "version: 1\n").unwrap();
    let output = swiftorder()
        .arg("init")
        .arg("--path")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));
    assert_eq!(fs::read_to_string(&config).unwrap(), "version: 1\n");

    swiftorder()
        .args(["init", "--force", "--path"])
        .arg(dir.path())
        .assert()
        .success();
    assert!(fs::read_to_string(&config).unwrap().contains("instance_method"));
}
