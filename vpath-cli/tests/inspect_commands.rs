//! Tests for `vpath split`, `vpath wildcards` and `vpath validate`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_split_file_text() {
    let env = TestEnv::new();

    env.command()
        .args(["split", "$DATA/conf/app.ini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: file"))
        .stdout(predicate::str::contains("parent: $DATA/conf"))
        .stdout(predicate::str::contains("extension: .ini"));
}

#[test]
fn test_split_directory_json() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["split", "--format", "json", "$DATA\\v1.2\\logs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "directory");
    assert_eq!(json["name"], "logs");
    assert_eq!(json["full_path"], "$DATA/v1.2/logs");
}

#[test]
fn test_wildcards_lists_merged_registry() {
    let env = TestEnv::new();
    env.write_work(
        "vpath.yaml",
        "wildcards:\n  - token: $DATA\n    path: /project/data\ntie_break: first-match\n",
    );

    let output = env
        .command()
        .args(["--wildcard", "$LOGS=/var/log", "wildcards", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tie_break"], "first-match");
    assert_eq!(json["wildcards"][0]["token"], "$DATA");
    assert_eq!(json["wildcards"][1]["path"], "/var/log");
}

#[test]
fn test_wildcards_text() {
    let env = TestEnv::new();

    env.with_data()
        .arg("wildcards")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$DATA"));
}

#[test]
fn test_validate_valid_file() {
    let env = TestEnv::new();
    let path = env.write_work(
        "vpath.yaml",
        "wildcards:\n  - token: $DATA\n    path: /abs/data\n",
    );

    env.command()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_duplicate_tokens() {
    let env = TestEnv::new();
    let path = env.write_work(
        "other.yaml",
        "wildcards:\n  - token: $DATA\n    path: /a\n  - token: $DATA\n    path: /b\n",
    );

    env.command()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wildcards[1].token"));
}

#[test]
fn test_validate_parse_error() {
    let env = TestEnv::new();
    let path = env.write_work("broken.yaml", "wildcards: [unterminated\n");

    env.command()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();

    env.command()
        .args(["validate", "does-not-exist.yaml"])
        .assert()
        .code(4);
}
