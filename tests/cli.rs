// ABOUTME: Integration tests for the autocd CLI commands.
// ABOUTME: Validates --help output, init, render, and config errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn autocd_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("autocd"));
    cmd.env_remove("CI_REGISTRY")
        .env_remove("CI_PROJECT_NAME")
        .env_remove("CI_PROJECT_NAMESPACE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_shows_commands() {
    autocd_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("autocd.yml");

    autocd_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "autocd.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("container_port:"));
    assert!(content.contains("publicly_accessible: true"));
}

#[test]
fn init_private_disables_ingress() {
    let temp_dir = tempfile::tempdir().unwrap();

    autocd_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--private"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("autocd.yml")).unwrap();
    assert!(content.contains("publicly_accessible: false"));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("autocd.yml");

    fs::write(&config_path, "existing: config").unwrap();

    autocd_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn render_uses_local_defaults_outside_ci() {
    let temp_dir = tempfile::tempdir().unwrap();

    autocd_cmd()
        .current_dir(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: Namespace"))
        .stdout(predicate::str::contains("name: local-default"))
        .stdout(predicate::str::contains(
            "local-default-local-default-name-service",
        ))
        .stdout(predicate::str::contains("host: local-test.cloudiety.de"));
}

#[test]
fn render_follows_ci_variables_and_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("autocd.yml"),
        "publicly_accessible: false\ncontainer_port: 3000\n",
    )
    .unwrap();

    autocd_cmd()
        .current_dir(temp_dir.path())
        .env("CI_REGISTRY", "registry.example.com")
        .env("CI_PROJECT_NAME", "checkout")
        .env("CI_PROJECT_NAMESPACE", "team-x")
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "image: registry.example.com/team-x/checkout",
        ))
        .stdout(predicate::str::contains("containerPort: 3000"))
        .stdout(predicate::str::contains("kind: Ingress").not());
}

#[test]
fn missing_explicit_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    autocd_cmd()
        .current_dir(temp_dir.path())
        .args(["deploy", "--config", "missing.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn invalid_config_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("autocd.yml"), "service_port: 0\n").unwrap();

    autocd_cmd()
        .current_dir(temp_dir.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("port must be between 1 and 65535"));
}
