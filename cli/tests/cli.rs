//! End-to-end checks of the datastage binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_health_subcommand() {
    Command::cargo_bin("datastage")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("health"));
}

#[test]
fn version_prints_the_crate_version() {
    Command::cargo_bin("datastage")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn health_against_a_dead_backend_fails() {
    // Port 9 (discard) refuses the connection immediately
    Command::cargo_bin("datastage")
        .unwrap()
        .args(["--backend-url", "http://127.0.0.1:9", "health"])
        .assert()
        .failure();
}

#[test]
fn missing_configuration_is_reported() {
    Command::cargo_bin("datastage")
        .unwrap()
        .env_remove("DATASTAGE_BACKEND_URL")
        .args(["--config", "/nonexistent/datastage.json", "health"])
        .assert()
        .failure();
}
