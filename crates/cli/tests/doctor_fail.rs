use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dprompt"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL dprompt doctor"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_rejects_heading_that_is_not_a_heading() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1
[profiles.default]
vault_root = "/tmp/v"

[prompt]
heading = "Prompts"
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dprompt"));
    cmd.args(["--config", cfg.to_str().unwrap(), "doctor"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL dprompt doctor"))
        .stdout(predicate::str::contains("Prompts"));
}

#[test]
fn doctor_fails_on_unknown_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1
[profiles.default]
vault_root = "/tmp/v"
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dprompt"));
    cmd.args(["--config", cfg.to_str().unwrap(), "--profile", "nope", "doctor"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL dprompt doctor"))
        .stdout(predicate::str::contains("nope"));
}
