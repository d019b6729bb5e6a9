use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_config(root: &Path) -> PathBuf {
    let cfg = root.join("config.toml");
    fs::write(
        &cfg,
        format!(
            r#"
version = 1
[profiles.default]
vault_root = "{}"
"#,
            root.display()
        ),
    )
    .unwrap();
    cfg
}

#[test]
fn show_prints_the_section_body() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());
    fs::write(
        tmp.path().join("2025-01-02.md"),
        "# Day\n## Prompts\n**Q**\nA\n\n### nested\nstill mine\n## Log\nnot mine\n",
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dprompt"));
    cmd.arg("--config").arg(&cfg).args(["show", "--date", "2025-01-02"]);
    cmd.assert()
        .success()
        .stdout("**Q**\nA\n\n### nested\nstill mine\n");
}

#[test]
fn show_fails_without_note() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dprompt"));
    cmd.arg("--config").arg(&cfg).args(["show", "--date", "2025-01-02"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL dprompt show"))
        .stdout(predicate::str::contains("no daily note for 2025-01-02"));
}

#[test]
fn show_fails_when_section_missing() {
    let tmp = tempdir().unwrap();
    let cfg = write_config(tmp.path());
    fs::write(tmp.path().join("2025-01-02.md"), "# Day\nnothing here\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dprompt"));
    cmd.arg("--config").arg(&cfg).args(["show", "--date", "2025-01-02"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("section '## Prompts' not found"));
}
