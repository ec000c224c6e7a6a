use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn setup() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("rules");
    let project = temp.path().join("project");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&project).unwrap();

    write(&source, "general.md", "# General\n\nBe consistent.\n");

    let manifest = temp.path().join("rules.toml");
    fs::write(
        &manifest,
        format!(
            r#"
[source]
dir = "{}"

[[projects]]
path = "{}"
formats = ["claude"]
"#,
            source.display(),
            project.display()
        ),
    )
    .unwrap();

    (temp, manifest)
}

#[test]
fn sync_writes_and_exits_zero() {
    let (temp, manifest) = setup();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Synchronization complete"));

    assert!(temp.path().join("project/CLAUDE.md").exists());
}

#[test]
fn sync_dry_run_writes_nothing() {
    let (temp, manifest) = setup();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "sync", "--dry-run"])
        .assert()
        .success();

    assert!(!temp.path().join("project/CLAUDE.md").exists());
}

#[test]
fn check_fails_before_first_sync() {
    let (_temp, manifest) = setup();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("DRIFT"));
}

#[test]
fn check_passes_after_sync() {
    let (_temp, manifest) = setup();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "sync"])
        .assert()
        .success();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn check_json_emits_machine_readable_report() {
    let (_temp, manifest) = setup();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "sync"])
        .assert()
        .success();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "check", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"synced\": true"));
}

#[test]
fn list_shows_selected_rules() {
    let (_temp, manifest) = setup();

    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", manifest.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("general.md"));
}

#[test]
fn missing_config_exits_nonzero() {
    Command::cargo_bin("rules")
        .unwrap()
        .args(["--config", "/nonexistent/rules.toml", "sync"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
