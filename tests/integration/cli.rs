//! The `vitrine --list` non-interactive mode.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::common::fixtures::{write_json_catalog, write_toml_catalog};

fn vitrine(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vitrine").expect("binary builds");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_list_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = write_toml_catalog(&dir);

    vitrine(&dir)
        .arg(&catalog)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. [nature] Misty Forest  forest.jpg"))
        .stdout(predicate::str::contains("  5. [city] Old Market  market.jpg"))
        .stdout(predicate::str::contains("Found").not());
}

#[test]
fn test_list_with_category_and_query() {
    let dir = TempDir::new().unwrap();
    let catalog = write_json_catalog(&dir);

    vitrine(&dir)
        .arg(&catalog)
        .args(["--list", "--category", "city", "--query", "RIVER"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 1 result for \"river\"\n"))
        .stdout(predicate::str::contains("  1. [city] Night Bridge  bridge.jpg"))
        .stdout(predicate::str::contains("Old Market").not());
}

#[test]
fn test_list_no_results() {
    let dir = TempDir::new().unwrap();
    let catalog = write_toml_catalog(&dir);

    vitrine(&dir)
        .arg(&catalog)
        .args(["--list", "--query", "aurora"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No images match your search."));
}

#[test]
fn test_list_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    let catalog = write_toml_catalog(&dir);

    vitrine(&dir)
        .arg(&catalog)
        .args(["--list", "--category", "space"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: space"));
}

#[test]
fn test_list_rejects_visual_filter() {
    let dir = TempDir::new().unwrap();
    let catalog = write_toml_catalog(&dir);

    vitrine(&dir)
        .arg(&catalog)
        .args(["--list", "--filter", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unsupported_catalog_format_fails() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.yaml");
    std::fs::write(&catalog, "items: []").unwrap();

    vitrine(&dir)
        .arg(&catalog)
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported catalog format"));
}

#[test]
fn test_logs_go_to_data_dir() {
    let dir = TempDir::new().unwrap();
    let catalog = write_toml_catalog(&dir);

    vitrine(&dir).arg(&catalog).arg("--list").assert().success();
    assert!(dir.path().join("logs").join("vitrine.log").exists());
}
