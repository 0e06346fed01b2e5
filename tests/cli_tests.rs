//! Binary-level tests driving the `qk` CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn qk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qk").expect("binary builds");
    cmd.arg("--data-file")
        .arg(dir.path().join("quotes.json"));
    cmd
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["add", "Stay hungry.", "-c", "Motivation", "--local-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote added successfully!"));

    qk(&dir)
        .args(["list", "-o", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stay hungry."));
}

#[test]
fn test_add_empty_text_is_rejected() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["add", "", "-c", "Motivation", "--local-only"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("fill out both fields"));

    // Nothing was persisted
    qk(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes found."));
}

#[test]
fn test_add_empty_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["add", "Some text", "-c", "", "--local-only"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_whitespace_only_text_is_accepted() {
    // The validation checks for the exact empty string, no trimming.
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["add", "   ", "-c", "Oddities", "--local-only"])
        .assert()
        .success();
}

#[test]
fn test_random_on_empty_store() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["random"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No quotes available. Please add some!",
        ));
}

#[test]
fn test_list_filters_by_category() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["add", "funny one", "-c", "Humor", "--local-only"])
        .assert()
        .success();
    qk(&dir)
        .args(["add", "serious one", "-c", "Wisdom", "--local-only"])
        .assert()
        .success();

    qk(&dir)
        .args(["list", "-c", "Humor", "-o", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("funny one"))
        .stdout(predicate::str::contains("serious one").not());
}

#[test]
fn test_categories_lists_sentinel_first() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["add", "a", "-c", "Humor", "--local-only"])
        .assert()
        .success();

    qk(&dir)
        .args(["categories", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""all""#))
        .stdout(predicate::str::contains(r#""Humor""#));
}

#[test]
fn test_export_then_import_round_trip() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args(["add", "roundtrip", "-c", "Test", "--local-only"])
        .assert()
        .success();

    let export_path = dir.path().join("backup.json");
    qk(&dir)
        .args(["export", "--out"])
        .arg(&export_path)
        .assert()
        .success();

    let fresh = TempDir::new().unwrap();
    qk(&fresh)
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quotes imported successfully!"));

    qk(&fresh)
        .args(["list", "-o", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("roundtrip"));
}

#[test]
fn test_import_malformed_file_fails_without_mutation() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{definitely not an array").unwrap();

    qk(&dir)
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse quotes"));

    qk(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes found."));
}

#[test]
fn test_sync_against_unreachable_endpoint_completes() {
    let dir = TempDir::new().unwrap();

    qk(&dir)
        .args([
            "sync",
            "--resolve",
            "keep-local",
            "--endpoint",
            "http://127.0.0.1:9/posts",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quotes synced with server!"));
}
