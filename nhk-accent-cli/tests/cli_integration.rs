//! Integration tests for the nhk-accent CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

/// A data directory holding a copy of the fixture dictionary
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(
        fixture_path("ACCDB_unicode.csv"),
        dir.path().join("ACCDB_unicode.csv"),
    )
    .unwrap();
    dir
}

/// `nhk-accent <subcommand> --data-dir <dir>`
fn nhk_accent(subcommand: &str, dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nhk-accent").unwrap();
    cmd.env_remove("NHK_ACCENT_CONFIG")
        .env_remove("NHK_ACCENT_DATA_DIR")
        .arg(subcommand)
        .arg("--data-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn test_lookup_text_uses_inline_styles() {
    let dir = data_dir();
    nhk_accent("lookup", &dir)
        .args(["雨"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<span style='color:#cc3333;text-decoration:overline'>ア</span>",
        ))
        .stdout(predicate::str::contains("class=").not());
}

#[test]
fn test_lookup_with_config_file() {
    let dir = data_dir();
    nhk_accent("lookup", &dir)
        .args(["雨", "--config"])
        .arg(fixture_path("plain.toml"))
        .assert()
        .success()
        .stdout("<span class='pitch-high'>あ</span><span class='pitch-fall'>め</span>\n");
}

#[test]
fn test_lookup_json() {
    let dir = data_dir();
    let output = nhk_accent("lookup", &dir)
        .args(["食べる/飲む", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed[0]["entries"].as_array().unwrap();
    let keys: Vec<&str> = entries.iter().map(|e| e["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["食べる", "飲む"]);
}

#[test]
fn test_lookup_view_lists_candidates() {
    let dir = data_dir();
    nhk_accent("lookup", &dir)
        .args(["アメ", "--view"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("アメ:<br/>\n"));
}

#[test]
fn test_lookup_miss_is_not_an_error() {
    let dir = data_dir();
    nhk_accent("lookup", &dir)
        .args(["晴れ"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No pronunciation found"));
}

#[test]
fn test_missing_database_fails() {
    let dir = TempDir::new().unwrap();
    nhk_accent("lookup", &dir)
        .args(["雨"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not locate the source dictionary"));
}

#[test]
fn test_build_creates_derivatives() {
    let dir = data_dir();
    nhk_accent("build", &dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Compiled 9 records"));

    let derivative = fs::read_to_string(dir.path().join("nhk_pronunciation.csv")).unwrap();
    assert!(derivative.contains("学校\tガッコウ\t0\t3\t-"));
    assert!(dir.path().join("nhk_pronunciation.bin").exists());
}

#[test]
fn test_annotate_to_stdout() {
    let dir = data_dir();
    nhk_accent("annotate", &dir)
        .args(["--quiet", "-i"])
        .arg(fixture_path("words.tsv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("雨\tあめ\t<span"))
        .stdout(predicate::str::contains("晴れ\tはれ\t\n"))
        .stdout(predicate::str::contains("箸\tはし\t<b>kept</b>"));
}

#[test]
fn test_annotate_in_place_with_glob() {
    let dir = data_dir();
    let lists = TempDir::new().unwrap();
    fs::copy(fixture_path("words.tsv"), lists.path().join("a.tsv")).unwrap();
    fs::write(lists.path().join("b.tsv"), "箸\tはし\t<b>old</b>\n").unwrap();

    nhk_accent("annotate", &dir)
        .args(["--in-place", "--regenerate", "-i"])
        .arg(format!("{}/*.tsv", lists.path().display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Added"));

    let a = fs::read_to_string(lists.path().join("a.tsv")).unwrap();
    assert_eq!(a.lines().count(), 6);
    assert!(a.lines().next().unwrap().starts_with("雨\tあめ\t<span"));
    let b = fs::read_to_string(lists.path().join("b.tsv")).unwrap();
    assert!(!b.contains("<b>old</b>"));
}

#[test]
fn test_annotate_without_matches_fails() {
    let dir = data_dir();
    nhk_accent("annotate", &dir)
        .args(["-i"])
        .arg(format!("{}/*.tsv", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_generate_config_to_stdout() {
    Command::cargo_bin("nhk-accent")
        .unwrap()
        .arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[lookup]"))
        .stdout(predicate::str::contains("[segmenter]"));
}

#[test]
fn test_help() {
    Command::cargo_bin("nhk-accent")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("annotate"));
}
