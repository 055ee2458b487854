//! End-to-end CLI tests for the pubclass binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary command isolated from the user's config directory and log settings.
fn pubclass(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pubclass").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("pubclass");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize and categorize"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pubclass"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_normalize_scholar_stdin_prints_json() {
    let home = TempDir::new().unwrap();
    let input = r#"[
      {"bib": {"title": "Paper A", "citation": "NeurIPS 2022", "pub_year": "2022"}, "num_citations": 5},
      {"bib": {"title": "Paper B", "journal": "Nature"}, "pub_url": "https://nature.com/b"}
    ]"#;

    let output = pubclass(&home)
        .arg("normalize")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["metrics"], serde_json::json!({}));
    let records = &document["publications"];
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert_eq!(records[0]["category"], "Conference");
    assert_eq!(records[0]["citedBy"], 5);
    assert_eq!(records[1]["category"], "Journal");
    assert_eq!(records[1]["link"], "https://nature.com/b");
}

#[test]
fn test_normalize_bibtex_file_pretty() {
    let home = TempDir::new().unwrap();
    let bib = home.path().join("refs.bib");
    fs::write(
        &bib,
        "@incollection{k1, title = {Graphs}, booktitle = {Handbook of Graphs}, year = 2019}\n",
    )
    .unwrap();

    pubclass(&home)
        .arg("normalize")
        .arg(&bib)
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"Book Chapter\""))
        .stdout(predicate::str::contains("\"publications\": ["))
        .stdout(predicate::str::contains("\"metrics\": {}"));
}

#[test]
fn test_normalize_keeps_profile_metrics() {
    let home = TempDir::new().unwrap();
    let input = r#"{
      "metrics": {"citations": 10, "hindex": 2, "i10": 1, "lastUpdated": "2024-01-01"},
      "publications": [{"title": "A", "venue": "CVPR"}]
    }"#;

    let output = pubclass(&home)
        .arg("normalize")
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        document["metrics"],
        serde_json::json!({"citations": 10, "hindex": 2, "i10": 1, "lastUpdated": "2024-01-01"})
    );
    assert_eq!(document["publications"][0]["category"], "Conference");
}

#[test]
fn test_normalize_skipped_items_warn_on_stderr() {
    let home = TempDir::new().unwrap();
    let input = r#"[{"bib": {"title": "Ok"}}, 42]"#;

    pubclass(&home)
        .arg("normalize")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"Ok\""))
        .stderr(predicate::str::contains("Skipped publication"));
}

#[test]
fn test_normalize_whole_source_failure_exits_nonzero() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .arg("normalize")
        .write_stdin("{\"publications\": 3}")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read publications"));
}

#[test]
fn test_normalize_empty_stdin_prints_empty_document() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .arg("normalize")
        .write_stdin("")
        .assert()
        .success()
        .stdout("{\"metrics\":{},\"publications\":[]}\n");
}

#[test]
fn test_normalize_missing_file_errors() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .args(["normalize", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_normalize_format_flag_forces_reader() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .args(["normalize", "--format", "bibtex"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("{\"metrics\":{},\"publications\":[]}\n");
}

#[test]
fn test_classify_prints_category_and_venue() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .args(["classify", "--venue", "Proceedings of  CHI 2020"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category = Conference"))
        .stdout(predicate::str::contains("venue = Proceedings of CHI 2020"))
        .stdout(predicate::str::contains("tier").not());
}

#[test]
fn test_classify_explain_prints_tier() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .args(["classify", "--journal", "Nature", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category = Journal"))
        .stdout(predicate::str::contains("tier = structured_field"));
}

#[test]
fn test_classify_without_fields_is_other() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .arg("classify")
        .assert()
        .success()
        .stdout(predicate::str::contains("category = Other"))
        .stdout(predicate::str::contains("venue = \n"));
}

#[test]
fn test_config_lexicon_extension_applies() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[lexicon]\nconference_acronyms = [\"ic\"]\n");

    pubclass(&home)
        .args(["classify", "--venue", "IC 2021"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category = Conference"));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let home = TempDir::new().unwrap();
    pubclass(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config_file = not found (using defaults)"))
        .stdout(predicate::str::contains("verbosity = default"))
        .stdout(predicate::str::contains("format = auto"))
        .stdout(predicate::str::contains("book_tokens = 2"));
}

#[test]
fn test_config_show_reports_file_values() {
    let home = TempDir::new().unwrap();
    write_config(&home, "verbosity = \"verbose\"\nformat = \"bibtex\"\n");

    pubclass(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config_file = loaded"))
        .stdout(predicate::str::contains("verbosity = verbose"))
        .stdout(predicate::str::contains("format = bibtex"));
}

#[test]
fn test_cli_quiet_overrides_config_verbosity() {
    let home = TempDir::new().unwrap();
    write_config(&home, "verbosity = \"debug\"\n");

    pubclass(&home)
        .args(["-q", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("verbosity = quiet"));
}

#[test]
fn test_invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    write_config(&home, "colour = \"blue\"\n");

    pubclass(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_explicit_config_flag_overrides_default_path() {
    let home = TempDir::new().unwrap();
    write_config(&home, "format = \"bibtex\"\n");
    let custom = home.path().join("custom.toml");
    fs::write(&custom, "format = \"scholar\"\n").unwrap();

    pubclass(&home)
        .args(["config", "show", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("format = scholar"))
        .stdout(predicate::str::contains("custom.toml"));
}
