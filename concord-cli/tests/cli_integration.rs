//! Integration tests for the concord CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_extract_text_output() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("fox.txt"))
        .arg("-t")
        .arg("fox")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("quick brown fox"))
        .stdout(predicate::str::contains("mentions the fox"));
}

#[test]
fn test_extract_zero_context() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("fox.txt"))
        .arg("-t")
        .arg("fox")
        .arg("-n")
        .arg("0")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0\tfox"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("fox.txt"))
        .arg("-t")
        .arg("fox")
        .arg("-f")
        .arg("json")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("["))
        .stdout(predicate::str::contains("\"match\""))
        .stdout(predicate::str::contains("\"match_idx\""))
        .stdout(predicate::str::contains("\"source_doc\""));
}

#[test]
fn test_markdown_output() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("fox.txt"))
        .arg("-t")
        .arg("fox")
        .arg("-f")
        .arg("markdown")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| path | text | source_doc | match | match_idx | context_idx |"))
        .stdout(predicate::str::contains("*Total matches: 2*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("fox.txt"))
        .arg("-t")
        .arg("fox")
        .arg("-o")
        .arg(&output_file)
        .arg("-q");

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("quick brown fox"));
}

#[test]
fn test_glob_pattern_over_corpus() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-t")
        .arg("the")
        .arg("-c")
        .arg("-q");

    // Matches come from both text fixtures, case-insensitively.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lazy dog"))
        .stdout(predicate::str::contains("watery part"));
}

#[test]
fn test_regex_terms() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("fox.txt"))
        .arg("-e")
        .arg("-t")
        .arg(r"qu\w+")
        .arg("-n")
        .arg("0")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0\tquick"));
}

#[test]
fn test_invalid_regex_term_fails() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("fox.txt"))
        .arg("-e")
        .arg("-t")
        .arg("(unclosed")
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn test_jsonl_input() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("rows.jsonl"))
        .arg("--jsonl")
        .arg("-t")
        .arg("fox")
        .arg("-f")
        .arg("json")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"))
        .stdout(predicate::str::contains("\"title\": \"fox\""))
        .stdout(predicate::str::contains("\"id\": 2").not());
}

#[test]
fn test_no_input_files_fails() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("extract")
        .arg("-i")
        .arg("/nonexistent/dir/*.txt")
        .arg("-t")
        .arg("fox")
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No input files matched"));
}

#[test]
fn test_parallel_matches_sequential() {
    let mut sequential = Command::cargo_bin("concord").unwrap();
    let sequential_out = sequential
        .arg("extract")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-t")
        .arg("the")
        .arg("-q")
        .output()
        .unwrap();

    let mut parallel = Command::cargo_bin("concord").unwrap();
    let parallel_out = parallel
        .arg("extract")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-t")
        .arg("the")
        .arg("--parallel")
        .arg("-q")
        .output()
        .unwrap();

    assert!(sequential_out.status.success());
    assert!(parallel_out.status.success());
    assert_eq!(sequential_out.stdout, parallel_out.stdout);
}

#[test]
fn test_list_granularities() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("list").arg("granularities");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("characters"))
        .stdout(predicate::str::contains("words"))
        .stdout(predicate::str::contains("lines"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("concord").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}
