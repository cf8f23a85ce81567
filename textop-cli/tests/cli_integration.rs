//! Integration tests for the textop CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn textop() -> Command {
    Command::cargo_bin("textop").unwrap()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_sort_ascending() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "b\na\nc");

    textop().arg("sort").arg(&file).assert().success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "a\nb\nc");
}

#[test]
fn test_sort_descending() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "b\na\nc");

    textop()
        .arg("sort")
        .arg(&file)
        .arg("--desc")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "c\nb\na");
}

#[test]
fn test_sort_already_sorted_reports_no_change() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "a\nb");

    textop()
        .arg("sort")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Didn't change anything."));

    assert_eq!(fs::read_to_string(&file).unwrap(), "a\nb");
}

#[test]
fn test_remove_duplicates_keeps_first_occurrence() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "b\na\nb\nc\na");

    textop().arg("remove-duplicates").arg(&file).assert().success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "b\na\nc");
}

#[test]
fn test_replace_regex() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "a1b22c");

    textop()
        .arg("replace")
        .arg(&file)
        .arg(r"\d+")
        .arg("#")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "a#b#c");
}

#[test]
fn test_replace_literal() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "a.c abc");

    textop()
        .arg("replace")
        .arg(&file)
        .arg("a.c")
        .arg("X")
        .arg("--literal")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "X abc");
}

#[test]
fn test_replace_invalid_regex_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "abc");

    textop()
        .arg("replace")
        .arg(&file)
        .arg("[unclosed")
        .arg("x")
        .assert()
        .failure();

    // The file must be left untouched on failure.
    assert_eq!(fs::read_to_string(&file).unwrap(), "abc");
}

#[test]
fn test_replace_line_counts_lines() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "a1\nbb\nc2");

    textop()
        .arg("replace-line")
        .arg(&file)
        .arg(r"\d")
        .arg("#")
        .assert()
        .success()
        .stderr(predicate::str::contains("Changed 2 line(s)."));

    assert_eq!(fs::read_to_string(&file).unwrap(), "a#\nbb\nc#");
}

#[test]
fn test_trim_both() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", ",a. b,\nc.");

    textop()
        .arg("trim")
        .arg(&file)
        .arg("both")
        .arg(",")
        .arg(".")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "a b\nc");
}

#[test]
fn test_remove_units() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "keep drop keep\ndrop");

    textop()
        .arg("remove-units")
        .arg(&file)
        .arg("drop")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "keep keep\n");
}

#[test]
fn test_extract_vocabulary() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "b a c\nc b a");
    let output = dir.path().join("vocab.txt");

    textop()
        .arg("extract-vocabulary")
        .arg(&file)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\nb\nc");
}

#[test]
fn test_extract_vocabulary_character_units() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "ab\nba");
    let output = dir.path().join("vocab.txt");

    textop()
        .arg("extract-vocabulary")
        .arg(&file)
        .arg("-o")
        .arg(&output)
        .arg("--sep")
        .arg("")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\nb");
}

#[test]
fn test_transcribe_drops_missing_units() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "test abc\nxyz abc");
    let dict = write_file(&dir, "dict.txt", "test T EST\nabc A BC");

    textop()
        .arg("transcribe")
        .arg(&file)
        .arg(&dict)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "T|EST| |A|BC\nA|BC");
}

#[test]
fn test_transcribe_ignore_missing_keeps_units() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "xyz abc");
    let dict = write_file(&dir, "dict.txt", "abc A BC");

    textop()
        .arg("transcribe")
        .arg(&file)
        .arg(&dict)
        .arg("--ignore-missing")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "xyz| |A|BC");
}

#[test]
fn test_transcribe_no_change_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "nothing matches");
    let dict = write_file(&dir, "dict.txt", "other O");

    textop()
        .arg("transcribe")
        .arg(&file)
        .arg(&dict)
        .arg("--ignore-missing")
        .arg("--psep")
        .arg("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Didn't change anything."));

    assert_eq!(fs::read_to_string(&file).unwrap(), "nothing matches");
}

#[test]
fn test_transcribe_with_weighted_dictionary() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "test");
    let dict = write_file(&dir, "dict.txt", "test 1.2 T EST");

    textop()
        .arg("transcribe")
        .arg(&file)
        .arg(&dict)
        .arg("--consider-weights")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "T|EST");
}

#[test]
fn test_unit_stats_csv() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "a b a\nb a");
    let output = dir.path().join("counts.csv");

    textop()
        .arg("unit-stats")
        .arg(&file)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "# Occurrences;Unit\n3;a\n2;b\n"
    );
}

#[test]
fn test_merge_files() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "a.txt", "one");
    let second = write_file(&dir, "b.txt", "two");
    let output = dir.path().join("merged.txt");

    textop()
        .arg("merge")
        .arg(&first)
        .arg(&second)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "one\ntwo");
}

#[test]
fn test_merge_reports_unreadable_input() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "a.txt", "one");
    let missing = dir.path().join("missing.txt");
    let output = dir.path().join("merged.txt");

    textop()
        .arg("merge")
        .arg(&first)
        .arg(&missing)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure();

    // The readable part is still merged and written.
    assert_eq!(fs::read_to_string(&output).unwrap(), "one");
}

#[test]
fn test_missing_input_file_fails() {
    textop()
        .arg("sort")
        .arg("/nonexistent/in.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not everything was successful"));
}

#[test]
fn test_custom_separators() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "in.txt", "b,a;c,b");
    let output = dir.path().join("vocab.txt");

    textop()
        .arg("extract-vocabulary")
        .arg(&file)
        .arg("-o")
        .arg(&output)
        .arg("--lsep")
        .arg(";")
        .arg("--sep")
        .arg(",")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a\nb\nc");
}
