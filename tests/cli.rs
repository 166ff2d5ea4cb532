//! Integration tests for the `sfx` command-line front end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

static FIXTURE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get or create the test fixture directory (singleton)
fn fixture_dir() -> &'static Path {
    FIXTURE_DIR.get_or_init(create_fixture_dir)
}

fn create_fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("sfx_test_fixtures")
        .join(format!("test_{}", std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");

    fs::write(dir.join("banana.txt"), "banana").unwrap();
    fs::write(dir.join("mississippi.txt"), "mississippi").unwrap();
    fs::write(dir.join("dollar.txt"), "a$b").unwrap();
    fs::write(dir.join("empty.txt"), "").unwrap();

    // Isolated config dir so the user's config never leaks in
    fs::create_dir_all(dir.join("config")).unwrap();

    dir
}

/// Run sfx with given args
fn run_sfx(args: &[&str]) -> (String, String, bool) {
    let dir = fixture_dir();
    let output = Command::new(env!("CARGO_BIN_EXE_sfx"))
        .args(args)
        .arg("--color=never")
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .output()
        .expect("Failed to run sfx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_suffixes_inline() {
    let (out, err, ok) = run_sfx(&["suffixes", "-T", "$", "--text", "banana"]);
    assert!(ok, "stderr: {}", err);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["$", "a$", "ana$", "anana$", "banana$", "na$", "nana$"]);
}

#[test]
fn test_lengths_file() {
    let (out, err, ok) = run_sfx(&["lengths", "-T", "$", "banana.txt"]);
    assert!(ok, "stderr: {}", err);

    let lengths: Vec<usize> = out.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(lengths, vec![1, 2, 4, 6, 7, 3, 5]);
}

#[test]
fn test_bwt_file() {
    let (out, err, ok) = run_sfx(&["bwt", "-T", "$", "mississippi.txt"]);
    assert!(ok, "stderr: {}", err);
    assert_eq!(out.trim_end(), "ipssm$pissii");
}

#[test]
fn test_no_terminator_by_default() {
    let (out, _, ok) = run_sfx(&["suffixes", "--text", "aa"]);
    assert!(ok);
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["aa"]);

    let (out, _, ok) = run_sfx(&["bwt", "--text", "aa"]);
    assert!(ok);
    assert_eq!(out.trim_end(), "a");
}

#[test]
fn test_ignore_case() {
    let (out, _, ok) = run_sfx(&["bwt", "-i", "-T", "$", "--text", "BaNaNa"]);
    assert!(ok);
    assert_eq!(out.trim_end(), "annb$aa");
}

#[test]
fn test_multiple_inputs_get_headings() {
    let (out, err, ok) = run_sfx(&["bwt", "-T", "$", "banana.txt", "mississippi.txt"]);
    assert!(ok, "stderr: {}", err);

    let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(
        lines,
        vec!["banana.txt", "annb$aa", "mississippi.txt", "ipssm$pissii"]
    );
}

#[test]
fn test_terminator_collision_fails() {
    let (out, err, ok) = run_sfx(&["suffixes", "-T", "$", "dollar.txt", "banana.txt"]);
    assert!(!ok);
    assert!(err.contains("sfx: dollar.txt"), "stderr: {}", err);
    assert!(err.contains("offset 1"), "stderr: {}", err);
    // The good input is still reported
    assert!(out.contains("banana$"));
}

#[test]
fn test_json_stats() {
    let (out, err, ok) = run_sfx(&["stats", "--json", "-T", "$", "banana.txt"]);
    assert!(ok, "stderr: {}", err);

    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["input"], "banana.txt");
    assert_eq!(value["stats"]["leaves"], 7);
    assert_eq!(value["stats"]["internal_nodes"], 3);
}

#[test]
fn test_check() {
    let (out, err, ok) = run_sfx(&["check", "mississippi.txt"]);
    assert!(ok, "stderr: {}", err);
    assert!(out.starts_with("ok"));
}

#[test]
fn test_edges() {
    let (out, _, ok) = run_sfx(&["edges", "--text", "a"]);
    assert!(ok);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("[0, 0] a"));
}

#[test]
fn test_empty_file() {
    let (out, err, ok) = run_sfx(&["suffixes", "empty.txt"]);
    assert!(ok, "stderr: {}", err);
    assert!(out.is_empty());
}

#[test]
fn test_missing_input() {
    let (_, err, ok) = run_sfx(&["bwt"]);
    assert!(!ok);
    assert!(err.contains("No input"));
}
