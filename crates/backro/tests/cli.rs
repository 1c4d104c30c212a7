//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write a word-list file and return the tempfile handle.
fn word_list(words: &str) -> tempfile::NamedTempFile {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), words).unwrap();
    tmp
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["bundled_words"].as_u64().unwrap() > 0);
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Initialism Command
// =============================================================================

#[test]
fn initialism_drops_articles_by_default() {
    cmd()
        .args(["initialism", "the", "Quick", "brown", "Fox"])
        .assert()
        .success()
        .stdout(predicate::str::diff("QBF: Quick Brown Fox\n"));
}

#[test]
fn initialism_keep_articles() {
    cmd()
        .args(["initialism", "--keep-articles", "a", "b", "c"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ABC: A B C\n"));
}

#[test]
fn initialism_is_deterministic() {
    let run = || {
        let output = cmd()
            .args(["initialism", "central", "processing", "unit"])
            .assert()
            .success();
        String::from_utf8_lossy(&output.get_output().stdout).into_owned()
    };
    assert_eq!(run(), run());
}

#[test]
fn initialism_json_has_record_fields() {
    let output = cmd()
        .args(["--json", "initialism", "portable", "network", "graphics"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["prefix"], "PNG");
    assert_eq!(json["suffix"], "Portable Network Graphics");
    assert_eq!(json["original"], "portable network graphics");
    assert_eq!(json["formatted"], "PNG: Portable Network Graphics");
}

#[test]
fn initialism_articles_only_fails() {
    cmd()
        .args(["initialism", "the", "a", "an"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable words"));
}

// =============================================================================
// Acronym Command
// =============================================================================

#[test]
fn acronym_finds_word_from_custom_dictionary() {
    let dict = word_list("1\ncat/SM\n");
    cmd()
        .args([
            "acronym",
            "cool",
            "and",
            "tall",
            "--dictionary",
            dict.path().to_str().unwrap(),
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CAT: "));
}

#[test]
fn acronym_seed_makes_runs_reproducible() {
    let run = || {
        let output = cmd()
            .args(["acronym", "secure", "shell", "access", "--seed", "42"])
            .assert()
            .success();
        String::from_utf8_lossy(&output.get_output().stdout).into_owned()
    };
    assert_eq!(run(), run());
}

#[test]
fn acronym_json_outputs_record() {
    let dict = word_list("cat\n");
    let output = cmd()
        .args([
            "--json",
            "acronym",
            "cool",
            "and",
            "tall",
            "--dictionary",
            dict.path().to_str().unwrap(),
            "--seed",
            "1",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["prefix"], "CAT");
    assert_eq!(json["original"], "cool and tall");
}

#[test]
fn acronym_unreachable_dictionary_times_out_cleanly() {
    let dict = word_list("zzz\n");
    // "no result" is an expected outcome: exit 0 with a notice naming the budget
    cmd()
        .args([
            "acronym",
            "cool",
            "and",
            "tall",
            "--dictionary",
            dict.path().to_str().unwrap(),
            "--timeout",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no acronym found within 1s"));
}

#[test]
fn acronym_length_longer_than_input_fails() {
    cmd()
        .args(["acronym", "tiny", "--length", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn acronym_missing_dictionary_fails() {
    cmd()
        .args([
            "acronym",
            "cool",
            "and",
            "tall",
            "--dictionary",
            "/nonexistent/words.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dictionary"));
}

#[test]
fn acronym_bad_bow_proportion_fails() {
    cmd()
        .args([
            "acronym",
            "one",
            "two",
            "three",
            "--bag-of-words",
            "--bow-proportion",
            "1.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bow-proportion"));
}

#[test]
fn acronym_requires_words() {
    cmd().arg("acronym").assert().failure();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Config & Chdir
// =============================================================================

#[test]
fn config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join(".backro.toml");
    std::fs::write(&config_path, "acronym_length = 4\n").unwrap();

    let output = cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--json",
            "info",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["config"]["acronym_length"], 4);
}

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
