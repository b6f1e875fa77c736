//! CLI interaction tests covering argument parsing, validation and help output

use assert_cmd::Command;
use predicates::prelude::*;

fn dsampler() -> Command {
    Command::cargo_bin("dsampler").expect("binary should build")
}

#[test]
fn test_help_flag_works() {
    dsampler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--runs"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version_flag_works() {
    dsampler()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_conflicting_color_flags_rejected() {
    dsampler()
        .args(["--color", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to run the command:"))
        .stderr(predicate::str::contains(
            "Cannot specify both --color and --no-color",
        ));
}

#[test]
fn test_zero_runs_rejected() {
    dsampler()
        .args(["--runs", "0", "--", "echo", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to run the command:"))
        .stderr(predicate::str::contains("Run count must be greater than 0"));
}

#[test]
fn test_non_numeric_runs_rejected_by_clap() {
    dsampler()
        .args(["--runs", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_help_topic_config() {
    dsampler()
        .args(["--no-color", "--help-topic", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CONFIGURATION REFERENCE:"));
}

#[test]
fn test_help_topic_env() {
    dsampler()
        .args(["--no-color", "--help-topic", "env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ENVIRONMENT VARIABLES REFERENCE:"))
        .stdout(predicate::str::contains("SAMPLE_COMMAND"));
}

#[test]
fn test_help_topic_output_documents_contract() {
    dsampler()
        .args(["--no-color", "--help-topic", "output"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on <N> runs is: <MEAN>km",
        ))
        .stdout(predicate::str::contains("Failed to run the command:"));
}

#[test]
fn test_help_topic_unknown_falls_back_to_main_help() {
    dsampler()
        .args(["--no-color", "--help-topic", "nonsense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown help topic"))
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn test_help_topic_skips_sampling() {
    // A help topic run must not try to spawn anything, so a nonexistent
    // command is fine here.
    dsampler()
        .args(["--help-topic", "examples", "--", "./no/such/binary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXAMPLES:"));
}
