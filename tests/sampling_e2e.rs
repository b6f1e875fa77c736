//! End-to-end sampling tests against fake solver scripts
//!
//! These tests exercise the full binary: spawning the sampled command,
//! parsing its output, aborting on failure, and printing the report line.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn dsampler() -> Command {
    Command::cargo_bin("dsampler").expect("binary should build")
}

/// Write an executable shell script into `dir` and return its path.
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn test_constant_output_reports_exact_average() {
    let dir = TempDir::new().unwrap();

    dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "100", "--", "sh", "-c", "echo 10 km"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 100 runs is: 10.0km",
        ));
}

#[test]
fn test_alternating_output_averages_across_runs() {
    let dir = TempDir::new().unwrap();
    let counter = dir.path().join("counter");
    fs::write(&counter, "0").unwrap();

    // Even runs print 10, odd runs print 20, so the average is 15.
    let script = write_script(
        dir.path(),
        "alternating.sh",
        &format!(
            r#"n=$(cat "{counter}")
n=$((n + 1))
printf '%s' "$n" > "{counter}"
if [ $((n % 2)) -eq 0 ]; then echo "10 km"; else echo "20 km"; fi"#,
            counter = counter.display()
        ),
    );

    dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "10"])
        .arg("--")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 10 runs is: 15.0km",
        ));
}

#[test]
fn test_fractional_average_printed_without_trailing_zeros() {
    let dir = TempDir::new().unwrap();
    let counter = dir.path().join("counter");
    fs::write(&counter, "0").unwrap();

    // 15 then 16 over two runs gives 15.5.
    let script = write_script(
        dir.path(),
        "fractional.sh",
        &format!(
            r#"n=$(cat "{counter}")
n=$((n + 1))
printf '%s' "$n" > "{counter}"
if [ "$n" -eq 1 ]; then echo "15"; else echo "16"; fi"#,
            counter = counter.display()
        ),
    );

    dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "2"])
        .arg("--")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 2 runs is: 15.5km",
        ));
}

#[test]
fn test_failure_aborts_remaining_runs() {
    let dir = TempDir::new().unwrap();
    let counter = dir.path().join("counter");
    fs::write(&counter, "0").unwrap();

    // Fails on the 37th invocation; the counter file proves no further
    // runs were attempted.
    let script = write_script(
        dir.path(),
        "fails_at_37.sh",
        &format!(
            r#"n=$(cat "{counter}")
n=$((n + 1))
printf '%s' "$n" > "{counter}"
if [ "$n" -ge 37 ]; then echo "solver blew up" >&2; exit 7; fi
echo "10 km""#,
            counter = counter.display()
        ),
    );

    dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "100"])
        .arg("--")
        .arg(&script)
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("average distance").not())
        .stderr(predicate::str::contains("Failed to run the command:"))
        .stderr(predicate::str::contains("run 37"))
        .stderr(predicate::str::contains("solver blew up"));

    assert_eq!(fs::read_to_string(&counter).unwrap(), "37");
}

#[test]
fn test_spawn_failure_reports_and_exits() {
    let dir = TempDir::new().unwrap();

    dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "5", "--", "./no/such/solver"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to run the command:"))
        .stderr(predicate::str::contains("Failed to start command"));
}

#[test]
fn test_unparseable_output_reports_and_exits() {
    let dir = TempDir::new().unwrap();

    dsampler()
        .current_dir(dir.path())
        .args([
            "--no-color",
            "--runs",
            "5",
            "--",
            "sh",
            "-c",
            "echo hello world",
        ])
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::contains("average distance").not())
        .stderr(predicate::str::contains("Failed to run the command:"));
}

#[test]
fn test_empty_output_reports_and_exits() {
    let dir = TempDir::new().unwrap();

    dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "3", "--", "true"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to run the command:"));
}

#[test]
fn test_negative_distances_are_accepted() {
    let dir = TempDir::new().unwrap();

    dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "4", "--", "sh", "-c", "echo -5 km"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 4 runs is: -5.0km",
        ));
}

#[test]
fn test_only_first_token_is_parsed() {
    let dir = TempDir::new().unwrap();

    dsampler()
        .current_dir(dir.path())
        .args([
            "--no-color",
            "--runs",
            "2",
            "--",
            "sh",
            "-c",
            "echo '42 km travelled in 3 hops'",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 2 runs is: 42.0km",
        ));
}

#[test]
fn test_report_line_format_is_stable() {
    let dir = TempDir::new().unwrap();

    let output = dsampler()
        .current_dir(dir.path())
        .args(["--no-color", "--runs", "3", "--", "sh", "-c", "echo 7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let re = regex::Regex::new(r"^average distance on \d+ runs is: -?\d+(\.\d+)?km$").unwrap();
    let report_line = stdout
        .lines()
        .find(|l| l.starts_with("average distance"))
        .expect("report line present");
    assert!(re.is_match(report_line), "unexpected line: {}", report_line);
}

#[test]
fn test_verbose_mode_shows_per_run_progress_and_statistics() {
    let dir = TempDir::new().unwrap();

    dsampler()
        .current_dir(dir.path())
        .args([
            "--no-color",
            "--verbose",
            "--runs",
            "2",
            "--",
            "sh",
            "-c",
            "echo 12 km",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed run 1/2"))
        .stdout(predicate::str::contains("Completed run 2/2"))
        .stdout(predicate::str::contains(
            "average distance on 2 runs is: 12.0km",
        ));
}

#[test]
fn test_command_from_environment() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "env_solver.sh", "echo 30 km");

    dsampler()
        .current_dir(dir.path())
        .env("SAMPLE_COMMAND", script.display().to_string())
        .env("SAMPLE_RUNS", "5")
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 5 runs is: 30.0km",
        ));
}

#[test]
fn test_cli_runs_override_environment() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "env_solver.sh", "echo 30 km");

    dsampler()
        .current_dir(dir.path())
        .env("SAMPLE_COMMAND", script.display().to_string())
        .env("SAMPLE_RUNS", "5")
        .args(["--no-color", "--runs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 2 runs is: 30.0km",
        ));
}

#[test]
fn test_cli_runs_matching_default_still_override_environment() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "env_solver.sh", "echo 30 km");

    // --runs 100 matches the built-in default but is still explicit
    dsampler()
        .current_dir(dir.path())
        .env("SAMPLE_COMMAND", script.display().to_string())
        .env("SAMPLE_RUNS", "8")
        .args(["--no-color", "--runs", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 100 runs is: 30.0km",
        ));
}

#[test]
fn test_env_file_supplies_configuration() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "dotenv_solver.sh", "echo 8");

    fs::write(
        dir.path().join(".env"),
        format!("SAMPLE_COMMAND={}\nSAMPLE_RUNS=4\n", script.display()),
    )
    .unwrap();

    dsampler()
        .current_dir(dir.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "average distance on 4 runs is: 8.0km",
        ));
}

#[test]
fn test_debug_reports_invalid_env_file_entries() {
    let dir = TempDir::new().unwrap();
    let script = write_script(dir.path(), "dotenv_solver.sh", "echo 8");

    fs::write(dir.path().join(".env"), "SAMPLE_RUNS=0\n").unwrap();

    // The bad .env value is reported, then overridden by --runs
    dsampler()
        .current_dir(dir.path())
        .args([
            "--no-color",
            "--debug",
            "--runs",
            "2",
            "--",
            script.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning in .env file"))
        .stderr(predicate::str::contains("SAMPLE_RUNS must be greater than 0"))
        .stdout(predicate::str::contains(
            "average distance on 2 runs is: 8.0km",
        ));
}

#[test]
fn test_colored_run_keeps_report_line_plain() {
    let dir = TempDir::new().unwrap();

    let output = dsampler()
        .current_dir(dir.path())
        .args(["--color", "--runs", "2", "--", "sh", "-c", "echo 9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let report_line = stdout
        .lines()
        .find(|l| l.contains("average distance"))
        .expect("report line present");

    // Even with colors forced on, the report line carries no escape codes.
    assert!(!report_line.contains('\u{1b}'));
    assert_eq!(report_line, "average distance on 2 runs is: 9.0km");
}
