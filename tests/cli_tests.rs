use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

fn harness_cmd() -> Command {
    Command::cargo_bin("hello-world").unwrap()
}

#[test]
fn passes_with_no_arguments() {
    harness_cmd()
        .assert()
        .success()
        .stdout(
            "Running tests...\n\
             ✓ greet returns correct string\n\
             ✓ greet is stable across calls\n\
             ✓ greet has no surrounding whitespace\n\
             ✓ greet is 13 characters\n\
             All tests passed!\n",
        );
}

#[test]
fn verbose_keeps_stdout_unchanged() {
    harness_cmd()
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("All tests passed!\n"))
        .stderr(predicate::str::contains("checks passed"));
}

#[test]
fn quiet_run_writes_nothing_to_stderr() {
    harness_cmd()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn repeated_runs_are_identical() -> Result<()> {
    let first = harness_cmd().output()?;
    let second = harness_cmd().output()?;

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
    Ok(())
}

#[test]
fn rejects_unknown_arguments() {
    harness_cmd()
        .arg("--greeting")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
