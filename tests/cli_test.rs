//! CLI-level tests for the hsdscan binary.
//!
//! These exercise argument parsing and the fail-fast input validation,
//! which don't require a BLAST+ install.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_pipeline_flags() {
    Command::cargo_bin("hsdscan")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--threads"))
        .stdout(predicate::str::contains("--min_identity"))
        .stdout(predicate::str::contains("--min_coverage"));
}

#[test]
fn test_missing_positional_args_fail() {
    Command::cargo_bin("hsdscan").unwrap().assert().failure();
}

#[test]
fn test_missing_assembly_is_fatal() {
    Command::cargo_bin("hsdscan")
        .unwrap()
        .args(["no_such_assembly.fasta", "no_such_hsdM.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_out_of_range_threshold_is_a_clean_error() {
    Command::cargo_bin("hsdscan")
        .unwrap()
        .args([
            "no_such_assembly.fasta",
            "no_such_hsdM.txt",
            "--min_identity",
            "150",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
