//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("read"));
    assert!(out.contains("requirements"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_read_requires_namespace() {
    let t = Test::new();

    let output = t.cmd().arg("read").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "NAMESPACE");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "buildcreds");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_buildcreds") || out.contains("complete"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let t = Test::with_requirements(SAMPLE_REQUIREMENTS);

    let output = t
        .cmd_with_creds()
        .args(["--verbose", "requirements", "agents"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert!(!stdout(&output).contains("DEBUG"));
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::with_requirements(SAMPLE_REQUIREMENTS);

    let output = t.requirements(Some("agents"));
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}
