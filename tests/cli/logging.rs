//! Logging and verbosity tests.

use crate::support::*;

#[test]
fn test_default_no_debug_output() {
    let t = Test::with_secrets();

    let output = t.resolve();
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::with_secrets();

    let output = t.cmd().args(["--verbose", "resolve"]).output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_stderr_contains(&output, "resolving secrets");
    assert_no_secrets(&output);
}

#[test]
fn test_log_env_var() {
    let t = Test::with_secrets();

    let output = t
        .cmd()
        .env("CHAINCONF_LOG", "chainconf=debug")
        .arg("check")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "network built");
    assert_no_secrets(&output);
}
