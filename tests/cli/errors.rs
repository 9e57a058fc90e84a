//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_config_suggests_init() {
    let t = Test::new();

    let output = t.resolve();
    assert_failure(&output);
    assert_stderr_contains(&output, "config not found");
    assert_stderr_contains(&output, "run: chainconf init");
}

#[test]
fn test_malformed_config() {
    let t = Test::new();
    t.write_config("this is not valid toml { [ }");

    let output = t.resolve();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_unknown_profile() {
    let t = Test::with_secrets();

    let output = t
        .cmd()
        .args(["resolve", "--profile", "staging"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown profile: staging");
    assert_stderr_contains(&output, "run: chainconf networks");
}

#[test]
fn test_profile_with_unknown_network() {
    let t = Test::new();
    t.write_config(&SAMPLE_CONFIG.replace("local = [\"localhost\"]", "local = [\"ghost\"]"));

    let output = t.resolve();
    assert_failure(&output);
    assert_stderr_contains(&output, "references unknown network 'ghost'");
}

#[test]
fn test_config_from_env_var() {
    let t = Test::new();
    std::fs::write(t.path("deploy.toml"), SAMPLE_CONFIG).unwrap();
    t.write_env(SAMPLE_ENV);

    let output = t
        .cmd()
        .env("CHAINCONF_CONFIG", "deploy.toml")
        .arg("resolve")
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "chainconf");
}
