//! Tests for `chainconf check`.

use crate::support::*;

#[test]
fn test_check_passes() {
    let t = Test::with_secrets();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "✓ compiler 0.8.24");
    assert_stdout_contains(&output, "✓ sepolia (11155111)");
    assert_stdout_contains(&output, "✓ artifacts");
    assert_no_secrets(&output);
}

#[test]
fn test_check_reports_failures_and_passes() {
    let t = Test::with_config();
    t.write_config(&SAMPLE_CONFIG.replace("testnet = [\"sepolia\"]", "both = [\"sepolia\", \"localhost\"]"));
    t.write_env(ENV_WITHOUT_PRIVATE_KEY);

    let output = t.cmd().args(["check", "--profile", "both"]).output().unwrap();
    assert_failure(&output);
    assert_stdout_contains(&output, "✗ [sepolia] missing secrets: PRIVATE_KEY");
    assert_stdout_contains(&output, "✓ localhost (31337)");
    assert_stderr_contains(&output, "check failed with 1 error");
}

#[test]
fn test_check_bad_chain_id() {
    let t = Test::new();
    t.write_config(&SAMPLE_CONFIG.replace("chain_id = 11155111", "chain_id = 0"));
    t.write_env(SAMPLE_ENV);

    let output = t.check();
    assert_failure(&output);
    assert_stdout_contains(&output, "chain id must be a positive integer");
}
