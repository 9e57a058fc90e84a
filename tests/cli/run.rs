//! Tests for `chainconf run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_configuration() {
    let t = Test::with_secrets();

    let output = t
        .cmd()
        .args([
            "run",
            "--",
            "sh",
            "-c",
            "printf '%s|%s|%s|%s' \"$CHAINCONF_COMPILER_VERSION\" \"$CHAINCONF_NETWORKS\" \"$CHAINCONF_SEPOLIA_CHAIN_ID\" \"$CHAINCONF_SEPOLIA_URL\"",
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        format!("0.8.24|sepolia|11155111|{}", ALCHEMY_URL)
    );
}

#[cfg(unix)]
#[test]
fn test_run_injects_accounts_and_artifacts() {
    let t = Test::with_secrets();

    let output = t
        .cmd()
        .args([
            "run",
            "--",
            "sh",
            "-c",
            "printf '%s\\n%s' \"$CHAINCONF_SEPOLIA_ACCOUNTS\" \"$CHAINCONF_ARTIFACTS\"",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let out = stdout(&output);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some(PRIVATE_KEY));
    assert!(lines.next().unwrap().ends_with("client/app/artifacts"));
}

#[cfg(unix)]
#[test]
fn test_run_propagates_exit_code() {
    let t = Test::with_secrets();

    let output = t.cmd().args(["run", "--", "sh", "-c", "exit 3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_run_does_not_start_on_failure() {
    let t = Test::with_config();
    t.write_env(ENV_WITHOUT_PRIVATE_KEY);
    let marker = t.path("ran");

    let output = t
        .cmd()
        .args(["run", "--", "touch"])
        .arg(&marker)
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(!marker.exists());
}

#[test]
fn test_run_requires_command() {
    let t = Test::with_secrets();

    let output = t.cmd().arg("run").output().unwrap();
    assert_failure(&output);
}
