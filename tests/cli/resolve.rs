//! Tests for `chainconf resolve`.

use crate::support::*;

#[test]
fn test_resolve_summary() {
    let t = Test::with_secrets();

    let output = t.resolve();
    assert_success(&output);
    assert_stdout_contains(&output, "0.8.24");
    assert_stdout_contains(&output, "sepolia");
    assert_stdout_contains(&output, "11155111");
    assert_stdout_contains(&output, "<redacted>");
    assert_stdout_contains(&output, "1 signer");
    assert_no_secrets(&output);
}

#[test]
fn test_resolve_json() {
    let t = Test::with_secrets();

    let json = t.resolve_json();
    assert_eq!(json["compiler_version"], "0.8.24");

    let networks = json["networks"].as_array().unwrap();
    assert_eq!(networks.len(), 1);
    assert_eq!(networks[0]["name"], "sepolia");
    assert_eq!(networks[0]["chain_id"], 11155111);
    assert_eq!(networks[0]["endpoint"], "<redacted>");
    assert_eq!(networks[0]["accounts"], serde_json::json!(["<redacted>"]));

    let artifacts = json["artifact_path"].as_str().unwrap();
    assert!(artifacts.ends_with("client/app/artifacts"), "{}", artifacts);

    let raw = json.to_string();
    assert!(!raw.contains("test-api-key-123"));
    assert!(!raw.contains(PRIVATE_KEY));
}

#[test]
fn test_resolve_reads_secrets_from_environment() {
    let t = Test::with_config();

    let output = t
        .cmd()
        .arg("resolve")
        .env("ALCHEMY_API_KEY", ALCHEMY_URL)
        .env("PRIVATE_KEY", PRIVATE_KEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert_no_secrets(&output);
}

#[test]
fn test_resolve_missing_private_key() {
    let t = Test::with_config();
    t.write_env(ENV_WITHOUT_PRIVATE_KEY);

    let output = t.resolve();
    assert_failure(&output);
    assert_stderr_contains(&output, "configuration failed with 1 error");
    assert_stderr_contains(&output, "[sepolia] missing secrets: PRIVATE_KEY");
    assert_stderr_contains(&output, "set the missing secrets");
    assert_no_secrets(&output);
}

#[test]
fn test_resolve_empty_secret_is_missing() {
    let t = Test::with_config();
    t.write_env(&format!("{}PRIVATE_KEY=\n", ENV_WITHOUT_PRIVATE_KEY));

    let output = t.resolve();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing secrets: PRIVATE_KEY");
}

#[test]
fn test_resolve_reports_every_failure() {
    let t = Test::new();
    t.write_config(
        &SAMPLE_CONFIG
            .replace("compiler = \"0.8.24\"", "compiler = \"0.8\"")
            .replace("artifacts = \"artifacts\"", "artifacts = \"../../outside\""),
    );

    let output = t.resolve();
    assert_failure(&output);
    assert_stderr_contains(&output, "configuration failed with 3 errors");
    assert_stderr_contains(&output, "invalid compiler version '0.8'");
    assert_stderr_contains(&output, "missing secrets: ALCHEMY_API_KEY, PRIVATE_KEY");
    assert_stderr_contains(&output, "escapes consumer root");
}

#[test]
fn test_resolve_profile_selects_disabled_network() {
    let t = Test::with_config();

    let json = {
        let output = t
            .cmd()
            .args(["resolve", "--json", "--profile", "local"])
            .output()
            .unwrap();
        assert_success(&output);
        serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
    };

    let networks = json["networks"].as_array().unwrap();
    assert_eq!(networks.len(), 1);
    assert_eq!(networks[0]["name"], "localhost");
    assert_eq!(networks[0]["chain_id"], 31337);
}

#[test]
fn test_resolve_no_dotenv_ignores_file() {
    let t = Test::with_secrets();

    let output = t.cmd().args(["--no-dotenv", "resolve"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing secrets: ALCHEMY_API_KEY, PRIVATE_KEY");
}

#[test]
fn test_resolve_custom_env_file() {
    let t = Test::with_config();
    std::fs::write(t.path("deploy.env"), SAMPLE_ENV).unwrap();

    let output = t
        .cmd()
        .args(["--env-file", "deploy.env", "resolve"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_resolve_malformed_env_file() {
    let t = Test::with_config();
    t.write_env("THIS IS NOT A DOTENV LINE\n");

    let output = t.resolve();
    assert_failure(&output);
    assert_stderr_contains(&output, "secret source");
}
