//! Run command.
//!
//! Executes a build command with the resolved configuration injected as
//! environment variables.

use zeroize::Zeroizing;

use crate::cli::context::Context;
use crate::cli::Options;
use crate::core::constants::{env_segment, RUN_ENV_PREFIX};
use crate::core::domain::DeploymentConfiguration;
use crate::error::{Error, Result};

/// Run a command with the configuration in its environment.
pub fn execute(options: &Options, profile: Option<&str>, command: &[String]) -> Result<()> {
    let ctx = Context::load(options)?;
    let config = ctx.assemble(options, profile)?;
    let exit_code = run_with_config(&config, command)?;
    std::process::exit(exit_code);
}

/// Environment variables describing a resolved configuration.
///
/// Values that may carry secrets (endpoints, accounts) are wrapped in
/// `Zeroizing` so they are wiped once the child is spawned.
pub fn deployment_env(config: &DeploymentConfiguration) -> Vec<(String, Zeroizing<String>)> {
    let var = |suffix: &str| format!("{}{}", RUN_ENV_PREFIX, suffix);

    let mut vars = vec![
        (
            var("COMPILER_VERSION"),
            Zeroizing::new(config.compiler_version().to_string()),
        ),
        (
            var("ARTIFACTS"),
            Zeroizing::new(config.artifact_path().to_string()),
        ),
        (
            var("NETWORKS"),
            Zeroizing::new(config.network_names().collect::<Vec<_>>().join(",")),
        ),
    ];

    for network in config.networks() {
        let segment = env_segment(network.name());
        let accounts: Vec<&str> = network
            .signer_credentials()
            .iter()
            .map(|s| s.expose())
            .collect();

        vars.push((
            var(&format!("{}_URL", segment)),
            Zeroizing::new(network.endpoint_url().to_string()),
        ));
        vars.push((
            var(&format!("{}_CHAIN_ID", segment)),
            Zeroizing::new(network.chain_id().to_string()),
        ));
        vars.push((
            var(&format!("{}_ACCOUNTS", segment)),
            Zeroizing::new(accounts.join(",")),
        ));
    }

    vars
}

/// Run a command with the configuration as environment variables.
fn run_with_config(config: &DeploymentConfiguration, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    for (key, value) in deployment_env(config) {
        cmd.env(key, value.as_str());
    }
    // Injected values are zeroized as they go out of scope

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
