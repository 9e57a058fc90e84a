//! Resolve command.
//!
//! Assembles the deployment configuration and prints it with every
//! secret redacted.

use crate::cli::context::Context;
use crate::cli::{output, Options};
use crate::core::domain::DeploymentConfiguration;
use crate::error::Result;

/// Resolve and print the configuration.
pub fn execute(options: &Options, profile: Option<&str>, json: bool) -> Result<()> {
    let ctx = Context::load(options)?;
    let config = ctx.assemble(options, profile)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_summary(&config);
    }

    Ok(())
}

fn print_summary(config: &DeploymentConfiguration) {
    output::section("Deployment Configuration");
    output::kv("compiler ", config.compiler_version());
    output::kv("artifacts", output::path(&config.artifact_path().to_string()));

    output::section("Networks");
    if config.networks().is_empty() {
        output::dimmed("no networks selected");
        return;
    }

    for network in config.networks() {
        output::header(network.name());
        output::kv("chain id", network.chain_id());
        output::kv("endpoint", network.redacted_endpoint());
        let count = network.signer_credentials().len();
        output::kv(
            "accounts",
            format!("{} signer{}", count, if count == 1 { "" } else { "s" }),
        );
    }
}
