//! Networks command - list the registry.

use serde_json::json;

use crate::cli::context::Context;
use crate::cli::{output, Options};
use crate::error::Result;

/// List declared networks and the profiles that include them.
pub fn execute(options: &Options, json: bool) -> Result<()> {
    let ctx = Context::load(options)?;
    let registry = ctx.config.registry()?;

    if json {
        let networks: Vec<_> = registry
            .networks()
            .iter()
            .map(|n| {
                json!({
                    "name": n.name,
                    "chain_id": n.chain_id,
                    "endpoint": n.endpoint_template,
                    "enabled": n.enabled,
                    "required_secrets": n.required_secrets,
                    "accounts": n.accounts,
                    "profiles": registry.profiles_for(&n.name),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&networks)?);
        return Ok(());
    }

    output::section("Networks");
    for network in registry.networks() {
        let state = if network.enabled { "" } else { " (disabled)" };
        output::header(&format!("{}{}", network.name, state));
        output::kv("chain id", network.chain_id);
        output::kv("endpoint", &network.endpoint_template);
        if !network.required_secrets.is_empty() {
            let secrets: Vec<&str> = network.required_secrets.iter().map(String::as_str).collect();
            output::kv("secrets ", secrets.join(", "));
        }
        let profiles = registry.profiles_for(&network.name);
        if !profiles.is_empty() {
            output::kv("profiles", profiles.join(", "));
        }
    }

    Ok(())
}
