//! Check command.
//!
//! Reports pass/fail for the compiler version, each selected network,
//! and the artifact path.

use std::collections::BTreeSet;

use crate::cli::context::Context;
use crate::cli::{output, Options};
use crate::error::{Error, Result};

/// Check that the configuration resolves.
pub fn execute(options: &Options, profile: Option<&str>) -> Result<()> {
    let ctx = Context::load(options)?;
    let selected = ctx.config.registry()?.select(profile)?;

    output::section("Configuration Check");

    match ctx.assemble(options, profile) {
        Ok(config) => {
            output::success(&format!("compiler {}", config.compiler_version()));
            for network in config.networks() {
                output::success(&format!("{} ({})", network.name(), network.chain_id()));
            }
            output::success(&format!("artifacts {}", config.artifact_path()));
            Ok(())
        }
        Err(Error::Configuration(report)) => {
            let failed: BTreeSet<&str> = report
                .iter()
                .filter_map(|f| f.network.as_deref())
                .collect();

            for failure in report.iter() {
                output::failure(&failure.to_string());
            }
            for descriptor in selected.iter().filter(|d| !failed.contains(d.name.as_str())) {
                output::success(&format!("{} ({})", descriptor.name, descriptor.chain_id));
            }

            let count = report.len();
            Err(Error::Other(format!(
                "check failed with {} error{}",
                count,
                if count == 1 { "" } else { "s" }
            )))
        }
        Err(e) => Err(e),
    }
}
