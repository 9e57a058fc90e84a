//! Init command - write a starter chainconf.toml.

use tracing::info;

use crate::cli::context::absolute;
use crate::cli::{output, Options};
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// Write the template configuration.
pub fn execute(options: &Options, force: bool) -> Result<()> {
    let path = absolute(&options.config)?;

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path).into());
    }

    let config = Config::template();
    config.save(&path)?;
    info!(path = %path.display(), "config written");

    output::success(&format!(
        "initialized {}",
        output::path(&options.config.display().to_string())
    ));
    output::hint("set ALCHEMY_API_KEY and PRIVATE_KEY in the environment or .env");
    Ok(())
}
