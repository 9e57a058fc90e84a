//! Shared setup for commands that read `chainconf.toml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::Options;
use crate::core::config::Config;
use crate::core::domain::DeploymentConfiguration;
use crate::core::source::{self, Layered};
use crate::error::Result;

/// A loaded config file and where it came from.
pub struct Context {
    pub config_path: PathBuf,
    pub config: Config,
}

impl Context {
    /// Load the config file named by the global options.
    pub fn load(options: &Options) -> Result<Self> {
        let config_path = absolute(&options.config)?;
        let config = Config::load(&config_path)?;
        Ok(Self {
            config_path,
            config,
        })
    }

    /// Secret source: environment first, then the dotenv file unless
    /// disabled.
    pub fn source(&self, options: &Options) -> Result<Layered> {
        let dotenv = if options.no_dotenv {
            None
        } else {
            Some(match &options.env_file {
                Some(path) => absolute(path)?,
                None => self.config.dotenv_path(&self.config_path),
            })
        };

        debug!(dotenv = ?dotenv, "building secret source");
        Ok(source::default_chain(dotenv.as_deref())?)
    }

    /// Assemble the deployment configuration for a profile.
    pub fn assemble(
        &self,
        options: &Options,
        profile: Option<&str>,
    ) -> Result<DeploymentConfiguration> {
        let source = self.source(options)?;
        self.config.assemble(&self.config_path, profile, &source)
    }
}

/// Anchor a path at the current directory.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
