//! Configuration file management.
//!
//! Handles reading, writing, and validating `chainconf.toml`, and turns
//! a loaded file into a [`DeploymentConfiguration`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::assembler::assemble;
use crate::core::constants;
use crate::core::domain::{DeploymentConfiguration, NetworkDescriptor};
use crate::core::registry::Registry;
use crate::core::source::SecretSource;
use crate::core::types::NetworkName;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `chainconf.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File metadata and compiler selection
    pub chainconf: Meta,
    /// Artifact output location
    pub paths: Paths,
    /// Where secrets are read from besides the environment
    #[serde(default)]
    pub secrets: SecretsConfig,
    /// Declared networks. Empty means the built-in registry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkDescriptor>,
    /// Profile name to network names
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub profiles: BTreeMap<String, Vec<NetworkName>>,
}

/// Metadata section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration format version
    pub version: String,
    /// Solidity compiler version
    pub compiler: String,
}

/// Artifact paths section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paths {
    /// Consumer application root, relative to the config file's directory
    pub consumer_root: PathBuf,
    /// Artifact directory, relative to `consumer_root`
    pub artifacts: PathBuf,
}

/// Secrets section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// Dotenv file, relative to the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dotenv: Option<PathBuf>,
}

impl Config {
    /// The configuration `chainconf init` writes.
    ///
    /// Sends artifacts to `../client/app/artifacts` and declares the
    /// built-in networks so they can be edited in place.
    pub fn template() -> Self {
        let registry = Registry::builtin();
        Self {
            chainconf: Meta {
                version: constants::FORMAT_VERSION.to_string(),
                compiler: "0.8.24".to_string(),
            },
            paths: Paths {
                consumer_root: PathBuf::from("../client/app"),
                artifacts: PathBuf::from("artifacts"),
            },
            secrets: SecretsConfig::default(),
            networks: registry.networks().to_vec(),
            profiles: registry.profiles().clone(),
        }
    }

    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::ReadFile` if it cannot be checked or read,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation
    /// error.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.try_exists().map_err(ConfigError::ReadFile)? {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            networks = config.networks.len(),
            profiles = config.profiles.len(),
            "config loaded"
        );

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Validate the file structure.
    ///
    /// Checks that the version and compiler fields are present, the
    /// version looks like semver, and the networks and profiles form a
    /// consistent registry. Descriptor contents and the compiler version
    /// format are checked later, during assembly, so that every problem
    /// is reported together.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField`, `ConfigError::InvalidValue`,
    /// or a registry error.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.chainconf.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let version_parts: Vec<&str> = self.chainconf.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.chainconf.version),
            }
            .into());
        }

        if self.chainconf.compiler.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "compiler" }.into());
        }

        if self.paths.artifacts.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "artifacts" }.into());
        }

        self.registry()?;
        Ok(())
    }

    /// Registry for this file: the declared networks, or the built-in
    /// ones when none are declared, plus declared profiles.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate networks or a profile naming an
    /// unknown network.
    pub fn registry(&self) -> Result<Registry> {
        let mut registry = if self.networks.is_empty() {
            Registry::builtin()
        } else {
            Registry::from_descriptors(self.networks.clone())?
        };

        for (name, members) in &self.profiles {
            registry = registry.with_profile(name.clone(), members.clone())?;
        }

        Ok(registry)
    }

    /// Consumer root resolved against the config file's directory
    pub fn consumer_root(&self, config_path: &Path) -> PathBuf {
        base_dir(config_path).join(&self.paths.consumer_root)
    }

    /// Dotenv file resolved against the config file's directory
    pub fn dotenv_path(&self, config_path: &Path) -> PathBuf {
        let file = self
            .secrets
            .dotenv
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DOTENV_FILE));
        base_dir(config_path).join(file)
    }

    /// Assemble the deployment configuration for a profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProfile` for an undeclared profile,
    /// or a `ConfigurationError` aggregating every resolution failure.
    pub fn assemble<S>(
        &self,
        config_path: &Path,
        profile: Option<&str>,
        source: &S,
    ) -> Result<DeploymentConfiguration>
    where
        S: SecretSource + ?Sized,
    {
        let descriptors = self.registry()?.select(profile)?;
        let config = assemble(
            &self.chainconf.compiler,
            &descriptors,
            source,
            &self.consumer_root(config_path),
            &self.paths.artifacts,
        )?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::template()
    }
}

fn base_dir(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
