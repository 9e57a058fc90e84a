//! Error types for chainconf.
//!
//! Errors are grouped by the pipeline stage that raises them. The
//! assembler collects stage errors into a single [`ConfigurationError`]
//! so one run reports every misconfiguration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::{NetworkName, SecretName};

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors loading or validating `chainconf.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("config already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    #[error("profile '{profile}' references unknown network '{network}'")]
    UnknownNetwork {
        profile: String,
        network: NetworkName,
    },
}

/// Errors resolving secrets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// Every required secret that was absent or empty, sorted by name.
    #[error("missing secrets: {}", .names.join(", "))]
    MissingSecrets { names: Vec<SecretName> },

    /// The backing store failed to read. Distinct from an absent key.
    #[error("secret source '{source_name}' failed: {reason}")]
    SourceIo { source_name: String, reason: String },
}

/// Errors building a network configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("invalid network config '{network}': {reason}")]
    InvalidNetworkConfig {
        network: NetworkName,
        reason: String,
    },

    #[error("invalid compiler version '{version}': expected MAJOR.MINOR.PATCH")]
    InvalidCompilerVersion { version: String },

    #[error("duplicate network: {0}")]
    DuplicateNetwork(NetworkName),

    /// Two distinct names map to the same `CHAINCONF_<SEGMENT>_*` variables.
    #[error("networks '{network}' and '{other}' both map to env segment {segment}")]
    EnvSegmentCollision {
        network: NetworkName,
        other: NetworkName,
        segment: String,
    },
}

/// Errors resolving the artifact output path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("artifact path {} escapes consumer root {}", .path.display(), .root.display())]
    PathEscape { root: PathBuf, path: PathBuf },
}

/// One failed stage, optionally attributed to a network.
#[derive(Debug)]
pub struct Failure {
    pub network: Option<NetworkName>,
    pub error: Error,
}

impl Failure {
    /// A failure not tied to any network.
    pub fn global(error: impl Into<Error>) -> Self {
        Self {
            network: None,
            error: error.into(),
        }
    }

    /// A failure raised while resolving the named network.
    pub fn network(name: impl Into<NetworkName>, error: impl Into<Error>) -> Self {
        Self {
            network: Some(name.into()),
            error: error.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.network {
            Some(name) => write!(f, "[{}] {}", name, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Aggregate of every failure from one assembly run.
#[derive(Debug, Default)]
pub struct ConfigurationError {
    pub failures: Vec<Failure>,
}

impl ConfigurationError {
    /// Number of collected failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether no failures were collected.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterate over collected failures in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.failures.len();
        write!(
            f,
            "configuration failed with {} error{}",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for (i, failure) in self.failures.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigurationError {}

pub type Result<T> = std::result::Result<T, Error>;
