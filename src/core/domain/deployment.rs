//! Deployment configuration root aggregate.

use serde::Serialize;

use crate::core::domain::{ArtifactOutputPath, ResolvedNetworkConfig};

/// The fully resolved configuration handed to the build framework.
///
/// Networks keep the order they were declared in, so anything derived
/// from them (reports, injected env vars) is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentConfiguration {
    compiler_version: String,
    networks: Vec<ResolvedNetworkConfig>,
    artifact_path: ArtifactOutputPath,
}

impl DeploymentConfiguration {
    pub(crate) fn new(
        compiler_version: String,
        networks: Vec<ResolvedNetworkConfig>,
        artifact_path: ArtifactOutputPath,
    ) -> Self {
        Self {
            compiler_version,
            networks,
            artifact_path,
        }
    }

    /// Solidity compiler version, e.g. `0.8.24`
    pub fn compiler_version(&self) -> &str {
        &self.compiler_version
    }

    /// Resolved networks in declared order
    pub fn networks(&self) -> &[ResolvedNetworkConfig] {
        &self.networks
    }

    /// Look up a network by name
    pub fn network(&self, name: &str) -> Option<&ResolvedNetworkConfig> {
        self.networks.iter().find(|n| n.name() == name)
    }

    /// Network names in declared order
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.iter().map(ResolvedNetworkConfig::name)
    }

    /// Where the build framework writes artifacts
    pub fn artifact_path(&self) -> &ArtifactOutputPath {
        &self.artifact_path
    }
}
