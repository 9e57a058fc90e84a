//! Domain types.

mod artifact;
mod deployment;
mod descriptor;
mod network;
mod secret;

pub use artifact::ArtifactOutputPath;
pub use deployment::DeploymentConfiguration;
pub(crate) use descriptor::Segment;
pub use descriptor::NetworkDescriptor;
pub use network::{ChainId, ResolvedNetworkConfig};
pub use secret::SecretValue;
