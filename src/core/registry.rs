//! Network descriptor registry.
//!
//! Holds the declared networks in order, plus named profiles that pick a
//! subset of them. Profiles replace per-environment copies of the same
//! configuration.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::domain::NetworkDescriptor;
use crate::core::types::NetworkName;
use crate::core::validation::check_unique;
use crate::error::{ConfigError, Result};

/// Declared networks and profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    networks: Vec<NetworkDescriptor>,
    profiles: BTreeMap<String, Vec<NetworkName>>,
}

impl Registry {
    /// Networks shipped with chainconf.
    ///
    /// `sepolia` is enabled. `localhost` and `mainnet` are disabled and
    /// only resolve when a profile names them.
    pub fn builtin() -> Self {
        let networks = vec![
            NetworkDescriptor::new("sepolia", "${ALCHEMY_API_KEY}", 11_155_111)
                .with_secret("ALCHEMY_API_KEY")
                .with_account("PRIVATE_KEY"),
            NetworkDescriptor::new("localhost", "http://127.0.0.1:8545", 31_337).disabled(),
            NetworkDescriptor::new(
                "mainnet",
                "https://eth-mainnet.g.alchemy.com/v2/${ALCHEMY_API_KEY}",
                1,
            )
            .with_secret("ALCHEMY_API_KEY")
            .with_account("PRIVATE_KEY")
            .disabled(),
        ];

        let profiles = [
            ("testnet", "sepolia"),
            ("local", "localhost"),
            ("mainnet", "mainnet"),
        ]
        .into_iter()
        .map(|(profile, network)| (profile.to_string(), vec![network.to_string()]))
        .collect();

        Self { networks, profiles }
    }

    /// Build a registry from descriptors in declared order.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::DuplicateNetwork` if two descriptors share
    /// a name, or `NetworkError::EnvSegmentCollision` if two names map to
    /// the same env var segment.
    pub fn from_descriptors(networks: Vec<NetworkDescriptor>) -> Result<Self> {
        let mut segments = BTreeMap::new();
        for network in &networks {
            check_unique(&mut segments, &network.name)?;
        }

        Ok(Self {
            networks,
            profiles: BTreeMap::new(),
        })
    }

    /// Add a named profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownNetwork` if the profile names a
    /// network that is not registered.
    pub fn with_profile(
        mut self,
        name: impl Into<String>,
        networks: Vec<NetworkName>,
    ) -> Result<Self> {
        let name = name.into();
        if let Some(unknown) = networks.iter().find(|n| self.get(n).is_none()) {
            return Err(ConfigError::UnknownNetwork {
                profile: name,
                network: unknown.clone(),
            }
            .into());
        }

        self.profiles.insert(name, networks);
        Ok(self)
    }

    /// Look up a descriptor by name
    pub fn get(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.iter().find(|n| n.name == name)
    }

    /// All descriptors in declared order
    pub fn networks(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    /// Profiles by name
    pub fn profiles(&self) -> &BTreeMap<String, Vec<NetworkName>> {
        &self.profiles
    }

    /// Names of the profiles that include a network
    pub fn profiles_for(&self, network: &str) -> Vec<&str> {
        self.profiles
            .iter()
            .filter(|(_, members)| members.iter().any(|m| m == network))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Descriptors to resolve for a profile.
    ///
    /// With no profile, every enabled network in declared order. With a
    /// profile, its networks in the profile's order, enabled or not.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownProfile` for an undeclared profile.
    pub fn select(&self, profile: Option<&str>) -> Result<Vec<NetworkDescriptor>> {
        let selected: Vec<NetworkDescriptor> = match profile {
            None => self.networks.iter().filter(|n| n.enabled).cloned().collect(),
            Some(name) => {
                let members = self
                    .profiles
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;
                members
                    .iter()
                    .filter_map(|member| self.get(member))
                    .cloned()
                    .collect()
            }
        };

        debug!(
            profile = profile.unwrap_or("<default>"),
            networks = selected.len(),
            "networks selected"
        );
        Ok(selected)
    }
}
