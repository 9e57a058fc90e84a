//! Resolved network configuration.
//!
//! Only the builder can construct a [`ResolvedNetworkConfig`], and only
//! after every required secret resolved and the endpoint parsed.

use std::num::NonZeroU64;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use url::Url;

use crate::core::domain::SecretValue;
use crate::core::types::NetworkName;

/// A validated, positive chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ChainId(NonZeroU64);

impl ChainId {
    /// Numeric chain id
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<i64> for ChainId {
    type Error = i64;

    /// Fails with the rejected input when it is not positive.
    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(value)
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fully resolved network, ready for the build framework.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedNetworkConfig {
    name: NetworkName,
    endpoint_url: Url,
    redacted_endpoint: String,
    chain_id: ChainId,
    signer_credentials: Vec<SecretValue>,
}

impl ResolvedNetworkConfig {
    pub(crate) fn new(
        name: NetworkName,
        endpoint_url: Url,
        redacted_endpoint: String,
        chain_id: ChainId,
        signer_credentials: Vec<SecretValue>,
    ) -> Self {
        Self {
            name,
            endpoint_url,
            redacted_endpoint,
            chain_id,
            signer_credentials,
        }
    }

    /// Network name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoint URL with secrets substituted.
    ///
    /// May embed an API key. Never log it; use
    /// [`ResolvedNetworkConfig::redacted_endpoint`] for display.
    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    /// Endpoint with every secret replaced by `<redacted>`
    pub fn redacted_endpoint(&self) -> &str {
        &self.redacted_endpoint
    }

    /// Chain id
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Signer credentials in declared order
    pub fn signer_credentials(&self) -> &[SecretValue] {
        &self.signer_credentials
    }
}

impl std::fmt::Debug for ResolvedNetworkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedNetworkConfig")
            .field("name", &self.name)
            .field("endpoint", &self.redacted_endpoint)
            .field("chain_id", &self.chain_id)
            .field("signer_credentials", &self.signer_credentials)
            .finish()
    }
}

impl Serialize for ResolvedNetworkConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("endpoint", &self.redacted_endpoint)?;
        map.serialize_entry("chain_id", &self.chain_id)?;
        map.serialize_entry("accounts", &self.signer_credentials)?;
        map.end()
    }
}
