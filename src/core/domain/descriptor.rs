//! Network descriptor type.
//!
//! Static definition of a target network: endpoint template, chain id,
//! and the secrets needed to reach and sign for it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::types::{NetworkName, SecretName};
use crate::core::validation::{validate_network_name, validate_secret_name};
use crate::error::NetworkError;

/// A named network definition.
///
/// `chain_id` stays signed so malformed input survives deserialization
/// and is rejected by [`NetworkDescriptor::validate`] instead of being
/// coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// Unique registry key
    pub name: NetworkName,
    /// Endpoint URL with `${SECRET}` placeholders
    #[serde(rename = "endpoint")]
    pub endpoint_template: String,
    /// EIP-155 chain id
    pub chain_id: i64,
    /// Every secret that must resolve before the network is usable
    #[serde(default)]
    pub required_secrets: BTreeSet<SecretName>,
    /// Ordered signer credentials. Empty means "required secrets not
    /// used by the endpoint template".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<SecretName>,
    /// Disabled networks are skipped unless a profile names them
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// A piece of a parsed endpoint template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Secret(&'a str),
}

impl NetworkDescriptor {
    /// Create an enabled descriptor with no secrets
    pub fn new(
        name: impl Into<NetworkName>,
        endpoint_template: impl Into<String>,
        chain_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint_template: endpoint_template.into(),
            chain_id,
            required_secrets: BTreeSet::new(),
            accounts: Vec::new(),
            enabled: true,
        }
    }

    /// Require a secret
    pub fn with_secret(mut self, name: impl Into<SecretName>) -> Self {
        self.required_secrets.insert(name.into());
        self
    }

    /// Require a secret and use it as the next signer credential
    pub fn with_account(mut self, name: impl Into<SecretName>) -> Self {
        let name = name.into();
        self.required_secrets.insert(name.clone());
        self.accounts.push(name);
        self
    }

    /// Mark the descriptor disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Check every property that does not depend on secret values.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidNetworkConfig` for a non-positive
    /// chain id, a bad name, an unparseable template, or a placeholder or
    /// account that is not a required secret.
    pub fn validate(&self) -> std::result::Result<(), NetworkError> {
        if self.chain_id <= 0 {
            return Err(self.invalid(format!(
                "chain id must be a positive integer, got {}",
                self.chain_id
            )));
        }

        validate_network_name(&self.name).map_err(|reason| self.invalid(reason))?;

        for secret in &self.required_secrets {
            validate_secret_name(secret).map_err(|reason| self.invalid(reason))?;
        }

        for account in &self.accounts {
            if !self.required_secrets.contains(account) {
                return Err(self.invalid(format!(
                    "account '{}' is not a required secret",
                    account
                )));
            }
        }

        self.placeholders()?;
        Ok(())
    }

    /// Secret names referenced by the endpoint template.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidNetworkConfig` if the template is
    /// malformed or references a secret outside `required_secrets`.
    pub fn placeholders(&self) -> std::result::Result<BTreeSet<&str>, NetworkError> {
        let mut names = BTreeSet::new();
        for segment in self.segments()? {
            if let Segment::Secret(name) = segment {
                if !self.required_secrets.contains(name) {
                    return Err(self.invalid(format!(
                        "endpoint placeholder '{}' is not a required secret",
                        name
                    )));
                }
                names.insert(name);
            }
        }
        Ok(names)
    }

    /// Secret names used as signer credentials, in order.
    pub fn signer_names(&self) -> std::result::Result<Vec<&str>, NetworkError> {
        if !self.accounts.is_empty() {
            return Ok(self.accounts.iter().map(String::as_str).collect());
        }

        let placeholders = self.placeholders()?;
        Ok(self
            .required_secrets
            .iter()
            .map(String::as_str)
            .filter(|name| !placeholders.contains(name))
            .collect())
    }

    pub(crate) fn segments(&self) -> std::result::Result<Vec<Segment<'_>>, NetworkError> {
        parse_template(&self.endpoint_template).map_err(|reason| self.invalid(reason))
    }

    pub(crate) fn invalid(&self, reason: impl Into<String>) -> NetworkError {
        NetworkError::InvalidNetworkConfig {
            network: self.name.clone(),
            reason: reason.into(),
        }
    }
}

fn parse_template(template: &str) -> std::result::Result<Vec<Segment<'_>>, String> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        if start > 0 {
            segments.push(Segment::Literal(&rest[..start]));
        }

        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or_else(|| "unterminated '${' in endpoint template".to_string())?;
        let name = &after[..end];
        validate_secret_name(name)
            .map_err(|reason| format!("bad endpoint placeholder: {}", reason))?;

        segments.push(Segment::Secret(name));
        rest = &after[end + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    Ok(segments)
}

impl std::fmt::Display for NetworkDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.chain_id)
    }
}
