//! Network config building.
//!
//! Combines a [`NetworkDescriptor`] with resolved secrets into a
//! [`ResolvedNetworkConfig`]. Malformed chain ids and URLs are rejected,
//! never coerced.

use tracing::debug;
use url::Url;

use crate::core::constants::{ENDPOINT_SCHEMES, REDACTED};
use crate::core::domain::{ChainId, NetworkDescriptor, ResolvedNetworkConfig, Segment};
use crate::core::resolver::{resolve_secrets, ResolvedSecrets};
use crate::core::source::SecretSource;
use crate::error::{Result, SecretError};

/// Build a resolved network from a descriptor and its secrets.
///
/// # Errors
///
/// Returns `NetworkError::InvalidNetworkConfig` if the descriptor fails
/// validation or the substituted endpoint is not a well-formed URL with
/// an accepted scheme and a host. Returns `SecretError::MissingSecrets`
/// if `secrets` lacks any required secret.
pub fn build(
    descriptor: &NetworkDescriptor,
    secrets: &ResolvedSecrets,
) -> Result<ResolvedNetworkConfig> {
    descriptor.validate()?;

    let missing: Vec<String> = descriptor
        .required_secrets
        .iter()
        .filter(|name| !secrets.contains(name))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(SecretError::MissingSecrets { names: missing }.into());
    }

    let mut endpoint = String::new();
    let mut redacted = String::new();
    for segment in descriptor.segments()? {
        match segment {
            Segment::Literal(text) => {
                endpoint.push_str(text);
                redacted.push_str(text);
            }
            Segment::Secret(name) => {
                let value = secrets
                    .get(name)
                    .ok_or_else(|| descriptor.invalid(format!("secret '{}' not resolved", name)))?;
                endpoint.push_str(value.expose());
                redacted.push_str(REDACTED);
            }
        }
    }

    // The parse error never echoes the input, which may hold an API key.
    let url = Url::parse(endpoint.trim()).map_err(|e| {
        descriptor.invalid(format!("endpoint {} is not a well-formed URL: {}", redacted, e))
    })?;

    if !ENDPOINT_SCHEMES.contains(&url.scheme()) {
        return Err(descriptor
            .invalid(format!(
                "endpoint scheme '{}' is not one of {}",
                url.scheme(),
                ENDPOINT_SCHEMES.join(", ")
            ))
            .into());
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(descriptor
            .invalid(format!("endpoint {} has no host", redacted))
            .into());
    }

    let chain_id = ChainId::try_from(descriptor.chain_id).map_err(|bad| {
        descriptor.invalid(format!("chain id must be a positive integer, got {}", bad))
    })?;

    let signer_credentials = descriptor
        .signer_names()?
        .into_iter()
        .map(|name| {
            secrets
                .get(name)
                .cloned()
                .ok_or_else(|| descriptor.invalid(format!("account '{}' not resolved", name)))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(
        network = %descriptor.name,
        chain_id = chain_id.get(),
        accounts = signer_credentials.len(),
        "network built"
    );

    Ok(ResolvedNetworkConfig::new(
        descriptor.name.clone(),
        url,
        redacted,
        chain_id,
        signer_credentials,
    ))
}

/// Resolve a descriptor's secrets from a source, then build it.
///
/// # Errors
///
/// Returns `NetworkError::InvalidNetworkConfig` if the descriptor fails
/// static validation, the secret resolution error if any required secret
/// is missing or the source fails, otherwise any error from [`build`].
pub fn resolve<S>(descriptor: &NetworkDescriptor, source: &S) -> Result<ResolvedNetworkConfig>
where
    S: SecretSource + ?Sized,
{
    descriptor.validate()?;
    let secrets = resolve_secrets(&descriptor.required_secrets, source)?;
    build(descriptor, &secrets)
}
