//! Configuration assembly.
//!
//! The single entry point that turns descriptors, a secret source, and
//! artifact paths into a [`DeploymentConfiguration`]. Every stage runs
//! even after an earlier one fails, so one invocation reports every
//! misconfiguration.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::core::artifact;
use crate::core::builder::build;
use crate::core::domain::{DeploymentConfiguration, NetworkDescriptor};
use crate::core::resolver::resolve_secrets;
use crate::core::source::SecretSource;
use crate::core::validation::{check_unique, validate_compiler_version, validate_secret_name};
use crate::error::{ConfigurationError, Failure};

/// Assemble a deployment configuration.
///
/// Failures are reported in a fixed order: compiler version, then each
/// network in the order given, then the artifact path. Calling this twice
/// with the same inputs yields equal results.
///
/// # Arguments
///
/// * `compiler_version` - Solidity compiler version, `MAJOR.MINOR.PATCH`
/// * `descriptors` - Networks to resolve, in declared order
/// * `source` - Where secret values come from
/// * `consumer_root` - Directory of the application consuming artifacts
/// * `relative_artifact_path` - Artifact directory under `consumer_root`
///
/// # Errors
///
/// Returns a `ConfigurationError` listing every failed stage.
pub fn assemble<S>(
    compiler_version: &str,
    descriptors: &[NetworkDescriptor],
    source: &S,
    consumer_root: &Path,
    relative_artifact_path: &Path,
) -> std::result::Result<DeploymentConfiguration, ConfigurationError>
where
    S: SecretSource + ?Sized,
{
    debug!(
        compiler = compiler_version,
        networks = descriptors.len(),
        "assembling configuration"
    );

    let mut failures = Vec::new();

    if let Err(e) = validate_compiler_version(compiler_version) {
        failures.push(Failure::global(e));
    }

    let mut seen = BTreeMap::new();
    let mut networks = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let name = descriptor.name.as_str();
        if let Err(e) = check_unique(&mut seen, name) {
            failures.push(Failure::network(name, e));
            continue;
        }

        let invalid = descriptor.validate().err();

        // Malformed secret names are never looked up.
        let lookup = descriptor
            .required_secrets
            .iter()
            .all(|secret| validate_secret_name(secret).is_ok())
            .then(|| resolve_secrets(&descriptor.required_secrets, source));

        match (invalid, lookup) {
            (None, Some(Ok(secrets))) => match build(descriptor, &secrets) {
                Ok(network) => networks.push(network),
                Err(e) => failures.push(Failure::network(name, e)),
            },
            (invalid, lookup) => {
                if let Some(e) = invalid {
                    failures.push(Failure::network(name, e));
                }
                if let Some(Err(e)) = lookup {
                    failures.push(Failure::network(name, e));
                }
            }
        }
    }

    let artifact_path = match artifact::resolve(consumer_root, relative_artifact_path) {
        Ok(path) => Some(path),
        Err(e) => {
            failures.push(Failure::global(e));
            None
        }
    };

    match artifact_path {
        Some(artifact_path) if failures.is_empty() => {
            info!(
                networks = networks.len(),
                artifacts = %artifact_path,
                "configuration resolved"
            );
            Ok(DeploymentConfiguration::new(
                compiler_version.to_string(),
                networks,
                artifact_path,
            ))
        }
        _ => {
            debug!(failures = failures.len(), "configuration failed");
            Err(ConfigurationError { failures })
        }
    }
}
