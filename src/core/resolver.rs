//! Secret resolution.
//!
//! Maps a set of required secret names onto values from a
//! [`SecretSource`], reporting every missing name at once.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::core::domain::SecretValue;
use crate::core::source::SecretSource;
use crate::core::types::SecretName;
use crate::error::SecretError;

/// A complete mapping from required secret names to non-empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSecrets {
    values: BTreeMap<SecretName, SecretValue>,
}

impl ResolvedSecrets {
    /// Value for a secret name
    pub fn get(&self, name: &str) -> Option<&SecretValue> {
        self.values.get(name)
    }

    /// Whether a secret was resolved
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Resolved names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of resolved secrets
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was resolved
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolve every required secret from a source.
///
/// An empty value counts as missing.
///
/// # Errors
///
/// Returns `SecretError::MissingSecrets` naming every absent or empty
/// secret, sorted. Returns `SecretError::SourceIo` as soon as the source
/// fails to read; missing names gathered so far are dropped in favor of
/// the fatal error.
pub fn resolve_secrets<S>(
    required: &BTreeSet<SecretName>,
    source: &S,
) -> std::result::Result<ResolvedSecrets, SecretError>
where
    S: SecretSource + ?Sized,
{
    debug!(required = required.len(), source = source.name(), "resolving secrets");

    let mut values = BTreeMap::new();
    let mut missing = Vec::new();

    for name in required {
        match source.get(name)? {
            Some(value) if !value.is_empty() => {
                values.insert(name.clone(), value);
            }
            _ => missing.push(name.clone()),
        }
    }

    if !missing.is_empty() {
        debug!(missing = missing.len(), "secrets missing");
        return Err(SecretError::MissingSecrets { names: missing });
    }

    Ok(ResolvedSecrets { values })
}
