//! In-memory secret source.

use std::collections::BTreeMap;

use super::SecretSource;
use crate::core::domain::SecretValue;
use crate::error::SecretError;

/// A map-backed source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: BTreeMap<String, SecretValue>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret, builder-style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SecretValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a secret
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SecretValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Remove a secret
    pub fn remove(&mut self, name: &str) -> Option<SecretValue> {
        self.entries.remove(name)
    }
}

impl<K: Into<String>, V: Into<SecretValue>> FromIterator<(K, V)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (k, v) in iter {
            source.insert(k, v);
        }
        source
    }
}

impl SecretSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, name: &str) -> std::result::Result<Option<SecretValue>, SecretError> {
        Ok(self.entries.get(name).cloned())
    }
}
