//! Layered secret source.
//!
//! Consults sources in order and returns the first non-empty value.

use super::SecretSource;
use crate::core::domain::SecretValue;
use crate::error::SecretError;

/// An ordered chain of sources.
#[derive(Default)]
pub struct Layered {
    layers: Vec<Box<dyn SecretSource>>,
}

impl Layered {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lower-priority source
    pub fn with(mut self, source: impl SecretSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the chain has no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl std::fmt::Debug for Layered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.layers.iter().map(|l| l.name()))
            .finish()
    }
}

impl SecretSource for Layered {
    fn name(&self) -> &str {
        "layered"
    }

    /// An empty value in a higher layer falls through to lower layers.
    /// An I/O error from any consulted layer stops the lookup.
    fn get(&self, name: &str) -> std::result::Result<Option<SecretValue>, SecretError> {
        for layer in &self.layers {
            match layer.get(name)? {
                Some(value) if !value.is_empty() => return Ok(Some(value)),
                _ => continue,
            }
        }
        Ok(None)
    }
}
