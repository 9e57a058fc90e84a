//! Dotenv file source.
//!
//! Parses a `.env` file once, up front. A missing file behaves like an
//! empty one; an unreadable or malformed file is a source I/O error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SecretSource;
use crate::core::domain::SecretValue;
use crate::error::SecretError;

/// Secrets parsed from a dotenv file.
#[derive(Debug, Clone)]
pub struct DotenvFile {
    path: PathBuf,
    label: String,
    entries: BTreeMap<String, SecretValue>,
}

impl DotenvFile {
    /// Parse a dotenv file from disk.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::SourceIo` if the file's existence cannot be
    /// determined, or it exists but cannot be read or contains a
    /// malformed line.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, SecretError> {
        let path = path.as_ref();
        let label = format!("dotenv:{}", path.display());
        let mut entries = BTreeMap::new();

        let io_error = |reason: String| SecretError::SourceIo {
            source_name: label.clone(),
            reason,
        };

        if !path.try_exists().map_err(|e| io_error(e.to_string()))? {
            debug!(path = %path.display(), "dotenv file not found, treating as empty");
            return Ok(Self {
                path: path.to_path_buf(),
                label,
                entries,
            });
        }

        let iter = dotenvy::from_path_iter(path).map_err(|e| io_error(e.to_string()))?;
        for item in iter {
            let (key, value) = item.map_err(|e| io_error(e.to_string()))?;
            entries.insert(key, SecretValue::new(value));
        }

        debug!(path = %path.display(), entries = entries.len(), "dotenv file loaded");

        Ok(Self {
            path: path.to_path_buf(),
            label,
            entries,
        })
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SecretSource for DotenvFile {
    fn name(&self) -> &str {
        &self.label
    }

    fn get(&self, name: &str) -> std::result::Result<Option<SecretValue>, SecretError> {
        Ok(self.entries.get(name).cloned())
    }
}
