//! Artifact output path type.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A normalized directory path inside the consumer root.
///
/// Constructed only by [`crate::core::artifact::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArtifactOutputPath(PathBuf);

impl ArtifactOutputPath {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    /// Path as a `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ArtifactOutputPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ArtifactOutputPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
