//! Artifact output path resolution.
//!
//! Paths are normalized lexically: the artifact directory usually does
//! not exist yet, and creating it is left to the build framework.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::core::domain::ArtifactOutputPath;
use crate::error::PathError;

/// Resolve the artifact directory under a consumer root.
///
/// # Arguments
///
/// * `consumer_root` - Directory of the application consuming artifacts
/// * `relative` - Artifact directory, relative to `consumer_root`
///
/// # Errors
///
/// Returns `PathError::PathEscape` unless the normalized result is a
/// strict descendant of the normalized root. The root itself is rejected,
/// as is any relative path whose normalized form starts with `..`.
pub fn resolve(
    consumer_root: impl AsRef<Path>,
    relative: impl AsRef<Path>,
) -> std::result::Result<ArtifactOutputPath, PathError> {
    let consumer_root = consumer_root.as_ref();
    let relative = relative.as_ref();
    let root = normalize(consumer_root);
    let path = normalize(&root.join(relative));

    // A relative path that climbs out of the root escapes even if it
    // later comes back, and even when the root is empty or `..`.
    let climbs = relative.is_relative() && leading_parents(&normalize(relative)) > 0;

    let escapes = climbs
        || path == root
        || !path.starts_with(&root)
        || path.is_absolute() != root.is_absolute();

    if escapes {
        return Err(PathError::PathEscape {
            root: consumer_root.to_path_buf(),
            path,
        });
    }

    debug!(path = %path.display(), "artifact path resolved");
    Ok(ArtifactOutputPath::new(path))
}

/// Number of `..` components a normalized path starts with.
fn leading_parents(path: &Path) -> usize {
    path.components()
        .take_while(|c| matches!(c, Component::ParentDir))
        .count()
}

/// Collapse `.` and `..` without touching the filesystem.
///
/// `..` past the root of an absolute path is dropped; on a relative
/// path it is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().map(|c| c.as_os_str()).collect()
}
