//! Input validation for chainconf.
//!
//! Validates secret names, network names, and compiler versions before
//! they reach the resolver.

use std::collections::BTreeMap;

use crate::core::constants::env_segment;
use crate::core::types::NetworkName;
use crate::error::NetworkError;

/// Validate a secret name.
///
/// Secret names must be valid environment variable names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns the reason the name is invalid.
pub fn validate_secret_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("secret name cannot be empty".to_string());
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("secret name '{}' cannot start with a digit", name));
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(format!(
                "invalid character '{}' at position {} in secret name '{}'",
                ch,
                i + 1,
                name
            ));
        }
    }

    Ok(())
}

/// Validate a network name.
///
/// Network names are registry keys and env var segments: ASCII
/// alphanumerics, `-`, and `_`, starting with a letter.
pub fn validate_network_name(name: &str) -> std::result::Result<(), String> {
    match name.chars().next() {
        None => return Err("network name cannot be empty".to_string()),
        Some(c) if !c.is_ascii_alphabetic() => {
            return Err(format!("network name '{}' must start with a letter", name));
        }
        _ => {}
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(format!(
            "invalid character '{}' in network name '{}'",
            ch, name
        ));
    }

    Ok(())
}

/// Validate a compiler version of the form `MAJOR.MINOR.PATCH`.
///
/// # Errors
///
/// Returns `NetworkError::InvalidCompilerVersion` for anything else,
/// including ranges like `^0.8.0`.
pub fn validate_compiler_version(version: &str) -> std::result::Result<(), NetworkError> {
    let parts: Vec<&str> = version.split('.').collect();
    let well_formed = parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));

    if !well_formed {
        return Err(NetworkError::InvalidCompilerVersion {
            version: version.to_string(),
        });
    }

    Ok(())
}

/// Record a network name, rejecting repeats.
///
/// `seen` maps env var segments to the first name that claimed them, so
/// `base-sepolia` and `base_sepolia` collide even though the names differ.
///
/// # Errors
///
/// Returns `NetworkError::DuplicateNetwork` for a repeated name and
/// `NetworkError::EnvSegmentCollision` for a distinct name with the same
/// segment.
pub fn check_unique(
    seen: &mut BTreeMap<String, NetworkName>,
    name: &str,
) -> std::result::Result<(), NetworkError> {
    let segment = env_segment(name);
    match seen.get(&segment) {
        Some(existing) if existing == name => {
            Err(NetworkError::DuplicateNetwork(name.to_string()))
        }
        Some(existing) => Err(NetworkError::EnvSegmentCollision {
            network: name.to_string(),
            other: existing.clone(),
            segment,
        }),
        None => {
            seen.insert(segment, name.to_string());
            Ok(())
        }
    }
}
