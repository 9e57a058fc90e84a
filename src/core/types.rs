//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name as looked up in a secret source (e.g., ALCHEMY_API_KEY).
///
/// Must be a valid environment variable name.
pub type SecretName = String;

/// A network's unique registry key (e.g., sepolia).
pub type NetworkName = String;
