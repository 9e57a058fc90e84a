//! Secret sources.
//!
//! A [`SecretSource`] is the only way the resolver sees secret values.
//! Sources are passed in explicitly, so resolution never reads process
//! globals on its own and tests can substitute an in-memory source.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `SecretSource` trait
//! 2. Add the implementation in a new file (e.g., `keychain.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Keychain { /* ... */ }
//!
//! impl SecretSource for Keychain {
//!     fn name(&self) -> &str {
//!         "keychain"
//!     }
//!     fn get(&self, name: &str) -> Result<Option<SecretValue>, SecretError> {
//!         // Look up in the OS keychain
//!     }
//! }
//! ```

use crate::core::domain::SecretValue;
use crate::error::SecretError;

mod dotenv;
mod env;
mod layered;
mod memory;

pub use dotenv::DotenvFile;
pub use env::ProcessEnv;
pub use layered::Layered;
pub use memory::MemorySource;

/// Secret lookup trait.
pub trait SecretSource {
    /// Short label used in error reports.
    fn name(&self) -> &str;

    /// Look up a secret by name.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the secret is absent. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::SourceIo` if the underlying store could not
    /// be read.
    fn get(&self, name: &str) -> std::result::Result<Option<SecretValue>, SecretError>;
}

impl<T: SecretSource + ?Sized> SecretSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, name: &str) -> std::result::Result<Option<SecretValue>, SecretError> {
        (**self).get(name)
    }
}

impl<T: SecretSource + ?Sized> SecretSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, name: &str) -> std::result::Result<Option<SecretValue>, SecretError> {
        (**self).get(name)
    }
}

/// The default chain: process environment first, then a dotenv file.
///
/// Existing environment variables win over the file, as with dotenv.
///
/// # Errors
///
/// Returns `SecretError::SourceIo` if the dotenv file exists but cannot
/// be read or parsed.
pub fn default_chain(
    dotenv: Option<&std::path::Path>,
) -> std::result::Result<Layered, SecretError> {
    let mut chain = Layered::new().with(ProcessEnv);
    if let Some(path) = dotenv {
        chain = chain.with(DotenvFile::load(path)?);
    }
    Ok(chain)
}
