//! Chainconf - deployment configuration resolver for smart-contract toolchains.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write chainconf.toml
//! │   ├── resolve       # Resolve and print the configuration
//! │   ├── check         # Per-network pass/fail report
//! │   ├── networks      # List the registry
//! │   ├── run           # Run the build tool with the configuration injected
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── source/       # Secret sources
//!     │   ├── mod       # SecretSource trait
//!     │   ├── env       # Process environment
//!     │   ├── dotenv    # .env files
//!     │   ├── memory    # In-memory map
//!     │   └── layered   # Ordered fallback chain
//!     ├── registry      # Network descriptors and profiles
//!     ├── resolver      # Required secrets -> values
//!     ├── builder       # Descriptor + secrets -> resolved network
//!     ├── artifact      # Artifact output path
//!     ├── assembler     # Whole-configuration entry point
//!     └── config        # chainconf.toml management
//! ```
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use chainconf::{assemble, MemorySource, NetworkDescriptor};
//!
//! let sepolia = NetworkDescriptor::new("sepolia", "${ALCHEMY_API_KEY}", 11155111)
//!     .with_secret("ALCHEMY_API_KEY")
//!     .with_account("PRIVATE_KEY");
//! let source = MemorySource::new()
//!     .with("ALCHEMY_API_KEY", "https://eth-sepolia.g.alchemy.com/v2/key")
//!     .with("PRIVATE_KEY", "0xabc");
//!
//! let config = assemble(
//!     "0.8.24",
//!     &[sepolia],
//!     &source,
//!     Path::new("/project/client/app"),
//!     Path::new("artifacts"),
//! )
//! .unwrap();
//!
//! assert_eq!(config.network("sepolia").unwrap().chain_id().get(), 11155111);
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::assembler::assemble;
pub use crate::core::config::Config;
pub use crate::core::domain::{
    ArtifactOutputPath, ChainId, DeploymentConfiguration, NetworkDescriptor,
    ResolvedNetworkConfig, SecretValue,
};
pub use crate::core::registry::Registry;
pub use crate::core::source::{DotenvFile, Layered, MemorySource, ProcessEnv, SecretSource};
pub use crate::error::{Error, Result};
