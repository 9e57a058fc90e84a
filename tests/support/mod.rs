//! Test support utilities for chainconf integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated. Child processes use
/// `.current_dir()` and explicit env vars, so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with the sample config written.
    pub fn with_config() -> Self {
        let t = Self::new();
        t.write_config(SAMPLE_CONFIG);
        t
    }

    /// Create a test environment with the sample config and a `.env`
    /// holding both sepolia secrets.
    pub fn with_secrets() -> Self {
        let t = Self::with_config();
        t.write_env(SAMPLE_ENV);
        t
    }

    /// Path inside the project directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write `chainconf.toml`.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.path("chainconf.toml"), contents).expect("failed to write config");
    }

    /// Write `.env`.
    pub fn write_env(&self, contents: &str) {
        std::fs::write(self.path(".env"), contents).expect("failed to write .env");
    }
}
