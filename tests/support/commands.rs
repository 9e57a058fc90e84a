//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables a developer shell might carry that would leak into tests.
const SCRUBBED_VARS: &[&str] = &[
    "ALCHEMY_API_KEY",
    "PRIVATE_KEY",
    "CHAINCONF_CONFIG",
    "CHAINCONF_LOG",
];

impl Test {
    /// Create a chainconf command isolated to the test project.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test project directory
    /// - Secret and chainconf variables removed from the environment
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("chainconf").expect("failed to find chainconf binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `chainconf init`.
    pub fn init(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run chainconf init")
    }

    /// Shortcut for `chainconf resolve`.
    pub fn resolve(&self) -> Output {
        self.cmd()
            .arg("resolve")
            .output()
            .expect("failed to run chainconf resolve")
    }

    /// Shortcut for `chainconf resolve --json`, parsed.
    pub fn resolve_json(&self) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["resolve", "--json"])
            .output()
            .expect("failed to run chainconf resolve --json");
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("resolve --json printed invalid JSON")
    }

    /// Shortcut for `chainconf check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run chainconf check")
    }

    /// Shortcut for `chainconf networks`.
    pub fn networks(&self) -> Output {
        self.cmd()
            .arg("networks")
            .output()
            .expect("failed to run chainconf networks")
    }
}
