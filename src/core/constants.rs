//! Constants used throughout chainconf.
//!
//! Centralizes magic strings and configuration values.

/// Project configuration file name.
pub const CONFIG_FILE: &str = "chainconf.toml";

/// Default dotenv file consulted after the process environment.
pub const DOTENV_FILE: &str = ".env";

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "CHAINCONF_LOG";

/// Prefix for variables injected into `chainconf run` children.
pub const RUN_ENV_PREFIX: &str = "CHAINCONF_";

/// Rendered in place of any secret value.
pub const REDACTED: &str = "<redacted>";

/// URL schemes accepted for network endpoints.
pub const ENDPOINT_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// Current configuration file format version.
pub const FORMAT_VERSION: &str = "0.1.0";

/// Upper-case a network name into an env var segment (`my-net` -> `MY_NET`).
pub fn env_segment(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
