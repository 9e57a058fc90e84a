//! Test fixtures and constants.

use chainconf::NetworkDescriptor;

/// Alchemy endpoint used as the whole sepolia URL.
pub const ALCHEMY_URL: &str = "https://eth-sepolia.g.alchemy.com/v2/test-api-key-123";

/// Private key used as the sepolia signer.
pub const PRIVATE_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

/// A config sending artifacts to `client/app/artifacts` inside the project.
pub const SAMPLE_CONFIG: &str = r#"
[chainconf]
version = "0.1.0"
compiler = "0.8.24"

[paths]
consumer_root = "client/app"
artifacts = "artifacts"

[[networks]]
name = "sepolia"
endpoint = "${ALCHEMY_API_KEY}"
chain_id = 11155111
required_secrets = ["ALCHEMY_API_KEY", "PRIVATE_KEY"]
accounts = ["PRIVATE_KEY"]

[[networks]]
name = "localhost"
endpoint = "http://127.0.0.1:8545"
chain_id = 31337
enabled = false

[profiles]
testnet = ["sepolia"]
local = ["localhost"]
"#;

/// `.env` providing both sepolia secrets.
pub const SAMPLE_ENV: &str = "ALCHEMY_API_KEY=https://eth-sepolia.g.alchemy.com/v2/test-api-key-123\nPRIVATE_KEY=0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d\n";

/// `.env` providing only the endpoint secret.
pub const ENV_WITHOUT_PRIVATE_KEY: &str =
    "ALCHEMY_API_KEY=https://eth-sepolia.g.alchemy.com/v2/test-api-key-123\n";

/// The sepolia descriptor from `SAMPLE_CONFIG`, for library-level tests.
pub fn sepolia() -> NetworkDescriptor {
    NetworkDescriptor::new("sepolia", "${ALCHEMY_API_KEY}", 11155111)
        .with_secret("ALCHEMY_API_KEY")
        .with_account("PRIVATE_KEY")
}
