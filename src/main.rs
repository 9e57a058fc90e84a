//! Chainconf - deployment configuration resolver for smart-contract toolchains.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chainconf::cli::output;
use chainconf::cli::{execute, Cli};
use chainconf::core::constants;
use chainconf::error::{ConfigError, Error, SecretError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("chainconf=debug")
        } else {
            EnvFilter::new("chainconf=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.options) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Follow-up action for errors the operator can fix directly.
fn suggestion(error: &Error) -> Option<&'static str> {
    match error {
        Error::Config(ConfigError::NotFound(_)) => Some("run: chainconf init"),
        Error::Config(ConfigError::AlreadyExists(_)) => Some("run: chainconf init --force"),
        Error::Config(ConfigError::UnknownProfile(_)) => Some("run: chainconf networks"),
        Error::Secret(SecretError::MissingSecrets { .. }) => {
            Some("set the missing secrets in the environment or .env")
        }
        Error::Configuration(report)
            if report.iter().any(|f| {
                matches!(f.error, Error::Secret(SecretError::MissingSecrets { .. }))
            }) =>
        {
            Some("set the missing secrets in the environment or .env")
        }
        _ => None,
    }
}
