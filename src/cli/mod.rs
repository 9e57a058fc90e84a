//! Command-line interface.

pub mod check;
pub mod completions;
pub mod context;
pub mod init;
pub mod networks;
pub mod output;
pub mod resolve;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants;

/// Chainconf - deployment configuration resolver for smart-contract toolchains.
#[derive(Parser)]
#[command(
    name = "chainconf",
    about = "Resolve multi-network deployment configuration for smart-contract builds",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct Options {
    /// Path to the configuration file
    #[arg(
        long,
        global = true,
        env = "CHAINCONF_CONFIG",
        default_value = constants::CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Dotenv file to read secrets from (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Read secrets from the environment only
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_dotenv: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a starter chainconf.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Resolve the deployment configuration and print it
    Resolve {
        /// Profile selecting which networks to resolve
        #[arg(short, long)]
        profile: Option<String>,
        /// Output as JSON (secrets redacted)
        #[arg(long)]
        json: bool,
    },

    /// Check that every selected network resolves
    Check {
        /// Profile selecting which networks to check
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// List declared networks and profiles
    Networks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a build command with the resolved configuration in its environment
    Run {
        /// Profile selecting which networks to resolve
        #[arg(short, long)]
        profile: Option<String>,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, options: &Options) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init { force } => init::execute(options, force),
        Resolve { profile, json } => resolve::execute(options, profile.as_deref(), json),
        Check { profile } => check::execute(options, profile.as_deref()),
        Networks { json } => networks::execute(options, json),
        Run { profile, command } => run::execute(options, profile.as_deref(), &command),
        Completions { shell } => completions::execute(shell),
    }
}
