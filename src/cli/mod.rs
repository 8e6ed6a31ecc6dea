//! Command-line interface.

pub mod completions;
pub mod output;
pub mod read;
pub mod requirements;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Buildcreds - build-time credential provisioning.
#[derive(Parser)]
#[command(
    name = "buildcreds",
    about = "Provision build credentials from Vault and the environment",
    version,
    after_help = "Evaluate secrets with: eval \"$(buildcreds read dev)\""
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Read build secrets from Vault and print them as shell exports
    Read {
        /// Deployment namespace (dev, staging or prod)
        namespace: String,
        /// Vault server URL (default: VAULT_ADDR, VAULT, then LEAF_TEAM_VAULT_ADDR)
        #[arg(long)]
        vault_url: Option<String>,
        /// GitHub token for Vault login (default: VAULT_LOGIN, then VAULT_GITHUB_AUTH_TOKEN)
        #[arg(long)]
        github_token: Option<String>,
    },

    /// Write credentialed copies of requirements files
    Requirements {
        /// Item to process, or "all"
        #[arg(default_value = "all")]
        item: String,
        /// Repository root the requirements paths are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,
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
///
/// # Returns
///
/// The process exit code.
pub fn execute(command: Command) -> crate::error::Result<i32> {
    use Command::*;

    match command {
        Read {
            namespace,
            vault_url,
            github_token,
        } => read::execute(&namespace, vault_url, github_token),
        Requirements { item, root } => requirements::execute(&item, &root),
        Completions { shell } => completions::execute(shell),
    }
}
