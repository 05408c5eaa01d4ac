// SPDX-FileCopyrightText: 2026 Vaultkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vaultkeep - a client-side encrypted credential vault.
//!
//! This is the binary entry point.

mod commands;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use vaultkeep_config::VaultkeepConfig;
use vaultkeep_core::{ItemId, VaultError};

/// Vaultkeep - a client-side encrypted credential vault.
#[derive(Parser, Debug)]
#[command(name = "vaultkeep", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Account identifier (usually an email address). Overrides `client.account`.
    #[arg(long, global = true, value_name = "EMAIL")]
    account: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt and store a new credential.
    Add(RecordArgs),
    /// Decrypt and show one credential.
    Get {
        id: ItemId,
        /// Print the password instead of a masked preview.
        #[arg(long)]
        show: bool,
    },
    /// List all credentials, newest first.
    List,
    /// Change fields of a stored credential. Unspecified fields are kept.
    Edit {
        id: ItemId,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Delete a stored credential.
    Rm { id: ItemId },
    /// Generate a random password.
    Generate(GenerateArgs),
    /// Score a password's strength.
    Strength { password: String },
    /// Print a random 32-byte hex secret for signing session tokens.
    GenSecret,
    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Load and validate configuration, then print the effective settings.
    Check,
}

/// Record fields accepted by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub(crate) struct RecordArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Password to store. Prompted for when neither this nor --generate is given.
    #[arg(long, conflicts_with = "generate")]
    pub password: Option<String>,
    /// Store a freshly generated password.
    #[arg(long)]
    pub generate: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Password length (defaults to `generator.length`).
    #[arg(long)]
    pub length: Option<usize>,
    #[arg(long)]
    pub no_lowercase: bool,
    #[arg(long)]
    pub no_uppercase: bool,
    #[arg(long)]
    pub no_numbers: bool,
    #[arg(long)]
    pub no_symbols: bool,
    /// Leave out i l 1 L o 0 O.
    #[arg(long)]
    pub exclude_look_alikes: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vaultkeep: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.client.log_level);

    if let Err(e) = run(cli, &config).await {
        eprintln!("vaultkeep: {e}");
        if e.is_reauth_required() {
            eprintln!("vaultkeep: check the master password and account, then try again");
        }
        std::process::exit(1);
    }
}

/// Load and validate configuration, rendering every diagnostic on failure.
///
/// The returned error carries the first problem found.
fn load_config(path: Option<&Path>) -> Result<VaultkeepConfig, VaultError> {
    let loaded = match path {
        Some(path) => vaultkeep_config::load_and_validate_path(path),
        None => vaultkeep_config::load_and_validate(),
    };
    loaded.map_err(|errors| {
        vaultkeep_config::render_errors(&errors);
        errors.into_iter().next().map_or_else(
            || VaultError::Config("configuration could not be loaded".to_string()),
            VaultError::from,
        )
    })
}

async fn run(cli: Cli, config: &VaultkeepConfig) -> Result<(), VaultError> {
    let account = cli.account.as_deref();
    match cli.command {
        Commands::Add(fields) => commands::items::add(config, account, fields).await,
        Commands::Get { id, show } => commands::items::get(config, account, &id, show).await,
        Commands::List => commands::items::list(config, account).await,
        Commands::Edit { id, fields } => commands::items::edit(config, account, &id, fields).await,
        Commands::Rm { id } => commands::items::remove(config, account, &id).await,
        Commands::Generate(args) => commands::generate::generate(config, &args),
        Commands::Strength { password } => {
            commands::generate::strength(&password);
            Ok(())
        }
        Commands::GenSecret => commands::generate::gen_secret(),
        Commands::Config {
            action: ConfigCommands::Check,
        } => {
            commands::config::check(config, cli.config.as_deref());
            Ok(())
        }
    }
}

/// Log to stderr so stdout stays clean for generated passwords and listings.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vaultkeep={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
