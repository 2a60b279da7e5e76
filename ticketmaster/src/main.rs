//! Ticketmaster CLI
//!
//! Command-line interface for the Ticketmaster Commerce API.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::IsTerminal;
use std::path::Path;
use ticketmaster::cli::{
    format_failure, generate_completion, handle_config, handle_events, handle_info, Cli, Commands,
};
use ticketmaster::client::TicketmasterClient;
use ticketmaster::format::colors_enabled;
use ticketmaster::config::{resolve_config_path, CliConfig, FileConfigStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if !colors_enabled(
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    ) {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = match command {
        Commands::Config { command } => open_store(cli.config.as_deref())
            .and_then(|mut store| handle_config(command, &mut store)),
        Commands::Events { command } => {
            match build_client(cli.config.as_deref(), cli.timeout) {
                Ok(client) => handle_events(&client, command, !cli.quiet).await,
                Err(e) => Err(e),
            }
        }
        Commands::Info => {
            handle_info();
            Ok(())
        }
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", format_failure(&e));
        tracing::debug!(error = ?e, "command failed");
        std::process::exit(1);
    }

    Ok(())
}

fn open_store(config_flag: Option<&Path>) -> Result<FileConfigStore> {
    FileConfigStore::open(resolve_config_path(config_flag))
}

/// Resolve settings using the priority chain: flags → env → config file → defaults
fn build_client(config_flag: Option<&Path>, timeout: Option<u64>) -> Result<TicketmasterClient> {
    let store = open_store(config_flag)?;

    let mut builder = CliConfig::builder();
    if let Some(timeout) = timeout {
        builder = builder.with_timeout(timeout)?;
    }

    let config = builder.with_env_overrides().with_store(&store).build()?;

    tracing::debug!(
        base_url = %config.base_url,
        api_key_set = config.api_key.is_some(),
        timeout = config.timeout,
        "resolved configuration"
    );

    Ok(TicketmasterClient::new(&config)?)
}

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
