//! CLI command and subcommand definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::format::OutputFormat;

/// Ticketmaster CLI - Event ticketing & commerce from your terminal
#[derive(Parser, Debug)]
#[command(name = "ticketmaster")]
#[command(
    version,
    about = "Ticketmaster CLI - Event ticketing & commerce from your terminal",
    long_about = None
)]
pub struct Cli {
    /// Config file path (default: <config dir>/ticketmaster/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides environment)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide the progress spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage events and offers
    Events {
        #[command(subcommand)]
        command: EventsCommands,
    },

    /// Show API information and limitations
    Info,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set configuration values
    Set {
        /// API key (X-SSL-CERT-UID)
        #[arg(long)]
        api_key: Option<String>,

        /// API base URL (default: https://www.ticketmaster.com/commerce/v2)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove all stored configuration values
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum EventsCommands {
    /// Get available offers for an event
    Offers(OffersArgs),
}

#[derive(Args, Debug)]
pub struct OffersArgs {
    /// Event identifier
    pub event_id: String,

    /// Output as JSON
    #[arg(long, conflicts_with = "table")]
    pub json: bool,

    /// Output as a table
    #[arg(long)]
    pub table: bool,

    /// Extra query parameter as KEY=VALUE (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_query_param)]
    pub params: Vec<(String, String)>,
}

impl OffersArgs {
    /// Output format selected by the flags
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.table {
            OutputFormat::Table
        } else {
            OutputFormat::Detail
        }
    }
}

/// Parse a `KEY=VALUE` query parameter; the value may itself contain `=`.
fn parse_query_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
