//! Ticketmaster CLI Library
//!
//! This library provides the core functionality for the `ticketmaster` CLI
//! tool: a client for the Commerce API offers endpoint, persisted
//! configuration, and the terminal renderers.
//!
//! # Public API
//!
//! The primary public API is [`client::TicketmasterClient`]. Configuration
//! types are available via [`config::CliConfig`], [`config::ConfigBuilder`]
//! and the [`config::ConfigStore`] trait.
//!
//! ```no_run
//! use ticketmaster::client::TicketmasterClient;
//! use ticketmaster::config::{CliConfig, FileConfigStore};
//! use ticketmaster_core::{default_config_path, OffersResponse};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = FileConfigStore::open(default_config_path())?;
//! let config = CliConfig::builder().with_store(&store).build()?;
//! let client = TicketmasterClient::new(&config)?;
//!
//! let body = client.fetch_offers("0B004F0A1B2C3D4E", &[]).await?;
//! let response = OffersResponse::from_value(&body)?;
//! println!("{} offers", response.offers.len());
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for the Commerce API.
pub mod client;

/// Configuration types for the CLI tool.
pub mod config;

/// Terminal output formatting.
pub mod format;

// Progress spinner - not part of public API
#[doc(hidden)]
pub mod progress;

/// Generic text table renderer.
pub mod table;
