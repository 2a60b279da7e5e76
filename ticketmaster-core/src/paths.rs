//! Default path resolution for the persisted configuration file
//!
//! Uses the platform config directory when available, with a local fallback.

use std::path::PathBuf;

/// Namespace under which all persisted state is stored.
pub const APP_NAMESPACE: &str = "ticketmaster";

/// Returns the default path for the CLI configuration file.
///
/// - Linux: `~/.config/ticketmaster/config.toml`
/// - macOS: `~/Library/Application Support/ticketmaster/config.toml`
/// - Fallback: `./ticketmaster/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAMESPACE)
        .join("config.toml")
}
