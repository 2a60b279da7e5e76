//! Command execution handlers

use anyhow::Result;
use ticketmaster_core::TicketmasterError;

use crate::client::TicketmasterClient;
use crate::config::{validate_url, ConfigKey, ConfigStore};
use crate::format::{
    format_config, format_error, format_error_report, format_info, format_offers_response,
    format_success,
};
use crate::progress::with_spinner;

use super::commands::*;

/// Handle config commands
///
/// Local validation problems are reported as error notices and are not
/// treated as failures of the command.
pub fn handle_config(command: ConfigCommands, store: &mut dyn ConfigStore) -> Result<()> {
    match command {
        ConfigCommands::Set { api_key, base_url } => {
            let api_key = api_key.filter(|key| !key.is_empty());
            let base_url = base_url.filter(|url| !url.is_empty());

            if api_key.is_none() && base_url.is_none() {
                eprintln!(
                    "{}",
                    format_error(&TicketmasterError::NoConfigOptions.to_string())
                );
                return Ok(());
            }

            if let Some(url) = &base_url {
                if let Err(e) = validate_url(url) {
                    eprintln!("{}", format_error(&e.to_string()));
                    return Ok(());
                }
            }

            if let Some(key) = api_key {
                store.set(ConfigKey::ApiKey, &key)?;
                println!("{}", format_success("API key set"));
            }

            if let Some(url) = base_url {
                store.set(ConfigKey::BaseUrl, &url)?;
                println!("{}", format_success("Base URL set"));
            }
        }
        ConfigCommands::Show { json } => {
            let api_key = store.get(ConfigKey::ApiKey);
            let base_url = store.get(ConfigKey::BaseUrl);
            println!(
                "{}",
                format_config(api_key.as_deref(), base_url.as_deref(), json)?
            );
        }
        ConfigCommands::Reset => {
            store.clear()?;
            println!("{}", format_success("Configuration reset to defaults"));
        }
    }

    Ok(())
}

/// Handle events commands
pub async fn handle_events(
    client: &TicketmasterClient,
    command: EventsCommands,
    show_progress: bool,
) -> Result<()> {
    match command {
        EventsCommands::Offers(args) => handle_offers(client, args, show_progress).await,
    }
}

/// Handle `events offers`
///
/// Nothing reaches stdout unless the whole response was fetched and
/// formatted.
pub async fn handle_offers(
    client: &TicketmasterClient,
    args: OffersArgs,
    show_progress: bool,
) -> Result<()> {
    let body = with_spinner(
        show_progress,
        format!("Fetching offers for event {}...", args.event_id),
        client.fetch_offers(&args.event_id, &args.params),
    )
    .await?;

    let output = format_offers_response(&body, args.output_format())?;
    println!("{}", output);

    Ok(())
}

/// Handle info command
pub fn handle_info() {
    println!("{}", format_info());
}

/// Format a command failure for the error stream
pub fn format_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TicketmasterError>() {
        Some(err) => format_error_report(err),
        None => format_error(&format!("{:#}", err)),
    }
}

/// Generate shell completion script
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;

    #[test]
    fn test_config_set_without_options_changes_nothing() {
        let mut store = MemoryConfigStore::default();
        let command = ConfigCommands::Set {
            api_key: None,
            base_url: None,
        };

        handle_config(command, &mut store).unwrap();
        assert_eq!(store.get(ConfigKey::ApiKey), None);
        assert_eq!(store.get(ConfigKey::BaseUrl), None);
    }

    #[test]
    fn test_config_set_empty_values_count_as_missing() {
        let mut store = MemoryConfigStore::default();
        store.set(ConfigKey::ApiKey, "existing").unwrap();

        let command = ConfigCommands::Set {
            api_key: Some(String::new()),
            base_url: Some(String::new()),
        };

        handle_config(command, &mut store).unwrap();
        assert_eq!(store.get(ConfigKey::ApiKey).as_deref(), Some("existing"));
        assert_eq!(store.get(ConfigKey::BaseUrl), None);
    }

    #[test]
    fn test_config_set_empty_key_keeps_base_url() {
        let mut store = MemoryConfigStore::default();
        let command = ConfigCommands::Set {
            api_key: Some(String::new()),
            base_url: Some("http://localhost:4000".to_string()),
        };

        handle_config(command, &mut store).unwrap();
        assert_eq!(store.get(ConfigKey::ApiKey), None);
        assert_eq!(
            store.get(ConfigKey::BaseUrl).as_deref(),
            Some("http://localhost:4000")
        );
    }

    #[test]
    fn test_config_set_both_values() {
        let mut store = MemoryConfigStore::default();
        let command = ConfigCommands::Set {
            api_key: Some("key-1234".to_string()),
            base_url: Some("http://localhost:4000".to_string()),
        };

        handle_config(command, &mut store).unwrap();
        assert_eq!(store.get(ConfigKey::ApiKey).as_deref(), Some("key-1234"));
        assert_eq!(
            store.get(ConfigKey::BaseUrl).as_deref(),
            Some("http://localhost:4000")
        );
    }

    #[test]
    fn test_config_set_invalid_url_changes_nothing() {
        let mut store = MemoryConfigStore::default();
        let command = ConfigCommands::Set {
            api_key: Some("key-1234".to_string()),
            base_url: Some("localhost:4000".to_string()),
        };

        handle_config(command, &mut store).unwrap();
        assert_eq!(store.get(ConfigKey::ApiKey), None);
        assert_eq!(store.get(ConfigKey::BaseUrl), None);
    }

    #[test]
    fn test_config_reset() {
        let mut store = MemoryConfigStore::default();
        store.set(ConfigKey::ApiKey, "key").unwrap();

        handle_config(ConfigCommands::Reset, &mut store).unwrap();
        assert_eq!(store.get(ConfigKey::ApiKey), None);
    }

    #[test]
    fn test_format_failure_uses_error_report() {
        colored::control::set_override(false);

        let err = anyhow::Error::new(TicketmasterError::Api {
            status: 404,
            status_text: "Not Found".to_string(),
            body: None,
        });
        assert_eq!(format_failure(&err), "✗ API Error: 404 - Not Found");

        let err = anyhow::anyhow!("disk full").context("Failed to write CLI config file");
        assert_eq!(
            format_failure(&err),
            "✗ Failed to write CLI config file: disk full"
        );
    }
}
