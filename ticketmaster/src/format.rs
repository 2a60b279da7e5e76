//! Output formatting utilities for the CLI
//!
//! Every function here returns the text to print; nothing writes to the
//! terminal directly. Colors come from `colored` and collapse to plain text
//! when coloring is disabled.

use colored::*;
use serde_json::{json, Value};
use ticketmaster_core::{Offer, OffersResponse, Price, Result, TicketmasterError};

use crate::table::{render_table, Column};

/// Output format for the offers listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Itemized, human-readable listing
    #[default]
    Detail,
    /// One row per offer
    Table,
    /// Response body verbatim, pretty-printed
    Json,
}

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_PRICE_ZONE: &str = "General";

/// Whether colored output is wanted given which streams are terminals.
///
/// Notices go to stderr and results to stdout, so both must be terminals.
pub fn colors_enabled(stdout_is_terminal: bool, stderr_is_terminal: bool) -> bool {
    stdout_is_terminal && stderr_is_terminal
}

/// Format success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

/// Format error message
pub fn format_error(message: &str) -> String {
    format!("{} {}", "✗".red(), message)
}

/// Format warning message
pub fn format_warning(message: &str) -> String {
    format!("{} {}", "⚠".yellow(), message)
}

/// Pretty-print a JSON document with 2-space indentation, key order untouched.
pub fn format_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format an offers response body in the requested format.
///
/// JSON output short-circuits before the body is interpreted, so it works for
/// any document the server returns.
pub fn format_offers_response(body: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(body),
        OutputFormat::Detail => Ok(format_offers(&OffersResponse::from_value(body)?)),
        OutputFormat::Table => Ok(format_offers_table(&OffersResponse::from_value(body)?)),
    }
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn identity_line(label: &str, value: &str) -> String {
    format!("  {:<13} {}", label, value)
}

fn price_line(price: &Price) -> String {
    format!(
        "    - {}: {} (Total: {})",
        price.price_zone.as_deref().unwrap_or(DEFAULT_PRICE_ZONE),
        price
            .value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        price
            .total
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    )
}

fn format_offer(index: usize, offer: &Offer, lines: &mut Vec<String>) {
    let attrs = &offer.attributes;
    let id = offer.id.as_ref().map(ToString::to_string);

    lines.push(format!("Offer {}:", index + 1).cyan().to_string());
    lines.push(identity_line("ID:", or_na(id.as_deref())));
    lines.push(identity_line("Name:", or_na(attrs.name.as_deref())));
    lines.push(identity_line("Type:", or_na(attrs.offer_type.as_deref())));
    lines.push(identity_line(
        "Description:",
        or_na(attrs.description.as_deref()),
    ));
    lines.push(identity_line("Currency:", or_na(attrs.currency.as_deref())));

    if !attrs.prices.is_empty() {
        lines.push("  Prices:".to_string());
        lines.extend(attrs.prices.iter().map(price_line));
    }

    if let Some(limit) = &attrs.limit {
        lines.push("  Limits:".to_string());
        if let Some(min) = &limit.min {
            lines.push(format!("    Min: {}", min));
        }
        if let Some(max) = &limit.max {
            lines.push(format!("    Max: {}", max));
        }
    }

    if attrs.has_availability() {
        lines.push("  Availability:".to_string());
        if let Some(start) = &attrs.start {
            lines.push(format!("    Start: {}", start));
        }
        if let Some(end) = &attrs.end {
            lines.push(format!("    End: {}", end));
        }
    }

    lines.push(String::new());
}

/// Format the itemized offer listing
pub fn format_offers(response: &OffersResponse) -> String {
    if response.offers.is_empty() {
        return format_warning("No offers available for this event");
    }

    let mut lines = vec![
        String::new(),
        format!("Event Offers ({} found)", response.offers.len())
            .bold()
            .to_string(),
        String::new(),
    ];

    for (index, offer) in response.offers.iter().enumerate() {
        format_offer(index, offer, &mut lines);
    }

    if let Some(embedded) = &response.embedded {
        lines.push("Additional Information:".bold().to_string());
        for (kind, count) in embedded.counts() {
            lines.push(format!("  {}: {}", kind.label(), count));
        }
        lines.push(String::new());
    }

    lines.push(format_success("Use --json flag for full details"));
    lines.join("\n")
}

/// Columns of the offers table
pub fn offer_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("name", "Name"),
        Column::new("offerType", "Type"),
        Column::new("currency", "Currency"),
        Column::new("prices", "Prices").with_format(|value, _row| {
            let prices: Vec<Price> = value
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default();
            prices
                .iter()
                .map(|price| {
                    format!(
                        "{}: {}",
                        price.price_zone.as_deref().unwrap_or(DEFAULT_PRICE_ZONE),
                        price
                            .value
                            .as_ref()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                    )
                })
                .collect::<Vec<_>>()
                .join(", ")
        }),
        Column::new("start", "Start"),
        Column::new("end", "End"),
    ]
}

/// One table row per offer
pub fn offer_rows(response: &OffersResponse) -> Vec<Value> {
    response
        .offers
        .iter()
        .map(|offer| {
            let attrs = &offer.attributes;
            json!({
                "id": offer.id,
                "name": attrs.name,
                "offerType": attrs.offer_type,
                "currency": attrs.currency,
                "prices": attrs.prices,
                "start": attrs.start,
                "end": attrs.end,
            })
        })
        .collect()
}

/// Format offers as a table
pub fn format_offers_table(response: &OffersResponse) -> String {
    render_table(&offer_rows(response), &offer_columns())
}

/// Format a failure for the error stream.
///
/// API errors carry the response body (pretty-printed when it is JSON) on
/// the lines after the notice.
pub fn format_error_report(err: &TicketmasterError) -> String {
    let notice = format_error(&err.to_string());

    match err {
        TicketmasterError::Api {
            body: Some(body), ..
        } => {
            let detail = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|value| serde_json::to_string_pretty(&value).ok())
                .unwrap_or_else(|| body.clone());
            format!("{}\n{}", notice, detail.dimmed())
        }
        _ => notice,
    }
}

/// Mask an API key down to its last four characters.
pub fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("***{}", tail)
}

/// Format the stored configuration
pub fn format_config(
    api_key: Option<&str>,
    base_url: Option<&str>,
    as_json: bool,
) -> Result<String> {
    let api_key = api_key.filter(|key| !key.is_empty()).map(redact_api_key);
    let base_url = base_url.filter(|url| !url.is_empty());

    if as_json {
        let value = json!({
            "apiKey": api_key,
            "baseUrl": base_url.unwrap_or(ticketmaster_core::DEFAULT_BASE_URL),
            "baseUrlIsDefault": base_url.is_none(),
        });
        return format_json(&value);
    }

    let api_key = api_key.unwrap_or_else(|| "Not set".to_string());
    let base_url = base_url
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("{} (default)", ticketmaster_core::DEFAULT_BASE_URL));

    let lines = [
        String::new(),
        "Ticketmaster CLI Configuration".bold().to_string(),
        String::new(),
        format!("API Key:   {}", api_key.cyan()),
        format!("Base URL:  {}", base_url.cyan()),
        String::new(),
    ];

    Ok(lines.join("\n"))
}

/// Static description of the Commerce API
pub fn format_info() -> String {
    let lines = [
        String::new(),
        "Ticketmaster Commerce API v2".bold().to_string(),
        String::new(),
        "The Commerce API provides access to event offers and ticketing data.".to_string(),
        String::new(),
        "API Limitations:".yellow().to_string(),
        "  - Requires API key (X-SSL-CERT-UID) for most operations".to_string(),
        "  - Currently supports event offers lookup only".to_string(),
        "  - Transaction capabilities require approved access".to_string(),
        String::new(),
        "Available Commands:".cyan().to_string(),
        "  ticketmaster events offers <eventId>  Get offers for an event".to_string(),
        "  ticketmaster config set --api-key KEY Set your API key".to_string(),
        String::new(),
        "For event search and discovery, use the Discovery API."
            .dimmed()
            .to_string(),
        "API Documentation: http://developer.ticketmaster.com/"
            .dimmed()
            .to_string(),
        String::new(),
    ];

    lines.join("\n")
}
