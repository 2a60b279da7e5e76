//! HTTP client for the Ticketmaster Commerce API.

use crate::config::CliConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use ticketmaster_core::{Result, TicketmasterError};

/// Header carrying the API key (`X-SSL-CERT-UID`)
pub const API_KEY_HEADER: &str = "x-ssl-cert-uid";

/// Normalize a base URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// HTTP client bound to one base URL and a fixed set of default headers.
///
/// Every request carries `Accept: application/json` and
/// `Content-Type: application/json`; `X-SSL-CERT-UID` is added only when an
/// API key is configured. Requests are issued once, never retried.
///
/// # Examples
///
/// ```no_run
/// use ticketmaster::client::TicketmasterClient;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = TicketmasterClient::with_config(
///     "https://www.ticketmaster.com/commerce/v2",
///     Some("my-api-key"),
///     30, // timeout in seconds
/// )?;
///
/// let body = client.fetch_offers("0B004F0A1B2C3D4E", &[]).await?;
/// println!("{}", serde_json::to_string_pretty(&body)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TicketmasterClient {
    client: Client,
    base_url: String,
}

impl TicketmasterClient {
    /// Create a client from resolved CLI configuration.
    pub fn new(config: &CliConfig) -> Result<Self> {
        Self::with_config(&config.base_url, config.api_key.as_deref(), config.timeout)
    }

    /// Create a client with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be sent as a header value or
    /// the HTTP client cannot be created.
    pub fn with_config(base_url: &str, api_key: Option<&str>, timeout_secs: u64) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key).map_err(|_| {
                TicketmasterError::Config(
                    "API key contains characters that are not allowed in a header".to_string(),
                )
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("ticketmaster-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TicketmasterError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: normalize_url(base_url),
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the offers endpoint for an event.
    pub fn offers_url(&self, event_id: &str) -> String {
        format!(
            "{}/events/{}/offers",
            self.base_url,
            urlencoding::encode(event_id)
        )
    }

    /// Fetch the offers document for an event.
    ///
    /// The body is returned untouched (key order preserved) so callers can
    /// echo it verbatim or interpret it with
    /// [`OffersResponse::from_value`](ticketmaster_core::OffersResponse::from_value).
    ///
    /// # Arguments
    ///
    /// * `event_id` - Event identifier
    /// * `params` - Query parameters, passed through verbatim
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The event ID is empty or whitespace
    /// - No response was received, or the timeout expired
    /// - The server answered with a non-success status
    /// - The success body is not JSON
    pub async fn fetch_offers(
        &self,
        event_id: &str,
        params: &[(String, String)],
    ) -> Result<serde_json::Value> {
        if event_id.trim().is_empty() {
            return Err(TicketmasterError::InvalidInput(
                "Event ID cannot be empty".to_string(),
            ));
        }

        let url = self.offers_url(event_id);
        tracing::debug!(%url, params = params.len(), "fetching offers");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(classify_send_error)?;

        Self::handle_response(response).await
    }

    /// Turn an HTTP response into a JSON document or an API error.
    async fn handle_response(response: Response) -> Result<serde_json::Value> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        let text = response.text().await.map_err(classify_send_error)?;

        if !status.is_success() {
            return Err(TicketmasterError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: Some(text).filter(|body| !body.trim().is_empty()),
            });
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            TicketmasterError::Decode(format!("response body is not valid JSON: {}", e))
        })
    }
}

/// Map a reqwest failure without a usable response onto the error taxonomy.
fn classify_send_error(err: reqwest::Error) -> TicketmasterError {
    if err.is_timeout() {
        TicketmasterError::Timeout(err.to_string())
    } else {
        TicketmasterError::Transport(err.to_string())
    }
}
