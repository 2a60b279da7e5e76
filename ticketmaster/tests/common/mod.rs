//! Shared test utilities for ticketmaster integration tests
//!
//! Provides an in-process mock of the Commerce API offers endpoint and a
//! hermetic command factory for the `ticketmaster` binary.
//!
//! The mock answers `GET /events/{event_id}/offers`; the event id selects
//! the scenario:
//!
//! | event id       | response                                        |
//! |----------------|-------------------------------------------------|
//! | `empty`        | 200 `{"offers": []}`                            |
//! | `missing`      | 404 with an empty body                          |
//! | `broken`       | 500 with a JSON error document                  |
//! | `unauthorized` | 401 unless `X-SSL-CERT-UID` is [`TEST_API_KEY`] |
//! | `slow`         | the sample document after [`SLOW_DELAY`]        |
//! | `garbage`      | 200 with a non-JSON body                        |
//! | `echo`         | 200 echoing the query parameters                |
//! | `odd`          | 200 with oddly typed optional fields            |
//! | anything else  | 200 [`sample_offers`]                           |

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// API key the `unauthorized` scenario accepts
pub const TEST_API_KEY: &str = "test-key-0042";

/// How long the `slow` scenario waits before answering
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

/// One request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub event_id: String,
    pub query: Vec<(String, String)>,
    pub api_key: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
}

/// Mock server state
#[derive(Debug, Clone, Default)]
pub struct MockServerState {
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Mock Commerce API server
#[derive(Debug, Default)]
pub struct MockServer {
    state: MockServerState,
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the mock server and return its base URL
    pub async fn start(self) -> Result<(Self, String)> {
        let app = Router::new()
            .route("/events/:event_id/offers", get(offers_handler))
            .with_state(self.state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://127.0.0.1:{}", listener.local_addr()?.port());

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        Ok((self, base_url))
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Offers document served for ordinary event ids
pub fn sample_offers() -> Value {
    json!({
        "offers": [
            {
                "id": "000000000001",
                "type": "offer",
                "attributes": {
                    "name": "Standard Admission",
                    "offerType": "standard",
                    "description": "General admission ticket",
                    "currency": "USD",
                    "prices": [
                        { "priceZone": "Floor", "value": "50.00", "total": "57.50" },
                        { "priceZone": "Balcony", "value": "35.00", "total": "41.00" }
                    ],
                    "limit": { "min": 1, "max": 8 },
                    "start": "2026-11-01T10:00:00Z",
                    "end": "2026-12-01T04:00:00Z"
                }
            },
            {
                "id": "000000000002",
                "type": "offer",
                "attributes": { "name": "VIP Package" }
            }
        ],
        "_embedded": {
            "priceZones": { "data": [{ "id": "1" }, { "id": "2" }] },
            "areas": { "data": [] },
            "passwords": { "data": [{ "id": "p1" }] }
        }
    })
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

async fn offers_handler(
    Path(event_id): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    State(state): State<MockServerState>,
) -> Response {
    let api_key = header(&headers, "x-ssl-cert-uid");

    state.requests.lock().unwrap().push(RecordedRequest {
        event_id: event_id.clone(),
        query: query.clone(),
        api_key: api_key.clone(),
        accept: header(&headers, "accept"),
        content_type: header(&headers, "content-type"),
    });

    match event_id.as_str() {
        "empty" => Json(json!({ "offers": [] })).into_response(),
        "missing" => StatusCode::NOT_FOUND.into_response(),
        "broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "errors": [{ "code": "SERVER_ERROR", "detail": "boom" }] })),
        )
            .into_response(),
        "unauthorized" if api_key.as_deref() != Some(TEST_API_KEY) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "errors": [{ "code": "UNAUTHORIZED" }] })),
        )
            .into_response(),
        "slow" => {
            tokio::time::sleep(SLOW_DELAY).await;
            Json(sample_offers()).into_response()
        }
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "odd" => Json(json!({
            "offers": [{
                "id": 17,
                "attributes": {
                    "name": 42,
                    "limit": { "min": "1", "max": 8 },
                    "prices": "call for pricing"
                }
            }],
            "_embedded": {
                "priceZones": { "data": [{ "id": "1" }] },
                "areas": { "data": { "x": 1 } }
            }
        }))
        .into_response(),
        "echo" => {
            let echoed: serde_json::Map<String, Value> = query
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            Json(json!({ "offers": [], "query": echoed })).into_response()
        }
        _ => Json(sample_offers()).into_response(),
    }
}

/// Returns a hermetic `ticketmaster` command.
///
/// - Colors are disabled.
/// - The config file lives at `config_path`.
/// - `TICKETMASTER_*` overrides and `RUST_LOG` from the host are cleared.
pub fn ticketmaster_cmd(config_path: &std::path::Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ticketmaster");

    cmd.env("NO_COLOR", "1")
        .env("TICKETMASTER_CONFIG", config_path)
        .env_remove("TICKETMASTER_API_KEY")
        .env_remove("TICKETMASTER_BASE_URL")
        .env_remove("TICKETMASTER_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}
