//! Error types for the Ticketmaster CLI

use thiserror::Error;

/// Core error type for Ticketmaster operations
#[derive(Error, Debug)]
pub enum TicketmasterError {
    /// The server answered with a non-success status
    #[error("API Error: {status} - {status_text}")]
    Api {
        status: u16,
        status_text: String,
        /// Raw response body, if the server sent one
        body: Option<String>,
    },

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// No response was received (connection, DNS, request setup)
    #[error("{0}")]
    Transport(String),

    /// The response body could not be interpreted
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// `config set` was invoked without any value to set
    #[error("No options provided. Use --api-key or --base-url")]
    NoConfigOptions,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Ticketmaster operations
pub type Result<T> = std::result::Result<T, TicketmasterError>;

impl From<serde_json::Error> for TicketmasterError {
    fn from(err: serde_json::Error) -> Self {
        TicketmasterError::Serialization(err.to_string())
    }
}
