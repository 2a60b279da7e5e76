//! Ticketmaster Core Library
//!
//! Shared types, models, and errors for the Ticketmaster Commerce CLI.
//! Nothing in this crate performs I/O beyond resolving default paths.

pub mod api;
pub mod error;
pub mod paths;

// Re-export commonly used types
pub use api::*;
pub use error::*;
pub use paths::{default_config_path, APP_NAMESPACE};
