//! Location lookup over HTTP
//!
//! The UI thread never waits on the network. Lookups are handed to a worker thread
//! running an async HTTP client, and outcomes come back over a channel that the
//! event loop drains every tick.

use thiserror::Error;

mod client;
mod worker;

pub use client::{LookupClient, SuggestionSource, check_status, parse_results};
pub use worker::{FieldDispatcher, LookupHandle, LookupRequest, LookupResponse, spawn_worker};

/// Errors that can occur during a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Connection, TLS or transfer failure
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Lookup endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}
