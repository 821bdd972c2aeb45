//! HTTP client for the autocomplete endpoint
//!
//! `GET <base_url><endpoint>?q=<query>` answering `{ "results": [ { "label": ... } ] }`.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};

use super::LookupError;
use crate::autocomplete::{Suggestion, SuggestionResponse};
use crate::config::LookupConfig;
use crate::error::LocpickError;

/// Something that can turn a query into suggestions
///
/// The worker only depends on this trait, so tests can run it without a server.
pub trait SuggestionSource: Send + Sync + 'static {
    fn lookup(&self, query: String) -> BoxFuture<'static, Result<Vec<Suggestion>, LookupError>>;
}

/// Client for the autocomplete endpoint
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl LookupClient {
    /// Create a client from configuration
    ///
    /// Fails if the base URL and endpoint do not form an absolute http(s) URL.
    pub fn new(config: &LookupConfig) -> Result<Self, LocpickError> {
        let endpoint = endpoint_url(config)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("locpick/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LocpickError::Client(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL for a lookup, with the query percent-encoded as `q`
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// Fetch suggestions for `query`
    ///
    /// A JSON body without `results` is an empty list.
    pub async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let response = self
            .http
            .get(self.request_url(query))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_results(&body)
    }
}

impl SuggestionSource for LookupClient {
    fn lookup(&self, query: String) -> BoxFuture<'static, Result<Vec<Suggestion>, LookupError>> {
        let client = self.clone();
        async move { client.fetch(&query).await }.boxed()
    }
}

/// Parse a lookup response body into its result list
pub fn parse_results(body: &str) -> Result<Vec<Suggestion>, LookupError> {
    serde_json::from_str::<SuggestionResponse>(body)
        .map(|response| response.results)
        .map_err(|e| LookupError::Parse(e.to_string()))
}

/// Treat any non-2xx answer as a failed lookup, whatever the body says
pub fn check_status(status: StatusCode) -> Result<(), LookupError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(LookupError::Status(status.as_u16()))
    }
}

fn endpoint_url(config: &LookupConfig) -> Result<Url, LocpickError> {
    let invalid = |message: String| LocpickError::InvalidEndpoint {
        url: format!("{}{}", config.base_url, config.endpoint),
        message,
    };

    let base = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }

    base.join(&config.endpoint).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
