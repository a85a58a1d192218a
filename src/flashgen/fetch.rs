//! Fetching shared decks over HTTP.

use crate::error::{FlashError, Result};
use tracing::debug;

/// Retrieves the body behind a URL.
pub trait Fetcher {
    /// Non-2xx responses are failures carrying the status.
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| FlashError::Config(format!("unable to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(%url, "fetching deck");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FlashError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlashError::Network(format!("HTTP {} from {}", status, url)));
        }

        response
            .text()
            .map_err(|e| FlashError::Network(e.to_string()))
    }
}
