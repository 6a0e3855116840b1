//! HTTP client for puzzle tile retrieval.

use reqwest::{Client, Response};
use url::Url;

use crate::config::FetchConfig;
use crate::error::{Error, Result};

/// Image client with the configured user agent and request timeout.
pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    /// Build a client from fetch settings.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Send a GET for `url`, failing on transport errors and non-success statuses.
    pub async fn get_image(&self, url: &str) -> Result<Response> {
        let parsed = Url::parse(url).map_err(|e| Error::download(url, format!("invalid URL: {}", e)))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::download(url, e))?;

        if !response.status().is_success() {
            return Err(Error::download(url, format!("HTTP {}", response.status())));
        }

        Ok(response)
    }
}
