//! Page retrieval over HTTP
//!
//! One GET per run. Fetch errors propagate unchanged; retry policy, if
//! any, belongs to the caller.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::template_profile::TemplateProfile;

/// Errors from the page fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// Building the HTTP client failed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request itself failed (connect, timeout, body read)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} answered with status {status}")]
    HttpStatus { url: String, status: u16 },
}

/// HTTP fetcher for documentation pages
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Build a fetcher with the profile's timeout and user agent.
    pub fn new(profile: &TemplateProfile) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(profile.timeout_seconds))
            .user_agent(profile.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Fetch one page and return its body text.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        log::info!("fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }
}
