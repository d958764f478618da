use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::RecipeError;

/// Blocking page fetcher that impersonates a desktop browser
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    /// Creates a fetcher. Without a timeout a stalled request blocks indefinitely.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, RecipeError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);

        // The blocking client defaults to 30s; `None` disables the timeout entirely
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        Self::new(&config.user_agent, config.timeout())
    }

    /// GETs the page body. Transport errors and non-2xx statuses are both errors.
    pub fn fetch(&self, url: &str) -> Result<String, RecipeError> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        debug!("Response status: {}", response.status());
        Ok(response.text()?)
    }
}
