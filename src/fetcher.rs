use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Plain HTTP GET for listing pages. One client per run, reused for every page.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch `url` and return its body. Transport errors and non-2xx statuses both fail.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?;

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))
    }
}
