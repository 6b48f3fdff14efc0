//! Upstream page fetch.
//!
//! The fetch is the only suspension point in the pipeline; everything after
//! it (parse, rewrite, serialize) is synchronous. Timeout policy lives here,
//! not in the rewrite core.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client for retrieving the raw page text of a URL.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with the default 30s timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the response body text for `url`.
    ///
    /// Fails with [`Error::InvalidUrl`] before any I/O when the URL does not
    /// parse or is not http(s), with [`Error::UpstreamStatus`] on a non-2xx
    /// response, and with [`Error::Fetch`] on network, TLS, or timeout
    /// failures.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        tracing::debug!(%url, "fetching upstream page");
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(%url, bytes = body.len(), "fetched upstream page");
        Ok(body)
    }
}
