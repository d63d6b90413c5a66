//! HTTP fetcher backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::error::{IngestError, IngestResult};
use crate::fetch::{FetchedContent, Fetcher};

/// Per-request timeout; a source exceeding it is skipped, not retried.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP fetcher with a fixed timeout and no retries.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("failed to create HTTP client"),
        }
    }

    /// Use a caller-provided client (custom headers, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> IngestResult<FetchedContent> {
        // Reject malformed locators before touching the network so the
        // failure queue carries a parse error, not a transport one.
        let parsed = Url::parse(url).map_err(|e| {
            warn!(url = %url, error = %e, "invalid source URL");
            IngestError::Parse(format!("invalid URL {url}: {e}"))
        })?;

        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(parsed).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            IngestError::Http(Box::new(e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Http(
                format!("HTTP {} for {}", status, url).into(),
            ));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| IngestError::Http(Box::new(e)))?
            .to_vec();

        debug!(url = %url, bytes = bytes.len(), "HTTP fetch completed");

        let mut content = FetchedContent::new(url, bytes);
        if let Some(ct) = content_type {
            content = content.with_content_type(ct);
        }
        Ok(content)
    }

    fn name(&self) -> &str {
        "http"
    }
}
