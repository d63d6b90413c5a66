//! Narrow retrieval boundary: fetch raw content for a locator, or fail
//! with a classified error.
//!
//! The dispatcher depends on external sources only through this trait, so
//! tests swap in [`MockFetcher`] and the whole pipeline runs without a
//! network.

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

use async_trait::async_trait;

use crate::error::IngestResult;

/// Raw content retrieved for one locator.
#[derive(Debug, Clone)]
pub struct FetchedContent {
    /// Locator the content was fetched for.
    pub url: String,
    /// Raw body bytes.
    pub bytes: Vec<u8>,
    /// Declared content type, when the transport provides one.
    pub content_type: Option<String>,
}

impl FetchedContent {
    pub fn new(url: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            bytes,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Whether the declared content type contains the given marker.
    pub fn content_type_contains(&self, marker: &str) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains(marker))
    }
}

/// Blocking-bounded content retrieval for a single locator.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the content behind `url`, or fail with a classified error.
    async fn fetch(&self, url: &str) -> IngestResult<FetchedContent>;

    /// Fetcher name, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}
