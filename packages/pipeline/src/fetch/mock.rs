//! Mock fetcher for testing.
//!
//! Canned per-URL responses plus recorded calls, so tests can assert both
//! pipeline output and fetch behavior without a network.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{IngestError, IngestResult};
use crate::fetch::{FetchedContent, Fetcher};

#[derive(Debug, Clone)]
enum Canned {
    Content(FetchedContent),
    Error(String),
}

/// Mock fetcher with canned responses.
#[derive(Default)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, Canned>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned plain-text body for a URL.
    pub fn with_text(self, url: &str, body: &str) -> Self {
        self.add_content(FetchedContent::new(url, body.as_bytes().to_vec()));
        self
    }

    /// Canned body with a declared content type.
    pub fn with_typed(self, url: &str, body: &[u8], content_type: &str) -> Self {
        self.add_content(
            FetchedContent::new(url, body.to_vec()).with_content_type(content_type),
        );
        self
    }

    /// Canned transport failure for a URL.
    pub fn with_error(self, url: &str, message: &str) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.to_string(), Canned::Error(message.to_string()));
        self
    }

    fn add_content(&self, content: FetchedContent) {
        self.responses
            .write()
            .unwrap()
            .insert(content.url.clone(), Canned::Content(content));
    }

    /// URLs fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> IngestResult<FetchedContent> {
        self.calls.write().unwrap().push(url.to_string());

        match self.responses.read().unwrap().get(url) {
            Some(Canned::Content(content)) => Ok(content.clone()),
            Some(Canned::Error(message)) => Err(IngestError::Http(message.clone().into())),
            None => Err(IngestError::Http(
                format!("no canned response for {}", url).into(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_content_and_calls() {
        let mock = MockFetcher::new()
            .with_text("https://example.com/a", "hello")
            .with_error("https://example.com/b", "connection refused");

        let ok = mock.fetch("https://example.com/a").await.unwrap();
        assert_eq!(ok.text(), "hello");

        let err = mock.fetch("https://example.com/b").await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.calls()[0], "https://example.com/a");
    }

    #[tokio::test]
    async fn test_unknown_url_is_transport_error() {
        let mock = MockFetcher::new();
        let err = mock.fetch("https://example.com/missing").await.unwrap_err();
        assert!(matches!(err, IngestError::Http(_)));
    }
}
