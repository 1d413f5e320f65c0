//! Mock JSON fetcher for testing
//!
//! Serves canned JSON per URL and records every request so tests can assert
//! on what was fetched and how often, without touching the network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::JsonFetcher;
use crate::error::{ApiError, Result};

/// Mock fetcher for unit tests.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(
///     MockFetcher::new().with_response("https://api.github.com/orgs/google", json!({})),
/// );
/// let client = OrgClient::new("google", Arc::clone(&mock));
/// client.organization().await?;
/// assert_eq!(mock.total_calls(), 1);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Canned responses keyed by URL
    responses: HashMap<String, Value>,
    /// Error to return on the next call - consumed on first use
    error: Mutex<Option<ApiError>>,
    /// Every requested URL, in order
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_response(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    /// Configure an error to return on the next call.
    /// The error is consumed after one use.
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// All requested URLs, in request order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(err) = self.error.lock().unwrap().take() {
            return Err(err.into());
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(url.to_string()).into())
    }
}
