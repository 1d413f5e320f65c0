//! GitHub organization API client
//!
//! The client reaches the network only through [`JsonFetcher`]. The production
//! implementation is [`HttpFetcher`]; tests inject `MockFetcher` instead.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
pub mod http;
pub mod memo;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod nested;
pub mod org;

pub use http::HttpFetcher;
pub use memo::Memoized;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockFetcher;
pub use models::{License, Organization, Repository};
pub use nested::access_nested;
pub use org::{DEFAULT_API_BASE, OrgClient, has_license};

/// Fetches a URL and returns its decoded JSON body.
///
/// Implementations perform no caching and no retries; every failure is
/// returned to the caller.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GET `url` and decode the response body as JSON
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}
