//! Organization client
//!
//! [`OrgClient`] wraps one organization name. The organization payload and the
//! repository collection URL derived from it are fetched at most once per
//! client and then served from the instance's memoized slots. Repository
//! listings are fetched fresh on every call.

use std::sync::Arc;

use serde_json::Value;

use super::memo::Memoized;
use super::models::{Organization, Repository};
use super::nested::access_nested;
use super::JsonFetcher;
use crate::error::{ApiError, Error, Result, json_kind};

/// Public GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Client for a single organization's metadata and repositories
pub struct OrgClient<F: JsonFetcher> {
    org_name: String,
    api_base: String,
    fetcher: Arc<F>,
    org: Memoized<Organization>,
    repos_url: Memoized<String>,
}

impl<F: JsonFetcher> OrgClient<F> {
    /// Create a client for `org_name` that reaches the network through `fetcher`
    pub fn new(org_name: impl Into<String>, fetcher: Arc<F>) -> Self {
        Self {
            org_name: org_name.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            fetcher,
            org: Memoized::new("organization"),
            repos_url: Memoized::new("repository_collection_url"),
        }
    }

    /// Use a different API base URL (mock servers, GitHub Enterprise).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// URL of the organization endpoint
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_base, self.org_name)
    }

    /// Organization payload, fetched on first access.
    pub async fn organization(&self) -> Result<&Organization> {
        self.org
            .get_or_try_init(|| async {
                let payload = self.fetcher.fetch_json(&self.org_url()).await?;
                Organization::from_value(payload)
            })
            .await
    }

    /// Repository collection URL taken from the organization payload.
    pub async fn repository_collection_url(&self) -> Result<&str> {
        let url = self
            .repos_url
            .get_or_try_init(|| async {
                let org = self.organization().await?;
                org.require_repos_url().map(str::to_string)
            })
            .await?;
        Ok(url.as_str())
    }

    /// Fetch the repository collection and project every record.
    pub async fn public_repositories(&self) -> Result<Vec<Repository>> {
        let url = self.repository_collection_url().await?;
        let payload = self.fetcher.fetch_json(url).await?;

        let records = payload.as_array().ok_or(ApiError::UnexpectedShape {
            expected: "array",
            found: json_kind(&payload),
        })?;

        let repos = records
            .iter()
            .map(Repository::from_value)
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Fetched {} repositories for org {}",
            repos.len(),
            self.org_name
        );
        Ok(repos)
    }

    /// Names of the organization's repositories in collection order.
    ///
    /// With `license_filter`, only repositories whose license key matches it
    /// exactly are kept.
    pub async fn list_public_repository_names(
        &self,
        license_filter: Option<&str>,
    ) -> Result<Vec<String>> {
        let repos = self.public_repositories().await?;

        Ok(repos
            .into_iter()
            .filter(|repo| match license_filter {
                None => true,
                Some(key) => {
                    let keep = repo.has_license(key);
                    log::trace!("{} license {:?}: keep={}", repo.name, repo.license_key(), keep);
                    keep
                }
            })
            .map(|repo| repo.name)
            .collect())
    }
}

/// Whether a raw repository record carries the license `license_key`.
///
/// A missing `license` or `license.key` is not a match. A record that is not
/// a JSON object is an error.
pub fn has_license(repo: &Value, license_key: &str) -> Result<bool> {
    if !repo.is_object() {
        return Err(ApiError::UnexpectedShape {
            expected: "object",
            found: json_kind(repo),
        }
        .into());
    }

    match access_nested(repo, &["license", "key"]) {
        Ok(key) => Ok(key.as_str() == Some(license_key)),
        Err(Error::Api(ApiError::MissingField(_))) => Ok(false),
        Err(e) => Err(e),
    }
}
