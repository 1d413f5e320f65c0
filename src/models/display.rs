//! Display model implementations for table, JSON and plain output
//!
//! Display models flatten client types into CLI-friendly rows with column
//! names and serialization.

use serde::Serialize;
use tabled::Tabled;

use crate::client::Organization;
use crate::output::PlainLine;

const NONE: &str = "-";

/// Organization display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "ORG")]
    pub org: String,

    #[tabled(rename = "LOGIN")]
    pub login: String,

    #[tabled(rename = "REPOS URL")]
    pub repos_url: String,
}

impl OrgDisplay {
    /// Build the row for the organization looked up as `org`.
    pub fn new(org: &str, payload: &Organization) -> Self {
        Self {
            org: org.to_string(),
            login: payload.login.clone().unwrap_or_else(|| NONE.to_string()),
            repos_url: payload.repos_url.clone().unwrap_or_else(|| NONE.to_string()),
        }
    }
}

impl PlainLine for OrgDisplay {
    fn plain_line(&self) -> String {
        self.repos_url.clone()
    }
}

/// Repository display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    #[tabled(rename = "ORG")]
    pub org: String,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl RepoDisplay {
    pub fn new(org: &str, name: impl Into<String>) -> Self {
        Self {
            org: org.to_string(),
            name: name.into(),
        }
    }
}

impl PlainLine for RepoDisplay {
    fn plain_line(&self) -> String {
        self.name.clone()
    }
}
