//! Organization models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result, json_kind};

/// Organization payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization login (optional, echoed back by the API)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// URL of the organization's repository collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,

    /// Every other field of the payload, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organization {
    /// Project a decoded organization payload.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ApiError::UnexpectedShape {
                expected: "object",
                found: json_kind(&value),
            }
            .into());
        }

        serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse organization: {}", e)).into()
        })
    }

    /// The repository collection URL, required by every repository listing.
    pub fn require_repos_url(&self) -> Result<&str> {
        self.repos_url
            .as_deref()
            .ok_or_else(|| ApiError::MissingField("repos_url".to_string()).into())
    }
}
