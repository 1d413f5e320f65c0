//! Repository models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result, json_kind};

/// One record of an organization's repository collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// License metadata; anything but an object in the payload is treated
    /// as absent
    #[serde(
        default,
        deserialize_with = "lenient_license",
        skip_serializing_if = "Option::is_none"
    )]
    pub license: Option<License>,
}

/// License metadata attached to a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License key (e.g. `apache-2.0`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Keep `license` only when it is an object, and its `key` only when it is a
/// string. Malformed license data never fails the whole record.
fn lenient_license<'de, D>(deserializer: D) -> std::result::Result<Option<License>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let license = Option::<Value>::deserialize(deserializer)?;
    Ok(match license {
        Some(Value::Object(map)) => Some(License {
            key: map.get("key").and_then(Value::as_str).map(str::to_string),
        }),
        _ => None,
    })
}

impl Repository {
    /// Project one decoded repository record.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ApiError::UnexpectedShape {
                expected: "object",
                found: json_kind(value),
            }
            .into());
        }

        Repository::deserialize(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse repository: {}", e)).into()
        })
    }

    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.key.as_deref())
    }

    /// Exact, case-sensitive match on the license key.
    pub fn has_license(&self, license_key: &str) -> bool {
        self.license_key() == Some(license_key)
    }
}
