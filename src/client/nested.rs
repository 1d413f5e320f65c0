//! Key-path access into nested JSON objects

use serde_json::Value;

use crate::error::{ApiError, Result};

/// Follow `path` through nested JSON objects and return the value it names.
///
/// Fails with [`ApiError::MissingField`] naming the dotted path up to the
/// first key that is absent, or whose parent is not an object.
pub fn access_nested<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| ApiError::MissingField(path[..=depth].join(".")))?;
    }
    Ok(current)
}
