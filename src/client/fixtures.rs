//! Shared payload fixtures for unit tests
//!
//! The JSON lives under `tests/fixtures/` so integration tests read the same
//! payloads.

use serde_json::Value;

const ORG_PAYLOAD: &str = include_str!("../../tests/fixtures/org_payload.json");
const REPOS_PAYLOAD: &str = include_str!("../../tests/fixtures/repos_payload.json");
const EXPECTED: &str = include_str!("../../tests/fixtures/expected.json");

fn parse(raw: &str) -> Value {
    serde_json::from_str(raw).expect("fixture is valid JSON")
}

/// Organization payload for `google`
pub fn org_payload() -> Value {
    parse(ORG_PAYLOAD)
}

/// Repository collection served at the payload's `repos_url`
pub fn repos_payload() -> Value {
    parse(REPOS_PAYLOAD)
}

fn expected_names(key: &str) -> Vec<String> {
    serde_json::from_value(parse(EXPECTED)[key].clone()).expect("fixture lists names")
}

/// Every repository name, in collection order
pub fn expected_repos() -> Vec<String> {
    expected_names("expected_repos")
}

/// Names of the repositories licensed `apache-2.0`
pub fn apache2_repos() -> Vec<String> {
    expected_names("apache2_repos")
}
