//! Shared helpers for integration tests

#![allow(dead_code)]

use serde_json::Value;

fn load(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let raw = std::fs::read_to_string(&path).expect("fixture file exists");
    serde_json::from_str(&raw).expect("fixture is valid JSON")
}

/// Organization payload whose `repos_url` points at `server_url`
pub fn org_payload(server_url: &str, org: &str) -> Value {
    let mut payload = load("org_payload.json");
    payload["login"] = Value::String(org.to_string());
    payload["repos_url"] = Value::String(format!("{}/orgs/{}/repos", server_url, org));
    payload
}

pub fn repos_payload() -> Value {
    load("repos_payload.json")
}

fn names(key: &str) -> Vec<String> {
    serde_json::from_value(load("expected.json")[key].clone()).expect("fixture lists names")
}

pub fn expected_repos() -> Vec<String> {
    names("expected_repos")
}

pub fn apache2_repos() -> Vec<String> {
    names("apache2_repos")
}
