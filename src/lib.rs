//! ghorg - client for an organization's public repository listing
//!
//! [`client::OrgClient`] fetches an organization's payload once per instance,
//! derives the repository collection URL from it, and lists repository names
//! with an optional exact license-key filter. The network is reached only
//! through [`client::JsonFetcher`].

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
