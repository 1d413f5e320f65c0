//! Projected shapes of the organization API payloads
//!
//! Payloads arrive as untyped JSON and are converted here right after
//! decoding, so the rest of the client works with these types only.

mod org;
mod repo;

pub use org::Organization;
pub use repo::{License, Repository};
