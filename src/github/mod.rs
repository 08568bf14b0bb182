//! GitHub release API client.

mod client;
mod repo;
mod types;

#[cfg(test)]
pub use client::MockGetReleases;
pub use client::{DEFAULT_API_URL, GetReleases, GitHub, classify_error};
pub use repo::GitHubRepo;
pub use types::{Release, normalize_timestamp};
