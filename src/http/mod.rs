//! HTTP client wrapper used by the GitHub release client.

mod client;

pub use client::HttpClient;
