//! Thin JSON-over-HTTP client. Requests are attempted exactly once.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client shared by every request of a command or tool call.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Non-success statuses surface as a `reqwest::Error` carrying the status.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> reqwest::Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        response.json::<T>().await
    }
}
