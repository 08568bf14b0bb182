//! Service factory for building the release client from configuration.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{github::GitHub, http::HttpClient};

use super::config::Config;

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("githubrel-cli")
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub release client from configuration
pub fn build_github(config: &Config) -> Result<GitHub> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHub::new(http_client, Some(config.api_url.clone())))
}
