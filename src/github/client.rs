use std::error::Error as StdError;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::http::HttpClient;

use super::repo::GitHubRepo;
use super::types::{Release, api};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Source of release information for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    /// Fetch the most recent published release.
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release>;

    /// Fetch only the tag of the most recent published release.
    async fn latest_tag(&self, repo: &GitHubRepo) -> Result<String> {
        Ok(self.latest_release(repo).await?.tag_name)
    }

    fn api_url(&self) -> &str;
}

pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.repo
        );

        debug!("Fetching latest release from {}...", url);

        let release: api::Release = self
            .http_client
            .get_json(&url)
            .await
            .map_err(|e| classify_error(repo, e))?;

        Ok(Release::from_api(repo, release))
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Map a transport error onto the domain error taxonomy.
pub fn classify_error(repo: &GitHubRepo, error: reqwest::Error) -> Error {
    match error.status() {
        Some(StatusCode::NOT_FOUND) => Error::not_found(repo, error_chain(&error)),
        Some(StatusCode::FORBIDDEN) | Some(StatusCode::TOO_MANY_REQUESTS) => Error::RateLimited,
        _ => Error::Upstream(error_chain(&error)),
    }
}

/// Render an error followed by each of its sources, joined with `": "`.
///
/// A source whose text is already part of the message so far is skipped.
fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
