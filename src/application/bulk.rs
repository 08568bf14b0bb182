//! Bulk action - latest tag of many repositories at once.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::batch::run_all;
use crate::github::{GetReleases, GitHubRepo};

/// Outcome for one repository of a bulk lookup.
///
/// Exactly one of `tag` and `error` is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkResult {
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkResult {
    pub fn tag(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: Some(tag.into()),
            error: None,
        }
    }

    pub fn error(repository: impl Into<String>, error: impl ToString) -> Self {
        Self {
            repository: repository.into(),
            tag: None,
            error: Some(error.to_string()),
        }
    }
}

pub struct BulkAction<'a, G: GetReleases + ?Sized> {
    github: &'a G,
}

impl<'a, G: GetReleases + ?Sized> BulkAction<'a, G> {
    pub fn new(github: &'a G) -> Self {
        Self { github }
    }

    /// Look up every repository concurrently. Results follow input order and
    /// a failing repository only affects its own entry.
    #[tracing::instrument(skip(self, repositories))]
    pub async fn run(&self, repositories: Vec<String>) -> Vec<BulkResult> {
        run_all(repositories, |repository| self.process(repository)).await
    }

    async fn process(&self, repository: String) -> BulkResult {
        let repo = match repository.parse::<GitHubRepo>() {
            Ok(repo) => repo,
            Err(e) => return BulkResult::error(repository, e),
        };

        match self.github.latest_tag(&repo).await {
            Ok(tag) => BulkResult::tag(repository, tag),
            Err(e) => {
                debug!("Failed to fetch {}: {}", repository, e);
                BulkResult::error(repository, e)
            }
        }
    }
}
