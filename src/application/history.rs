//! History action - compare recorded versions against current releases.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::batch::run_all;
use crate::github::{GetReleases, GitHubRepo};

/// A repository together with the version previously recorded for it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub repository: String,
    pub version: String,
}

impl HistoryEntry {
    pub fn new(repository: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            version: version.into(),
        }
    }
}

/// Outcome of comparing one [`HistoryEntry`] with the current release.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryResult {
    pub repository: String,
    pub historical_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(default)]
    pub has_update: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HistoryResult {
    /// Compare a recorded version with the current tag.
    ///
    /// Any difference in the tag string counts as an update; no version
    /// ordering is applied.
    pub fn compared(entry: HistoryEntry, current: String) -> Self {
        Self {
            has_update: current != entry.version,
            repository: entry.repository,
            historical_version: entry.version,
            current_version: Some(current),
            error: None,
        }
    }

    pub fn failed(entry: HistoryEntry, error: impl ToString) -> Self {
        Self {
            repository: entry.repository,
            historical_version: entry.version,
            current_version: None,
            has_update: false,
            error: Some(error.to_string()),
        }
    }
}

pub struct HistoryAction<'a, G: GetReleases + ?Sized> {
    github: &'a G,
}

impl<'a, G: GetReleases + ?Sized> HistoryAction<'a, G> {
    pub fn new(github: &'a G) -> Self {
        Self { github }
    }

    /// Re-fetch the current tag of every entry concurrently and flag changes.
    #[tracing::instrument(skip(self, entries))]
    pub async fn run(&self, entries: Vec<HistoryEntry>) -> Vec<HistoryResult> {
        run_all(entries, |entry| self.process(entry)).await
    }

    async fn process(&self, entry: HistoryEntry) -> HistoryResult {
        let repo = match entry.repository.parse::<GitHubRepo>() {
            Ok(repo) => repo,
            Err(e) => return HistoryResult::failed(entry, e),
        };

        match self.github.latest_tag(&repo).await {
            Ok(current) => {
                debug!(
                    "{}: recorded {}, current {}",
                    entry.repository, entry.version, current
                );
                HistoryResult::compared(entry, current)
            }
            Err(e) => {
                debug!("Failed to fetch {}: {}", entry.repository, e);
                HistoryResult::failed(entry, e)
            }
        }
    }
}
