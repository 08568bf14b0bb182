use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::repo::GitHubRepo;

/// GitHub API response types (internal).
pub(crate) mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        pub name: Option<String>,
        pub html_url: Option<String>,
        pub published_at: Option<String>,
    }
}

/// The latest published release of a repository.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct Release {
    /// Repository in `owner/repo` form
    pub repository: String,
    /// Version tag (e.g., "v1.0.0")
    pub tag_name: String,
    /// Release title, empty when unset upstream
    pub name: String,
    pub html_url: String,
    /// `YYYY-MM-DDTHH:MM:SSZ`, or empty when the release has no publish date
    pub published_at: String,
}

impl Release {
    pub(crate) fn from_api(repo: &GitHubRepo, r: api::Release) -> Self {
        Release {
            repository: repo.to_string(),
            tag_name: r.tag_name,
            name: r.name.unwrap_or_default(),
            html_url: r.html_url.unwrap_or_default(),
            published_at: r
                .published_at
                .as_deref()
                .map(normalize_timestamp)
                .unwrap_or_default(),
        }
    }
}

/// Render an upstream timestamp in UTC with second precision.
/// Values that are not RFC 3339 are returned unchanged.
pub fn normalize_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(_) => raw.to_string(),
    }
}
