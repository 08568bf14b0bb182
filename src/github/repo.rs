use std::str::FromStr;

use crate::error::Error;

/// Repository identifier (owner/repo format).
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').map(str::trim).collect();
        match parts.as_slice() {
            [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(GitHubRepo {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
            _ => Err(Error::MalformedIdentifier(s.to_string())),
        }
    }
}
