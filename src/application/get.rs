//! Get action - latest release of a single repository.

use crate::error::Result;
use crate::github::{GetReleases, GitHubRepo, Release};

pub struct GetAction<'a, G: GetReleases + ?Sized> {
    github: &'a G,
}

impl<'a, G: GetReleases + ?Sized> GetAction<'a, G> {
    pub fn new(github: &'a G) -> Self {
        Self { github }
    }

    /// Parse `repository` and fetch its latest release.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, repository: &str) -> Result<Release> {
        let repo = repository.parse::<GitHubRepo>()?;
        self.github.latest_release(&repo).await
    }
}
