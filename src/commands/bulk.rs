use std::path::Path;

use anyhow::{Result, bail};
use log::info;

use crate::application::BulkAction;
use crate::github::GetReleases;
use crate::output::format_bulk_results;
use crate::runtime::Runtime;

use super::connect;
use super::input::read_repositories;

/// Print the latest tag of every repository listed in `file`.
pub async fn bulk_get<R: Runtime>(
    runtime: &R,
    file: &Path,
    format: &str,
    api_url: Option<String>,
) -> Result<()> {
    let github = connect(runtime, api_url)?;
    println!("{}", run(runtime, &github, file, format).await?);
    Ok(())
}

#[tracing::instrument(skip(runtime, github))]
pub(super) async fn run<R: Runtime + ?Sized, G: GetReleases + ?Sized>(
    runtime: &R,
    github: &G,
    file: &Path,
    format: &str,
) -> Result<String> {
    let repositories = read_repositories(runtime, file)?;
    if repositories.is_empty() {
        bail!("no repositories found in file: {}", file.display());
    }

    info!("Fetching latest tags for {} repositories", repositories.len());
    let results = BulkAction::new(github).run(repositories).await;

    Ok(format_bulk_results(&results, format)?)
}
