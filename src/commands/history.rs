use std::path::Path;

use anyhow::{Result, bail};
use log::info;

use crate::application::HistoryAction;
use crate::github::GetReleases;
use crate::output::format_history_results;
use crate::runtime::Runtime;

use super::connect;
use super::input::read_history;

/// Compare every `repository:version` line of `file` with the current release.
pub async fn history<R: Runtime>(
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
    let entries = read_history(runtime, file)?;
    if entries.is_empty() {
        bail!("no entries found in file: {}", file.display());
    }

    info!("Comparing {} recorded versions", entries.len());
    let results = HistoryAction::new(github).run(entries).await;

    let updates = results.iter().filter(|r| r.has_update).count();
    info!("{} of {} repositories have updates", updates, results.len());

    Ok(format_history_results(&results, format)?)
}
