use anyhow::Result;

use crate::application::GetAction;
use crate::github::GetReleases;
use crate::output::format_release;
use crate::runtime::Runtime;

use super::connect;

/// Print the latest release of `repo_str`.
pub async fn get<R: Runtime>(
    runtime: &R,
    repo_str: &str,
    format: &str,
    api_url: Option<String>,
) -> Result<()> {
    let github = connect(runtime, api_url)?;
    println!("{}", run(&github, repo_str, format).await?);
    Ok(())
}

#[tracing::instrument(skip(github))]
pub(super) async fn run<G: GetReleases + ?Sized>(
    github: &G,
    repo_str: &str,
    format: &str,
) -> Result<String> {
    let release = GetAction::new(github).run(repo_str).await?;
    Ok(format_release(&release, format)?)
}
