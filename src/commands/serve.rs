use anyhow::Result;
use log::info;
use tokio::io::{BufReader, stdin, stdout};

use crate::github::GetReleases;
use crate::mcp::Server;
use crate::runtime::Runtime;

use super::connect;

/// Run the protocol server on stdin/stdout until the client disconnects.
pub async fn serve<R: Runtime>(runtime: &R, api_url: Option<String>, version: &str) -> Result<()> {
    let github = connect(runtime, api_url)?;
    info!("Serving release tools on stdio against {}", github.api_url());
    Server::new(&github, version)
        .run(BufReader::new(stdin()), stdout())
        .await
}
