//! Command surface: one entry point per CLI subcommand.
//!
//! The set of release commands is fixed at build time and described by
//! [`CommandKind`]; both the CLI and the protocol server take their names and
//! descriptions from it.

use anyhow::Result;

use crate::github::GitHub;
use crate::runtime::Runtime;

pub mod config;
mod bulk;
mod get;
mod history;
mod input;
mod serve;
pub mod services;

pub use bulk::bulk_get;
pub use get::get;
pub use history::history;
pub use input::{read_history, read_repositories};
pub use serve::serve;

use config::Config;
use services::build_github;

/// The release operations offered on every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Get,
    Bulk,
    History,
}

impl CommandKind {
    pub const ALL: [CommandKind; 3] = [CommandKind::Get, CommandKind::Bulk, CommandKind::History];

    /// CLI subcommand name.
    pub const fn name(self) -> &'static str {
        match self {
            CommandKind::Get => "get",
            CommandKind::Bulk => "bulk-get",
            CommandKind::History => "history",
        }
    }

    /// Tool name on the protocol server.
    pub const fn tool_name(self) -> &'static str {
        match self {
            CommandKind::Get => "get_release",
            CommandKind::Bulk => "bulk_releases",
            CommandKind::History => "compare_history",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            CommandKind::Get => "Get the latest release tag for a single repository",
            CommandKind::Bulk => "Get latest release tags for multiple repositories from a file",
            CommandKind::History => {
                "Compare historical versions with current releases from a history file"
            }
        }
    }

    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tool_name() == name)
    }
}

/// Build the release client for a CLI invocation.
fn connect<R: Runtime>(runtime: &R, api_url: Option<String>) -> Result<GitHub> {
    let config = Config::load(runtime, api_url);
    build_github(&config)
}
