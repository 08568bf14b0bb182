//! Tool catalogue and dispatch for the protocol server.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::application::{
    BulkAction, BulkResult, GetAction, HistoryAction, HistoryEntry, HistoryResult,
};
use crate::commands::CommandKind;
use crate::github::GetReleases;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Deserialize, Debug)]
pub struct GetReleaseInput {
    pub repository: String,
}

#[derive(Deserialize, Debug)]
pub struct BulkReleasesInput {
    pub repositories: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct CompareHistoryInput {
    pub entries: Vec<HistoryEntry>,
}

#[derive(Serialize, Debug)]
pub struct BulkReleasesOutput {
    pub bulk_releases: Vec<BulkResult>,
}

#[derive(Serialize, Debug)]
pub struct HistoryComparisonOutput {
    pub history_comparisons: Vec<HistoryResult>,
}

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// No tool with this name is registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// The arguments did not match the tool's input schema.
    #[error("invalid arguments for {0}: {1}")]
    InvalidArguments(String, #[source] serde_json::Error),
    /// The tool ran and failed; reported as a tool result, not a protocol error.
    #[error("{0}")]
    Failed(String),
}

fn tool_description(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Get => "Get the latest release information for a single GitHub repository",
        CommandKind::Bulk => "Get the latest release tags for multiple GitHub repositories",
        CommandKind::History => {
            "Compare recorded versions with the current latest releases to find updates"
        }
    }
}

fn input_schema(kind: CommandKind) -> Value {
    match kind {
        CommandKind::Get => json!({
            "type": "object",
            "properties": {
                "repository": {
                    "type": "string",
                    "description": "Repository in owner/repo format"
                }
            },
            "required": ["repository"]
        }),
        CommandKind::Bulk => json!({
            "type": "object",
            "properties": {
                "repositories": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Repositories in owner/repo format"
                }
            },
            "required": ["repositories"]
        }),
        CommandKind::History => json!({
            "type": "object",
            "properties": {
                "entries": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "repository": {"type": "string"},
                            "version": {"type": "string"}
                        },
                        "required": ["repository", "version"]
                    },
                    "description": "Recorded repository versions to check"
                }
            },
            "required": ["entries"]
        }),
    }
}

pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    CommandKind::ALL
        .into_iter()
        .map(|kind| ToolDescriptor {
            name: kind.tool_name(),
            description: tool_description(kind),
            input_schema: input_schema(kind),
        })
        .collect()
}

fn decode<T: for<'de> Deserialize<'de>>(name: &str, arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(name.to_string(), e))
}

fn encode<T: Serialize>(output: &T) -> Result<Value, ToolError> {
    serde_json::to_value(output).map_err(|e| ToolError::Failed(e.to_string()))
}

/// Run the tool `name` and return its structured output.
#[tracing::instrument(skip(github, arguments))]
pub async fn call_tool<G: GetReleases + ?Sized>(
    github: &G,
    name: &str,
    arguments: Value,
) -> Result<Value, ToolError> {
    let kind =
        CommandKind::from_tool_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

    match kind {
        CommandKind::Get => {
            let input: GetReleaseInput = decode(name, arguments)?;
            let release = GetAction::new(github)
                .run(&input.repository)
                .await
                .map_err(|e| ToolError::Failed(e.to_string()))?;
            encode(&release)
        }
        CommandKind::Bulk => {
            let input: BulkReleasesInput = decode(name, arguments)?;
            if input.repositories.is_empty() {
                return Err(ToolError::Failed("no repositories provided".into()));
            }
            let bulk_releases = BulkAction::new(github).run(input.repositories).await;
            encode(&BulkReleasesOutput { bulk_releases })
        }
        CommandKind::History => {
            let input: CompareHistoryInput = decode(name, arguments)?;
            if input.entries.is_empty() {
                return Err(ToolError::Failed("no entries provided".into()));
            }
            let history_comparisons = HistoryAction::new(github).run(input.entries).await;
            encode(&HistoryComparisonOutput {
                history_comparisons,
            })
        }
    }
}
