use anyhow::Result;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::github::GetReleases;

use super::protocol::{
    CallToolParams, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeParams,
    LATEST_PROTOCOL_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, Request, Response, RpcError, SUPPORTED_PROTOCOL_VERSIONS,
};
use super::tools::{ToolError, call_tool, tool_descriptors};

pub const SERVER_NAME: &str = "github-releases";

/// Protocol server answering one request per input line.
pub struct Server<'a, G: GetReleases + ?Sized> {
    github: &'a G,
    version: &'a str,
}

impl<'a, G: GetReleases + ?Sized> Server<'a, G> {
    pub fn new(github: &'a G, version: &'a str) -> Self {
        Self { github, version }
    }

    /// Serve until `reader` reaches end of input.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut out = serde_json::to_string(&response)?;
                out.push('\n');
                writer.write_all(out.as_bytes()).await?;
                writer.flush().await?;
            }
        }
        debug!("Input closed, stopping server");
        Ok(())
    }

    /// Answer a single raw message. Notifications produce no response.
    pub async fn handle_line(&self, line: &str) -> Option<Response> {
        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("Unparseable message: {}", e);
                return Some(Response::failure(
                    Value::Null,
                    RpcError::new(PARSE_ERROR, format!("parse error: {e}")),
                ));
            }
        };

        if request.is_notification() {
            debug!("Ignoring notification {}", request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        let response = match self.dispatch(request).await {
            Ok(result) => Response::success(id, result),
            Err(error) => Response::failure(id, error),
        };
        Some(response)
    }

    #[tracing::instrument(skip(self, request), fields(method = %request.method))]
    async fn dispatch(&self, request: Request) -> Result<Value, RpcError> {
        if request.jsonrpc != "2.0" {
            return Err(RpcError::new(
                INVALID_REQUEST,
                format!("unsupported jsonrpc version: {:?}", request.jsonrpc),
            ));
        }

        match request.method.as_str() {
            "initialize" => Ok(self.initialize(request.params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_descriptors() })),
            "tools/call" => self.call(request.params).await,
            method => Err(RpcError::new(
                METHOD_NOT_FOUND,
                format!("method not found: {method}"),
            )),
        }
    }

    fn initialize(&self, params: Value) -> Value {
        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
        let protocol_version = params
            .protocol_version
            .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(&v.as_str()))
            .unwrap_or_else(|| LATEST_PROTOCOL_VERSION.to_string());

        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": SERVER_NAME, "version": self.version },
        })
    }

    async fn call(&self, params: Value) -> Result<Value, RpcError> {
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| RpcError::new(INVALID_PARAMS, format!("invalid params: {e}")))?;
        let arguments = params.arguments.unwrap_or(Value::Null);

        match call_tool(self.github, &params.name, arguments).await {
            Ok(output) => tool_result(output),
            Err(ToolError::Failed(message)) => {
                warn!("Tool {} failed: {}", params.name, message);
                Ok(json!({
                    "content": [{ "type": "text", "text": message }],
                    "isError": true,
                }))
            }
            Err(e) => Err(RpcError::new(INVALID_PARAMS, e.to_string())),
        }
    }
}

/// Wrap structured tool output as a successful `tools/call` result.
fn tool_result<T: Serialize>(output: T) -> Result<Value, RpcError> {
    let internal = |e: serde_json::Error| RpcError::new(INTERNAL_ERROR, e.to_string());
    let output = serde_json::to_value(output).map_err(internal)?;
    let text = serde_json::to_string_pretty(&output).map_err(internal)?;
    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": output,
        "isError": false,
    }))
}
