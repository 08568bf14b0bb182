//! Protocol server exposing the release operations as tools.
//!
//! Messages are JSON-RPC 2.0, one per line, read from stdin and answered on
//! stdout.

mod protocol;
mod server;
mod tools;

pub use protocol::{Request, Response, RpcError};
pub use server::{SERVER_NAME, Server};
pub use tools::{ToolDescriptor, ToolError, call_tool, tool_descriptors};
