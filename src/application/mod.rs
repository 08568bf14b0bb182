//! Application layer - use cases shared by the CLI and the protocol server.
//!
//! Each action parses its input, calls the release client, and shapes the
//! result into the canonical record for that operation. Rendering is left to
//! the caller.

mod bulk;
mod get;
mod history;

pub use bulk::{BulkAction, BulkResult};
pub use get::GetAction;
pub use history::{HistoryAction, HistoryEntry, HistoryResult};
