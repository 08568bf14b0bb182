pub mod application;
pub mod batch;
pub mod commands;
pub mod error;
pub mod github;
pub mod http;
pub mod mcp;
pub mod output;
pub mod runtime;

pub use error::{Error, Result};
