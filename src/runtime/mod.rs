//! Runtime abstraction for system operations.
//!
//! Commands read environment variables and input files through this trait so
//! that configuration and file parsing can be tested with `MockRuntime`.
//!
//! # Structure
//!
//! - `env` - Environment variables
//! - `fs` - File system reads

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }
}
