use log::debug;

use crate::github::DEFAULT_API_URL;
use crate::runtime::Runtime;

/// Settings shared by every command: where the API lives and how to
/// authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub token: Option<String>,
}

impl Config {
    /// Resolve configuration from CLI flags and the environment.
    ///
    /// `GITHUB_TOKEN` is optional; an empty value counts as unset.
    pub fn load<R: Runtime + ?Sized>(runtime: &R, api_url: Option<String>) -> Self {
        let token = runtime
            .env_var("GITHUB_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        match &token {
            Some(t) => debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(t)),
            None => debug!("GITHUB_TOKEN not set, using unauthenticated requests"),
        }

        Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token,
        }
    }
}

/// Keep only the first and last few characters of a token for logging.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
