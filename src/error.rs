//! Domain errors shared by the CLI and the protocol server.

/// Errors raised while parsing input, talking to GitHub, or rendering output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository string is not `owner/repo`.
    #[error("invalid repository format: {0} (expected format: owner/repo)")]
    MalformedIdentifier(String),

    /// The repository or its latest release does not exist.
    #[error("no release found for {repository}: {cause}")]
    NotFound { repository: String, cause: String },

    /// GitHub refused the request because of rate limiting.
    #[error("GitHub API rate limit exceeded. Please set GITHUB_TOKEN environment variable")]
    RateLimited,

    /// Any other failure reported by GitHub or the transport.
    #[error("failed to get latest release: {0}")]
    Upstream(String),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Missing, unreadable, or malformed input file.
    #[error("{0}")]
    InputFile(String),

    #[error("failed to marshal JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(repository: impl ToString, cause: impl ToString) -> Self {
        Error::NotFound {
            repository: repository.to_string(),
            cause: cause.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
