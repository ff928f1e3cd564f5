//! Error types for create-release.

use thiserror::Error;

/// Main error type for create-release operations.
#[derive(Error, Debug)]
pub enum CreateReleaseError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Client construction errors
    #[error("Failed to initialize forge client: {0}")]
    ClientInit(String),

    // Forge read errors (list pull requests, list releases)
    #[error("Remote query failed: {0}")]
    RemoteQuery(String),

    // Version errors
    #[error(
        "Malformed release tag '{tag}': expected vMAJOR.MINOR.PATCH with integer components"
    )]
    MalformedTag { tag: String },

    #[error(
        "Release tag '{tag}' cannot be advanced: version component overflows"
    )]
    VersionOverflow { tag: String },

    // Forge write errors (create pull request, add labels)
    #[error("Remote write failed: {0}")]
    RemoteWrite(String),

    #[error("Logger initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl CreateReleaseError {
    /// Create an invalid config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a client initialization error
    pub fn client_init(msg: impl Into<String>) -> Self {
        Self::ClientInit(msg.into())
    }

    /// Create a remote query error
    pub fn remote_query(msg: impl Into<String>) -> Self {
        Self::RemoteQuery(msg.into())
    }

    /// Create a remote write error
    pub fn remote_write(msg: impl Into<String>) -> Self {
        Self::RemoteWrite(msg.into())
    }

    /// Create a malformed tag error
    pub fn malformed_tag(tag: impl Into<String>) -> Self {
        Self::MalformedTag { tag: tag.into() }
    }

    /// Create a version overflow error
    pub fn version_overflow(tag: impl Into<String>) -> Self {
        Self::VersionOverflow { tag: tag.into() }
    }
}

/// Describe an octocrab failure, calling out rate limiting explicitly since
/// that is the most common transient failure in CI.
pub fn describe_github_error(context: &str, err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. }
            if source.message.contains("rate limit") =>
        {
            format!("{context}: GitHub API rate limit exceeded")
        }
        octocrab::Error::GitHub { source, .. } => format!(
            "{context}: GitHub API error (status {}): {}",
            source.status_code, source.message
        ),
        _ => format!("{context}: {err}"),
    }
}
