use thiserror::Error;

/// Unified error type for autover operations.
///
/// Only two conditions are fatal to a version computation: the git view
/// being unusable, and configuration that fails intake validation. Every
/// other adverse condition degrades to a default version plus a log event.
#[derive(Error, Debug)]
pub enum AutoverError {
    /// The git view could not be constructed or a required query failed
    /// unrecoverably. Distinct from "no commits yet", which is not an
    /// error.
    #[error("git unavailable: {0}")]
    GitUnavailable(String),

    /// Configuration rejected at intake: untokenizable build metadata or
    /// malformed identifiers. Never raised mid-walk.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in autover
pub type Result<T> = std::result::Result<T, AutoverError>;

impl AutoverError {
    /// Create a git-unavailable error with context
    pub fn git_unavailable(msg: impl Into<String>) -> Self {
        AutoverError::GitUnavailable(msg.into())
    }

    /// Create an invalid-configuration error with context
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        AutoverError::InvalidConfiguration(msg.into())
    }
}

impl From<git2::Error> for AutoverError {
    fn from(err: git2::Error) -> Self {
        AutoverError::GitUnavailable(err.to_string())
    }
}
