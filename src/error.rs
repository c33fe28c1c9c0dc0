use thiserror::Error;

/// Unified error type for git-chronicle operations
#[derive(Error, Debug)]
pub enum ChronicleError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-chronicle
pub type Result<T> = std::result::Result<T, ChronicleError>;

impl ChronicleError {
    /// Create an invalid-version error carrying the offending text
    pub fn invalid_version(text: impl Into<String>) -> Self {
        ChronicleError::InvalidVersion(text.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChronicleError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ChronicleError::Tag(msg.into())
    }
}
