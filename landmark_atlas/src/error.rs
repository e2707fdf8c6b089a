//! Atlas error types.

use thiserror::Error;

/// Errors raised while loading or querying the knowledge base.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// The knowledge base failed structural validation.
    #[error("Malformed knowledge base: {0}")]
    MalformedKnowledgeBase(String),

    /// The requested location has no entry.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// The knowledge base file has an extension we cannot parse.
    #[error("Unsupported knowledge base format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for atlas operations.
pub type Result<T> = std::result::Result<T, AtlasError>;
