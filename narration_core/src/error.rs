//! Guide error types.

use landmark_atlas::AtlasError;
use thiserror::Error;

use crate::orchestrator::GenerationError;

/// Errors surfaced by the guide outside of the pure extraction path.
#[derive(Error, Debug)]
pub enum GuideError {
    /// Knowledge base could not be loaded or queried
    #[error("Atlas error: {0}")]
    Atlas(#[from] AtlasError),

    /// Configuration values are out of range
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external text generator failed
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// Result type alias for guide operations.
pub type Result<T> = std::result::Result<T, GuideError>;
