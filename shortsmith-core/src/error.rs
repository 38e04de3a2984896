//! Error types for shortsmith-core

use thiserror::Error;

/// Main error type for the shortsmith-core library
///
/// The generators themselves are total; only session selection,
/// configuration loading and export can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Idea not part of the current batch
    #[error("idea not found: {0}")]
    IdeaNotFound(String),

    /// No plan has been generated yet
    #[error("nothing generated yet; launch the planner first")]
    NothingGenerated,
}

/// Result type alias for shortsmith-core
pub type Result<T> = std::result::Result<T, Error>;
