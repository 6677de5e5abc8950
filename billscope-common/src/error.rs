//! Error types for the billscope pipeline.

use thiserror::Error;

/// Result type alias using the billscope error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for billscope crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing credential, unreadable config file).
    /// Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote document could not be fetched (unreachable URL, timeout,
    /// HTTP failure status).
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Document bytes could not be parsed as a PDF.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The heuristic gate rejected the text. A terminal outcome for the
    /// current input rather than a failure of the system itself.
    #[error("Rejected: {0}")]
    Rejected(String),

    /// The inference service call failed (auth, network, provider-side).
    #[error("Inference error: {0}")]
    Inference(String),

    /// Invalid input or request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error should abort startup.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is the heuristic gate rejecting an input.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
