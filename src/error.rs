//! Error types for the rendering widget

use thiserror::Error;

/// Result type alias for widget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering
#[derive(Error, Debug)]
pub enum Error {
    /// An SGR sequence carried extended-color parameters that could not be
    /// interpreted (e.g. `38` with a missing or unknown color mode)
    #[error("Invalid SGR sequence: {0}")]
    InvalidSgr(String),

    /// The render payload handed over by the host was malformed
    #[error("Malformed render payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A display surface failed to accept new content
    #[error("Surface write failed: {0}")]
    Surface(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Surface(err.to_string())
    }
}
