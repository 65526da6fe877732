//! Error types for the resource handlers

use thiserror::Error;

/// Result type alias using the shared handler Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the API client and the field mappers.
///
/// Handlers never let these escape: every variant is converted into a
/// FAILED progress envelope at the handler boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No {kind} matched the requested identity")]
    EmptyResult { kind: String },

    #[error("Missing required attribute: {0}")]
    MissingAttribute(&'static str),
}

impl Error {
    /// Whether this error came back from the remote service rather than
    /// from local request construction.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Api { .. })
    }
}
