//! Error types for suggestion requests and configuration.

use thiserror::Error;

/// Errors produced while fetching suggestions or loading configuration.
///
/// The widget never lets these escape: every request failure collapses
/// into a hidden, empty panel. Only configuration loading reports them
/// to a caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// The request could not be sent or the connection failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned HTTP {0}")]
    Status(u16),

    /// The response body was not a JSON array of strings.
    #[error("Failed to decode suggestions: {0}")]
    Decode(String),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SuggestError {
    fn from(err: serde_json::Error) -> Self {
        SuggestError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SuggestError::Status(status.as_u16()),
            None if err.is_decode() => SuggestError::Decode(err.to_string()),
            None => SuggestError::Transport(err.to_string()),
        }
    }
}
