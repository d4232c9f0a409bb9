//! Error types for calls against the Navidrome backend.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, dropped socket).
    #[error("{0}")]
    Transport(String),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered but reported a failure inside its envelope.
    #[error("{0}")]
    Backend(String),

    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Message shown to the user in a notification banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(err) => format!("Network error: {err}"),
            other => other.to_string(),
        }
    }
}
