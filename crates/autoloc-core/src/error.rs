//! Error types for AutoLoc backend access

use thiserror::Error;

/// Failure modes of a backend call. Accessors never retry and never
/// transform error payloads; errors bubble unchanged to the page that
/// triggered the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Result type alias using our ApiError type
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create a network/transport error
    pub fn network(msg: impl Into<String>) -> Self {
        ApiError::Network(msg.into())
    }

    /// Create a non-success HTTP status error
    pub fn status(status: u16, path: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            path: path.into(),
        }
    }

    /// Create a malformed-response error
    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }

    /// Message shown in load-failure banners and mutation notices.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Impossible de joindre le serveur".to_string(),
            ApiError::Status { status, .. } => {
                format!("Le serveur a répondu avec une erreur ({status})")
            }
            ApiError::Decode(_) => "Réponse du serveur illisible".to_string(),
        }
    }
}
