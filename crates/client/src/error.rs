//! Error types for the vCenter client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during vCenter client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login was rejected.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// An operation was invoked before `login()`.
    #[error("Not logged in: call login() before invoking operations")]
    NotAuthenticated,

    /// The session token was rejected (expired or invalidated server-side).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from the vCenter API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Object not found (VM, snapshot, host, ...).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::NotAuthenticated | Self::Unauthorized(_)
        )
    }

    /// Check if this error indicates a connection-level failure.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            Self::InvalidUrl(_) => true,
            _ => false,
        }
    }
}
