//! # Common Error Types
//!
//! Consolidated error handling for the One Bucket client core.
//!
//! ## Error Categories
//!
//! - **[`ApiError`]**: Backend API communication errors. The [`ApiError::Auth`]
//!   variant (401/403, or no token to send) is the only one that changes the
//!   session; every other variant is left to the calling screen.
//! - **[`TokenStoreError`]**: Reading or writing the persisted token pair.
//! - **[`AppError`]**: Application-wide wrapper used by handlers and the
//!   orchestrator.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use one_bucket::core::error::{ApiError, AppError};
//!
//! let err: AppError = ApiError::Auth { status: 401 }.into();
//! assert!(err.is_auth());
//! assert_eq!(err.to_string(), "API error: Unauthorized (HTTP 401)");
//! ```

use thiserror::Error;

/// Backend API failure, classified by how the client must react to it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// 401/403 from an authenticated call, or no access token available.
    ///
    /// Always interpreted as "not logged in".
    #[error("Unauthorized (HTTP {status})")]
    Auth { status: u16 },

    /// Connection refused, timeout, DNS failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Any other non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected DTO.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The stored access token could not be read; no request was sent.
    #[error("Token storage unreadable: {0}")]
    TokenStorage(String),
}

impl ApiError {
    /// Status used for the "no token to send" case.
    pub const MISSING_TOKEN_STATUS: u16 = 401;

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::Auth { status },
            _ => ApiError::Status {
                status,
                message: message.into(),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16(), err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Failure reading or writing the persisted token pair.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token storage is corrupt: {0}")]
    Format(#[from] serde_json::Error),
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Token persistence error.
    #[error("Token store error: {0}")]
    TokenStore(#[from] TokenStoreError),

    /// Invalid state transition (e.g. mounting the app twice).
    #[error("State error: {0}")]
    State(String),

    /// Route not reachable from the current navigation graph.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or malformed configuration.
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether this error means the session is no longer authorized.
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Api(err) if err.is_auth())
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
