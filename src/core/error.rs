//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ParseError`] - Response bodies that don't match the requested shape
//! - [`InvalidThemeError`] - Theme construction from an unknown mode name
//! - [`StorageError`] - Web Storage read/write failures

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (offline, CORS, etc.)
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
    /// Body did not match the requested output shape
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FetchError {
    /// HTTP status code, if the server answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Response body is not valid for the requested shape.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("JSON parse error: {0}")]
pub struct ParseError(pub String);

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// Theme mode name other than `dark` or `light`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme '{0}' (expected 'dark' or 'light')")]
pub struct InvalidThemeError(pub String);

/// Web Storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Failed to write to storage (quota, security).
    #[error("failed to write to storage")]
    WriteFailed,
}
