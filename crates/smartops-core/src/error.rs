//! Error types for the SmartOps client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message used when the login endpoint rejects a request without
/// explaining why.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Maximum number of characters of a response body kept for diagnostics.
pub const BODY_SNIPPET_CHARS: usize = 200;

/// Truncates a response body for logs and error messages.
pub fn body_snippet(body: &str) -> String {
    match body.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// A shared error type for the entire SmartOps core.
///
/// Variants mirror the failure taxonomy callers need to tell apart:
/// remote rejections, transport failures, undecodable bodies, and
/// persistent store failures.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmartOpsError {
    /// The response body was not valid JSON (or lacked required fields).
    #[error("Server returned invalid JSON (status {status}): {body_snippet}")]
    MalformedResponse { status: u16, body_snippet: String },

    /// The authentication endpoint rejected the credentials.
    #[error("{0}")]
    AuthRejected(String),

    /// A resource request completed with a non-success status.
    #[error("HTTP error! status: {status}")]
    HttpError { status: u16 },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Reading from the persistent store failed.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Writing to (or removing from) the persistent store failed.
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Serialization/deserialization error outside of HTTP bodies
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller supplied an argument the core refuses to send.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SmartOpsError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MalformedResponse error from a status and a (truncated) body.
    pub fn malformed(status: u16, body_snippet: impl Into<String>) -> Self {
        Self::MalformedResponse {
            status,
            body_snippet: body_snippet.into(),
        }
    }

    /// Creates a MalformedResponse error from a full body, truncating it.
    pub fn malformed_body(status: u16, body: &str) -> Self {
        Self::malformed(status, body_snippet(body))
    }

    /// Creates an AuthRejected error, falling back to the generic message
    /// when the server gave none.
    pub fn auth_rejected(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
        Self::AuthRejected(message)
    }

    /// Creates an HttpError
    pub fn http(status: u16) -> Self {
        Self::HttpError { status }
    }

    /// Creates a NetworkError
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }

    /// Creates a StorageRead error
    pub fn storage_read(message: impl Into<String>) -> Self {
        Self::StorageRead(message.into())
    }

    /// Creates a StorageWrite error
    pub fn storage_write(message: impl Into<String>) -> Self {
        Self::StorageWrite(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }

    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::AuthRejected(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::NetworkError(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead(_) | Self::StorageWrite(_))
    }

    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status } | Self::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a screen showing this failure should offer a retry action.
    ///
    /// Remote and transport failures may succeed on a second attempt; bad
    /// input or configuration will not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::HttpError { .. } | Self::NetworkError(_) | Self::MalformedResponse { .. }
        )
    }

    /// Human-readable text suitable for an alert. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthRejected(message) if !message.trim().is_empty() => message.clone(),
            Self::AuthRejected(_) => LOGIN_FAILED_MESSAGE.to_string(),
            Self::MalformedResponse { status, .. } => {
                format!("Server returned invalid JSON. Status: {}", status)
            }
            Self::NetworkError(_) => "Unable to reach the server. Check your connection.".to_string(),
            Self::HttpError { status } => format!("Request failed with status {}", status),
            Self::StorageRead(_) | Self::StorageWrite(_) => {
                "Could not save your session on this device.".to_string()
            }
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SmartOpsError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for SmartOpsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SmartOpsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SmartOpsError>`.
pub type Result<T> = std::result::Result<T, SmartOpsError>;
