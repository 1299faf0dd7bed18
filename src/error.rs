//! Error types for the EBS client
//!
//! Every failed round trip is reported with the HTTP method and path so the
//! caller can tell which endpoint rejected it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for EBS client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the client, its configuration and the CLI
#[derive(Error, Debug)]
pub enum Error {
    // ═══════════════════════════════════════════════════════════════
    // Request Errors
    // ═══════════════════════════════════════════════════════════════
    /// Server answered with a status outside 200-299
    #[error("{method} {path} failed: HTTP {status}{}", body_suffix(.body))]
    Request {
        /// HTTP method of the failed request
        method: String,
        /// API path of the failed request
        path: String,
        /// Status code returned by the server
        status: u16,
        /// Trimmed error body, empty when it could not be read
        body: String,
    },

    /// Connection or I/O failure before a status was received
    #[error("{method} {path} failed: {reason}")]
    Transport {
        /// HTTP method of the failed request
        method: String,
        /// API path of the failed request
        path: String,
        /// Underlying transport error
        reason: String,
    },

    /// Success response whose body did not match the expected shape
    #[error("{method} {path} returned an undecodable body: {reason}")]
    Decode {
        /// HTTP method of the request
        method: String,
        /// API path of the request
        path: String,
        /// Decoder error
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════
    // Configuration & File Errors
    // ═══════════════════════════════════════════════════════════════
    /// Failed to read configuration file
    #[error("Failed to read config from {path}: {reason}")]
    ConfigRead {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O or encoding error
        reason: String,
    },

    /// Failed to write configuration file
    #[error("Failed to write config to {path}: {reason}")]
    ConfigWrite {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O or encoding error
        reason: String,
    },

    /// Directory operation failed
    #[error("Directory operation failed: {path}: {reason}")]
    DirError {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O or encoding error
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ═══════════════════════════════════════════════════════════════
    // Other Errors
    // ═══════════════════════════════════════════════════════════════
    /// Failed to serialize data
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

impl Error {
    /// HTTP status of a rejected request, `None` for every other error
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Request { status: 401 | 403, .. } => 3,
            Self::Request { .. } | Self::Transport { .. } | Self::Decode { .. } => 4,
            Self::ConfigRead { .. }
            | Self::ConfigWrite { .. }
            | Self::DirError { .. }
            | Self::InvalidConfig(_) => 5,
            _ => 1,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(status: u16, body: &str) -> Error {
        Error::Request {
            method: "POST".to_string(),
            path: "/api/v1/auth".to_string(),
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_request_error_message() {
        let err = rejected(401, "bad code");
        assert_eq!(err.to_string(), "POST /api/v1/auth failed: HTTP 401: bad code");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_request_error_without_body() {
        let err = rejected(500, "");
        assert_eq!(err.to_string(), "POST /api/v1/auth failed: HTTP 500");
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = Error::Transport {
            method: "POST".to_string(),
            path: "/api/v1/message".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("POST /api/v1/message"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(rejected(401, "").exit_code(), 3);
        assert_eq!(rejected(500, "").exit_code(), 4);
        assert_eq!(Error::InvalidConfig("x".into()).exit_code(), 5);
        assert_eq!(Error::Internal("x".into()).exit_code(), 1);
    }
}
