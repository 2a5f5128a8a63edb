//! Normalized API errors
//!
//! Every failure the API client can observe is folded into [`ErrorInfo`].
//! Callers match on [`ErrorCode`] to handle the known categories and fall
//! through to [`ErrorCode::Other`] for anything the server invents.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error category carried by [`ErrorInfo`]
///
/// Serializes as its wire code (`"NETWORK_ERROR"`, `"NOT_FOUND"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// Transport failure before any response was received
    Network,
    /// Non-2xx response without a structured error body
    Http,
    /// `success: false` without an error object, or an undecodable 2xx body
    Unknown,
    /// Server rejected the payload
    Validation,
    /// Server could not find the resource
    NotFound,
    /// Server refused the caller
    Unauthorized,
    /// Any other server-supplied code, verbatim
    Other(String),
}

impl ErrorCode {
    /// Map a wire code to its category
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        match code.as_str() {
            "NETWORK_ERROR" => Self::Network,
            "HTTP_ERROR" => Self::Http,
            "UNKNOWN_ERROR" => Self::Unknown,
            "VALIDATION_ERROR" => Self::Validation,
            "NOT_FOUND" => Self::NotFound,
            "UNAUTHORIZED" => Self::Unauthorized,
            _ => Self::Other(code),
        }
    }

    /// Wire representation of this code
    pub fn as_str(&self) -> &str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::Http => "HTTP_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Other(code) => code,
        }
    }

    /// Whether the failure happened on the client side of the wire
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network)
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::from_code(code)
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure half of every API result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code}: {message}")]
pub struct ErrorInfo {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ErrorInfo {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Transport failure (DNS, refused connection, timeout)
    pub fn network(message: impl fmt::Display) -> Self {
        Self::new(ErrorCode::Network, message.to_string())
    }

    /// Non-2xx response with no usable error body
    pub fn http(status: u16) -> Self {
        Self::new(ErrorCode::Http, format!("HTTP error {status}"))
    }

    /// Malformed response from the server
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unknown, message)
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    pub fn is_validation(&self) -> bool {
        self.code == ErrorCode::Validation
    }

    /// Message suitable for a notification, or `fallback` when the server sent none
    pub fn display_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        let message = self.message.trim();
        if message.is_empty() {
            fallback
        } else {
            message
        }
    }
}

/// Result type returned by every API operation
pub type ApiResult<T> = Result<T, ErrorInfo>;
