//! Structured API error carried by non-2xx responses

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use jibu_shared::errors::{error_codes, ErrorBody, DEFAULT_ERROR_MESSAGE};

/// Error reported by the backend for a failed request
///
/// Never partially populated: `message` and `code` fall back to
/// `"An error occurred"` / `"UNKNOWN_ERROR"` when the response body omits
/// them, and `status` always carries the HTTP status of the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    /// Human-readable error message for UI display
    pub message: String,

    /// Error code for programmatic handling
    pub code: String,

    /// HTTP status of the failed response
    pub status: u16,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiError {
    /// Create an error with explicit fields
    pub fn new(message: impl Into<String>, code: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            status,
            details: None,
        }
    }

    /// Build the structured error from a parsed response body
    ///
    /// Absent fields are substituted with the documented fallbacks so the
    /// result is always fully populated.
    pub fn from_body(status: u16, body: ErrorBody) -> Self {
        Self {
            message: body
                .message
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            code: body
                .code
                .unwrap_or_else(|| error_codes::UNKNOWN_ERROR.to_string()),
            status,
            details: body.details,
        }
    }

    /// Attach details to the error
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, HTTP {})", self.message, self.code, self.status)
    }
}

impl std::error::Error for ApiError {}
