//! Shared error codes and wire error shapes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback message used when an error response body carries no `message`
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Common error codes used across the SDK
pub mod error_codes {
    pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const SESSION_EXPIRED: &str = "SESSION_EXPIRED";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_PHONE_FORMAT: &str = "INVALID_PHONE_FORMAT";
    pub const INVALID_OTP: &str = "INVALID_OTP";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Lenient deserialization target for non-2xx response bodies
///
/// The backend reports failures as JSON objects with `message`, `code` and
/// optional `details` fields, but none of them is guaranteed to be present.
/// Missing fields are filled with fallbacks when the structured API error is
/// constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: Option<String>,

    /// Error code for programmatic handling
    pub code: Option<String>,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ErrorBody {
    /// Extract an error body from an arbitrary JSON value
    ///
    /// Bodies that are not objects (arrays, bare strings, null) produce an
    /// empty body so the fallbacks apply.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}
