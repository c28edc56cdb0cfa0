//! Authentication value objects

use serde::{Deserialize, Serialize};

/// Tokens returned by a successful OTP verification
///
/// The backend follows the OAuth2 password-grant response shape. Only
/// `access_token` and `token_type` are guaranteed; `expires_in` is present
/// on newer backend revisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthTokens {
    /// Bearer token for subsequent authenticated requests
    pub access_token: String,

    /// Token type, always `bearer` in practice
    pub token_type: String,

    /// Access token lifetime in seconds, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// Acknowledgement returned when an OTP has been dispatched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OtpReceipt {
    /// Human-readable delivery status message
    pub message: String,
}
