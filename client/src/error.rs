//! Client error taxonomy

use thiserror::Error;

use jibu_core::ApiError;
use jibu_shared::errors::error_codes;

/// Failures surfaced by the API client and its services
///
/// Every failure path rejects; nothing is swallowed and nothing is retried
/// at this layer. `Unauthorized` is the only variant with a built-in side
/// effect (credential clear plus session-expired notification), performed
/// before the error is returned.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend rejected the stored credentials (HTTP 401)
    #[error("unauthorized: session expired")]
    Unauthorized,

    /// Structured error reported by the backend for any other non-2xx response
    #[error("{0}")]
    Api(ApiError),

    /// Network or transport failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON, or did not match the expected shape
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Phone number failed canonical validation; no request was issued
    #[error("invalid phone number: {phone}")]
    InvalidPhone { phone: String },

    /// One-time passcode failed validation; no request was issued
    #[error("invalid one-time passcode")]
    InvalidOtp,

    /// Client-side configuration problem
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &str {
        match self {
            ClientError::Unauthorized => error_codes::SESSION_EXPIRED,
            ClientError::Api(err) => &err.code,
            ClientError::Transport(_) => error_codes::TRANSPORT_ERROR,
            ClientError::Parse(_) => error_codes::PARSE_ERROR,
            ClientError::InvalidPhone { .. } => error_codes::INVALID_PHONE_FORMAT,
            ClientError::InvalidOtp => error_codes::INVALID_OTP,
            ClientError::Config(_) => error_codes::CONFIG_ERROR,
        }
    }

    /// The structured API error, when this failure carries one
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        ClientError::Api(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ClientError::Unauthorized.code(), "SESSION_EXPIRED");
        assert_eq!(
            ClientError::InvalidPhone {
                phone: "123".into()
            }
            .code(),
            "INVALID_PHONE_FORMAT"
        );
        let api = ClientError::Api(ApiError::new("m", "SOME_CODE", 400));
        assert_eq!(api.code(), "SOME_CODE");
    }

    #[test]
    fn test_as_api_error() {
        let err = ClientError::Api(ApiError::new("m", "C", 400));
        assert!(err.as_api_error().is_some());
        assert!(ClientError::Unauthorized.as_api_error().is_none());
    }
}
