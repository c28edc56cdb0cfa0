//! Phone-OTP authentication flow
//!
//! Drives the two-step login: request an OTP for a phone number, then
//! exchange phone + OTP for a bearer token. The token write on successful
//! verification and the clear on logout both go through the injected
//! credential store; the 401-triggered clear lives in the API client.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use jibu_core::{AuthTokens, CredentialStore, OtpReceipt};
use jibu_shared::utils::phone::{is_valid_kenyan_phone, mask_phone_number, normalize_phone_number};
use jibu_shared::utils::validation::is_valid_otp;

use crate::error::ClientError;
use crate::http::ApiClient;

const REQUEST_OTP_PATH: &str = "auth/request-otp";
const VERIFY_OTP_PATH: &str = "auth/verify-otp";

/// OAuth2 grant type used by the verify endpoint
const PASSWORD_GRANT: &str = "password";

#[derive(Serialize)]
struct OtpRequest<'a> {
    phone: &'a str,
}

/// Authentication service for the phone-OTP login flow
pub struct AuthService {
    client: Arc<ApiClient>,
    credentials: Arc<dyn CredentialStore>,
}

impl AuthService {
    /// Create a new auth service
    ///
    /// `credentials` must be the same store the client reads its bearer
    /// token from, otherwise verified sessions never authenticate.
    pub fn new(client: Arc<ApiClient>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Request an OTP to be sent to a phone number
    ///
    /// The raw input is canonicalized first; numbers that do not validate
    /// after normalization are rejected locally with
    /// [`ClientError::InvalidPhone`] and no request is issued.
    pub async fn request_otp(&self, raw_phone: &str) -> Result<OtpReceipt, ClientError> {
        let phone = normalize_phone_number(raw_phone);
        if !is_valid_kenyan_phone(&phone) {
            return Err(ClientError::InvalidPhone { phone });
        }

        debug!(phone = %mask_phone_number(&phone), "requesting OTP");
        self.client
            .post(REQUEST_OTP_PATH, &OtpRequest { phone: &phone })
            .await
    }

    /// Exchange a phone number and OTP for a bearer token
    ///
    /// Sends the OAuth2 password-grant form (`username` = canonical phone,
    /// `password` = OTP digits). On success the access token is stored in
    /// the credential store, making subsequent client calls authenticated.
    pub async fn verify_otp(&self, raw_phone: &str, otp: &str) -> Result<AuthTokens, ClientError> {
        let phone = normalize_phone_number(raw_phone);
        if !is_valid_kenyan_phone(&phone) {
            return Err(ClientError::InvalidPhone { phone });
        }
        if !is_valid_otp(otp) {
            return Err(ClientError::InvalidOtp);
        }

        let fields = [
            ("grant_type", PASSWORD_GRANT),
            ("username", phone.as_str()),
            ("password", otp),
        ];

        let tokens: AuthTokens = self.client.post_form(VERIFY_OTP_PATH, &fields).await?;

        self.credentials.set(&tokens.access_token);
        info!(phone = %mask_phone_number(&phone), "session established");

        Ok(tokens)
    }

    /// Discard the stored session token
    pub fn logout(&self) {
        self.credentials.clear();
        info!("session cleared");
    }
}
