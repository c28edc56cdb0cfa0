//! Value objects for authentication responses

pub mod auth_tokens;

pub use auth_tokens::{AuthTokens, OtpReceipt};
