//! Structured error types shared across the SDK

pub mod api_error;

pub use api_error::ApiError;
