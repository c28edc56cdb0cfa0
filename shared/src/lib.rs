//! Shared utilities and common types for the Jibu client SDK
//!
//! This crate provides common functionality used across the SDK crates:
//! - Configuration types
//! - Error codes and wire error shapes
//! - Utility functions (phone validation, OTP validation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::ApiConfig;
pub use errors::{error_codes, ErrorBody, DEFAULT_ERROR_MESSAGE};
pub use utils::{phone, validation};
