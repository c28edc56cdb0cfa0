//! # Jibu Core
//!
//! Domain layer for the Jibu client SDK. This crate contains the wire
//! entities exchanged with the backend, the credential store abstraction,
//! the session expiry observer seam, and the structured API error type.

pub mod credentials;
pub mod domain;
pub mod errors;
pub mod session;

// Re-export commonly used types for convenience
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use domain::*;
pub use errors::ApiError;
pub use session::SessionListener;
