//! Credential token storage abstraction
//!
//! The bearer token is a process-wide single slot with last-write-wins
//! semantics. The store is injected into the API client rather than reached
//! through ambient global state, so the 401-triggered clear is testable
//! without a real browser storage mechanism.

pub mod memory;
pub mod store;

pub use memory::MemoryCredentialStore;
pub use store::CredentialStore;
