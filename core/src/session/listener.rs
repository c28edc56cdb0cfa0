//! Session expiry observer seam
//!
//! The API client does not navigate anywhere when a session expires; it
//! emits a structured event through this trait and lets the hosting
//! application layer (typically its router) decide what to do. This keeps
//! the client unit-testable without a navigation stub.

/// Observer notified when the backend rejects the stored credentials
///
/// Invoked exactly once per unauthorized response, after the credential
/// store has been cleared. Implementations must not block: the notification
/// happens on the request path.
pub trait SessionListener: Send + Sync {
    /// The stored session is no longer valid and has been discarded
    fn on_session_expired(&self);
}
