//! Credential store trait defining the interface for bearer token storage

/// Single-slot storage for the session bearer token
///
/// The token is created on successful OTP verification, read at the start of
/// every authenticated request, and destroyed on explicit logout or on
/// receipt of an unauthorized response. Implementations must tolerate
/// concurrent readers; writes are last-write-wins.
pub trait CredentialStore: Send + Sync {
    /// Read the currently stored token, if any
    fn get(&self) -> Option<String>;

    /// Replace the stored token
    fn set(&self, token: &str);

    /// Remove the stored token
    ///
    /// Clearing an empty store is a no-op, not an error.
    fn clear(&self);

    /// Check whether a token is currently stored
    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
